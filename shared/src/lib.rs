pub mod command_line;
pub mod constants;
pub mod logging;
pub mod system;
