pub mod app_logger;
pub mod logging_helpers;
