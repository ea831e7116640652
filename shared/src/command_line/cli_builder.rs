use clap::{Arg, ArgAction, Command};

/// Small conveniences shared by every tool's `clap::Command` so they all look and feel
/// the same from the terminal.
pub trait CommandExt {
    /// Sets version, short about and long about in one call.
    fn add_basic_metadata(self, version: &str, about: &str, long_about: &str) -> Self;

    /// Adds the common `-v, --verbose` flag. `help` overrides the default help text when set.
    fn preset_arg_verbose(self, help: Option<&str>) -> Self;
}

impl CommandExt for Command {
    fn add_basic_metadata(self, version: &str, about: &str, long_about: &str) -> Self {
        self.version(version.to_string())
            .about(about.to_string())
            .long_about(long_about.to_string())
    }

    fn preset_arg_verbose(self, help: Option<&str>) -> Self {
        self.arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help(help.unwrap_or("Enable verbose (debug-level) logging.")),
        )
    }
}
