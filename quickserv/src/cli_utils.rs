use crate::models::{BindInfo, ServerArgs};
use clap::{Arg, ArgAction, Command};
use shared::command_line::cli_builder::CommandExt;
use shared::constants::general::DASH_LINE;
use std::path::PathBuf;

pub const DEFAULT_DIR: &str = ".";
pub const DEFAULT_LOGFILE: &str = "-";

pub fn print_runtime_info(args: &ServerArgs, bind: &BindInfo) {
    println!("🚀 QuickServ v{}", env!("CARGO_PKG_VERSION"));
    println!("{DASH_LINE}");
    println!("📂 Serving: {}", args.root_path.display());
    println!(
        "🌐 http://{}:{}",
        crate::network::display_host(bind.lan_address),
        bind.port
    );
    println!("📝 Log: {}", args.logfile);
}

pub fn get_cli_arguments() -> ServerArgs {
    let matches = Command::new(env!("CARGO_PKG_NAME"))
        .add_basic_metadata(
            env!("CARGO_PKG_VERSION"),
            env!("CARGO_PKG_DESCRIPTION"),
            "Zero-configuration CGI-style local HTTP server: executable files become dynamic \
             endpoints, everything else is served statically.",
        )
        .preset_arg_verbose(None)
        .arg(
            Arg::new("logfile")
                .long("logfile")
                .value_name("PATH")
                .help("Path to append log lines to; '-' means standard output")
                .default_value(DEFAULT_LOGFILE),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .value_name("DIR")
                .help("Directory to serve from")
                .default_value(DEFAULT_DIR),
        )
        .arg(
            Arg::new("random-port")
                .long("random-port")
                .action(ArgAction::SetTrue)
                .help("Bind to a cryptographically chosen port in [1025, 65535] instead of 42069"),
        )
        .arg(
            Arg::new("no-pause")
                .long("no-pause")
                .action(ArgAction::SetTrue)
                .help("Do not prompt \"Press Enter to quit!\" on fatal error"),
        )
        .get_matches();

    let dir_arg = matches.get_one::<String>("dir").cloned().unwrap_or_default();
    let dir_is_default = dir_arg == DEFAULT_DIR;

    ServerArgs {
        root_path: PathBuf::from(dir_arg),
        logfile: matches.get_one::<String>("logfile").cloned().unwrap_or_default(),
        random_port: matches.get_flag("random-port"),
        no_pause: matches.get_flag("no-pause"),
        verbose: matches.get_flag("verbose"),
        dir_is_default,
    }
}
