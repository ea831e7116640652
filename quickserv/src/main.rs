use quickserv::cli_utils::{get_cli_arguments, print_runtime_info};
use quickserv::fatal::fatal;
use quickserv::models::BindInfo;
use quickserv::{banner, http_app, macos_launch, network};
use shared::logging::app_logger::LogLevel;
use shared::logging::logging_helpers::get_default_log_builder;

#[tokio::main]
async fn main() {
    let mut args = get_cli_arguments();

    init_logging(&args.logfile, args.verbose);

    if let Ok(current_dir) = std::env::current_dir() {
        let argv0 = std::env::args().next().map(std::path::PathBuf::from).unwrap_or_default();
        if let Some(double_click_dir) = macos_launch::double_click_dir(args.dir_is_default, &argv0, &current_dir) {
            args.root_path = double_click_dir;
        }
    }

    if !args.root_path.exists() || !args.root_path.is_dir() {
        fatal(
            &anyhow::anyhow!("'{}' does not exist or is not a directory", args.root_path.display()),
            args.no_pause,
        );
    }

    if let Err(e) = std::env::set_current_dir(&args.root_path) {
        fatal(
            &anyhow::Error::new(e).context(format!("failed to change into '{}'", args.root_path.display())),
            args.no_pause,
        );
    }

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(e) => fatal(&anyhow::Error::new(e).context("failed to resolve the serving root"), args.no_pause),
    };

    let route_map = banner::walk_route_map(&root);

    let lan_address = match network::discover_lan_address() {
        Ok(addr) => addr,
        Err(e) => fatal(&anyhow::Error::new(e).context("failed to discover a LAN-facing address"), args.no_pause),
    };
    let port = network::select_port(args.random_port);
    let bind = BindInfo { lan_address, port };

    banner::print_banner(&root, lan_address, port, &route_map);
    print_runtime_info(&args, &bind);

    http_app::start_server(root, bind).await;
}

fn init_logging(logfile: &str, verbose: bool) {
    let log_level = if verbose { LogLevel::Debug } else { LogLevel::Info };

    if logfile == "-" {
        get_default_log_builder(shared::constants::general::QUICKSERV_APP_NAME, log_level).init();
        return;
    }

    init_logging_to_file(logfile, log_level);
}

/// `AppLogger`'s file layer names files by app name inside a rotating log folder;
/// `--logfile` names one literal append destination, so this builds the same kind
/// of `tracing_subscriber` layer `AppLogger::init` does, pointed at that path
/// directly instead of going through its folder/rotation convention.
fn init_logging_to_file(logfile: &str, log_level: LogLevel) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let default_level = match log_level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
        LogLevel::Fatal => "error",
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_level.into());

    let console_layer = tracing_subscriber::fmt::layer().boxed();
    let mut layers = vec![console_layer];

    if let Ok(file) = std::fs::OpenOptions::new().create(true).append(true).open(logfile) {
        layers.push(tracing_subscriber::fmt::layer().with_writer(file).with_ansi(false).boxed());
    } else {
        eprintln!("warning: could not open logfile '{logfile}', logging to console only");
    }

    tracing_subscriber::registry().with(env_filter).with(layers).init();
}
