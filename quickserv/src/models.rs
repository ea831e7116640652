use std::net::IpAddr;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

/// Parsed and validated CLI configuration (component F).
#[derive(Debug, Clone)]
pub struct ServerArgs {
    /// Directory to serve from (`--dir`). The process chdirs here at startup.
    pub root_path: PathBuf,
    /// Where to append log lines (`--logfile`). `"-"` means standard output.
    pub logfile: String,
    /// Bind a random port in `[1025, 65535]` instead of the default 42069.
    pub random_port: bool,
    /// Skip the "Press Enter to quit!" prompt on fatal startup error.
    pub no_pause: bool,
    /// Raise the log level to debug.
    pub verbose: bool,
    /// True when `--dir` was left at its default value — consulted by the MacOS
    /// double-click heuristic (component J), which only applies when the user
    /// never explicitly chose a directory.
    pub dir_is_default: bool,
}

/// Resolved bind address, computed once at startup.
#[derive(Debug, Clone, Copy)]
pub struct BindInfo {
    pub lan_address: IpAddr,
    pub port: u16,
}

/// The outcome of resolving a request path (component C).
#[derive(Debug, Clone)]
pub enum ResolvedRoute {
    /// Serve bytes from disk at this absolute path.
    Static(PathBuf),
    /// Serve bytes from the embedded default asset store; the string is the
    /// request path used as the lookup key (relative to the serving root).
    StaticDefault(String),
    /// Run the file at this absolute path as a CGI child.
    Execute(PathBuf),
    /// Emit a directory listing for this absolute path.
    Directory(PathBuf),
    /// Nothing matched on disk or in the embedded store.
    NotFound,
}

/// One entry discovered during the startup-only route map walk (component G).
/// Never consulted by the runtime dispatcher — see spec.md §3 "Route map".
#[derive(Debug, Clone)]
pub struct RouteMapEntry {
    pub request_path: String,
    pub executable_path: PathBuf,
}

/// Built by the driver (component D) for one request; lives only for the duration
/// of a single dispatch.
#[derive(Debug, Clone)]
pub struct ChildInvocation {
    /// The absolutized program to spawn (either the script itself, when natively
    /// executable, or its shebang interpreter).
    pub program: PathBuf,
    /// Working directory: parent of the script.
    pub working_dir: PathBuf,
    /// Full argument vector, already including any shebang-prefix tokens, the
    /// absolute script path (when run through an interpreter), and form-derived
    /// arguments.
    pub argv: Vec<String>,
    /// `REQUEST_METHOD` + one `HTTP_<NAME>` entry per header-value pair, appended
    /// on top of the inherited process environment.
    pub env_overlay: Vec<(String, String)>,
    pub cancellation: CancellationToken,
}

/// A directory entry rendered in a listing: `(name, relative_url_path)`.
pub type DirEntry = (String, String);

/// A file entry rendered in a listing: `(name, relative_url_path, size_in_bytes)`.
pub type FileEntry = (String, String, u64);
