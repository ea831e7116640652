//! Executability classifier (component A).
//!
//! Decides whether a filesystem entry should be executed as a CGI child or served as
//! static bytes. WSL's permission bits are unreliable (everything under a Windows
//! mount reports world-executable), so the shebang reader is the authoritative
//! fallback across all platforms once the cheap OS-specific checks fail.

use crate::shebang::read_shebang;
use once_cell::sync::Lazy;
use std::fs::Metadata;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OsFamily {
    Windows,
    Wsl,
    Unix,
}

static OS_FAMILY: Lazy<OsFamily> = Lazy::new(detect_os_family);

fn detect_os_family() -> OsFamily {
    if cfg!(windows) {
        return OsFamily::Windows;
    }

    if cfg!(target_os = "linux") {
        let version = std::fs::read_to_string("/proc/version").unwrap_or_default();
        let osrelease = std::fs::read_to_string("/proc/sys/kernel/osrelease").unwrap_or_default();
        if looks_like_wsl(&version) || looks_like_wsl(&osrelease) {
            return OsFamily::Wsl;
        }
    }

    OsFamily::Unix
}

fn looks_like_wsl(text: &str) -> bool {
    let lower = text.to_ascii_lowercase();
    lower.contains("wsl") || lower.contains("microsoft") || lower.contains("windows")
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Returns true if `path` (with file metadata `meta`) should be dispatched as a CGI
/// child rather than served as a static file.
///
/// Classification is a pure function of `(path, meta)` plus the process-wide OS
/// family, so it is deterministic and safe to call more than once per process — the
/// "classified at most once per dispatch" invariant is about not re-deriving the
/// verdict mid-request, not about memoizing the verdict itself.
pub fn is_executable(path: &Path, meta: &Metadata) -> bool {
    match *OS_FAMILY {
        OsFamily::Windows => matches!(
            lowercase_extension(path).as_deref(),
            Some("exe") | Some("bat") | Some("cmd")
        ),
        OsFamily::Wsl => matches!(lowercase_extension(path).as_deref(), Some("exe")),
        OsFamily::Unix => {
            if meta.is_dir() {
                return false;
            }
            if has_any_execute_bit(meta) {
                return true;
            }
            !read_shebang(path).is_empty()
        }
    }
}

#[cfg(unix)]
fn has_any_execute_bit(meta: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    meta.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
fn has_any_execute_bit(_meta: &Metadata) -> bool {
    false
}
