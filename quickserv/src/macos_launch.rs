//! MacOS double-click working-directory heuristic (component J, spec.md §6).
//!
//! Lets a double-clicked bundle serve its sibling files: MacOS launches a
//! double-clicked binary with the current directory set to the user's home, which
//! is almost never what someone wants when the binary sits next to the files it
//! should serve.

use std::path::{Path, PathBuf};

/// Returns the directory to serve from in place of `--dir`'s default, if the
/// double-click heuristic applies: host is MacOS, `--dir` was left at its default,
/// `argv0` is absolute, and the current directory is the user's home.
pub fn double_click_dir(dir_is_default: bool, argv0: &Path, current_dir: &Path) -> Option<PathBuf> {
    if !cfg!(target_os = "macos") || !dir_is_default || !argv0.is_absolute() {
        return None;
    }

    let home = dirs::home_dir()?;
    if current_dir != home {
        return None;
    }

    argv0.parent().map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_default_dir_never_triggers_the_heuristic() {
        assert_eq!(
            double_click_dir(false, Path::new("/Applications/Quick.app/quickserv"), Path::new("/")),
            None
        );
    }

    #[test]
    fn relative_argv0_never_triggers_the_heuristic() {
        assert_eq!(
            double_click_dir(true, Path::new("quickserv"), Path::new("/")),
            None
        );
    }
}
