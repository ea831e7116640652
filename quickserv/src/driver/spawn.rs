//! Child construction (spec.md §4.D "Child construction").

use crate::shebang::read_shebang;
use std::io;
use std::path::{Path, PathBuf};

/// What to actually `exec`: a program, its argv (not including argv[0]), and the
/// working directory to spawn it in (always the script's parent directory).
pub struct Invocation {
    pub program: PathBuf,
    pub prefix_args: Vec<String>,
    pub working_dir: PathBuf,
}

/// Builds the program/prefix-args/working-dir for `script_path`, which the resolver
/// has already classified as executable.
///
/// **Open question preserved from spec.md §9**: when the script lacks native execute
/// permission and is run through a shebang interpreter, that interpreter is resolved
/// by the OS's normal `$PATH`/exec search, not confined to the serving root. A
/// malicious shebang can therefore run any program on `$PATH`. This tool is scoped to
/// trusted directories, so the behavior is preserved rather than sandboxed.
pub fn build_invocation(script_path: &Path, natively_executable: bool) -> io::Result<Invocation> {
    let absolute_script = std::fs::canonicalize(script_path)?;
    let working_dir = absolute_script
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    if natively_executable {
        return Ok(Invocation {
            program: absolute_script,
            prefix_args: Vec::new(),
            working_dir,
        });
    }

    let shebang = read_shebang(&absolute_script);
    let tokens = shell_words::split(&shebang)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    let mut tokens = tokens.into_iter();
    let program = tokens
        .next()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "empty shebang"))?;

    let mut prefix_args: Vec<String> = tokens.collect();
    prefix_args.push(absolute_script.to_string_lossy().into_owned());

    Ok(Invocation {
        program: PathBuf::from(program),
        prefix_args,
        working_dir,
    })
}

/// Checks native OS execute permission only (no shebang fallback) — used by the
/// driver to decide whether to spawn the file directly or through its shebang
/// interpreter. This is a narrower check than `classifier::is_executable`, which
/// also accepts a shebang-only file as executable.
#[cfg(unix)]
pub fn has_native_exec_permission(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|meta| !meta.is_dir() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(windows)]
pub fn has_native_exec_permission(path: &Path) -> bool {
    matches!(
        path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase()),
        Some(ref ext) if ext == "exe" || ext == "bat" || ext == "cmd"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[cfg(unix)]
    #[test]
    fn natively_executable_script_spawns_directly() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("hello");
        {
            let mut f = std::fs::File::create(&script).unwrap();
            writeln!(f, "#!/bin/sh\necho hi").unwrap();
        }
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let invocation = build_invocation(&script, true).unwrap();
        assert_eq!(invocation.program, std::fs::canonicalize(&script).unwrap());
        assert!(invocation.prefix_args.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_script_spawns_through_shebang_interpreter() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("add.py");
        {
            let mut f = std::fs::File::create(&script).unwrap();
            writeln!(f, "#!python3").unwrap();
        }

        let invocation = build_invocation(&script, false).unwrap();
        assert_eq!(invocation.program, PathBuf::from("python3"));
        assert_eq!(
            invocation.prefix_args,
            vec![std::fs::canonicalize(&script).unwrap().to_string_lossy().into_owned()]
        );
    }

    #[cfg(unix)]
    #[test]
    fn shebang_with_interpreter_flags_prepends_them() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("run");
        {
            let mut f = std::fs::File::create(&script).unwrap();
            writeln!(f, "#!/usr/bin/env -S python3 -u").unwrap();
        }

        let invocation = build_invocation(&script, false).unwrap();
        assert_eq!(invocation.program, PathBuf::from("/usr/bin/env"));
        assert_eq!(
            invocation.prefix_args,
            vec![
                "-S".to_string(),
                "python3".to_string(),
                "-u".to_string(),
                std::fs::canonicalize(&script).unwrap().to_string_lossy().into_owned(),
            ]
        );
    }
}
