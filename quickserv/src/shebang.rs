//! Shebang reader (component B).
//!
//! A predicate-shaped helper, not a parser: any I/O error or non-file path yields the
//! empty string rather than propagating, because callers treat "no shebang" and
//! "couldn't check" identically.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{BufRead, BufReader};
use std::path::Path;

static SHEBANG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#!\S.*").unwrap());

/// Reads the first line of `path` and, if it matches `^#!\S.*`, returns the
/// interpreter directive with the `#!` prefix and any trailing `\r` stripped.
/// Returns an empty string on any error, for directories, or when the first line
/// doesn't match.
pub fn read_shebang(path: &Path) -> String {
    let file = match std::fs::File::open(path) {
        Ok(f) => f,
        Err(_) => return String::new(),
    };

    let mut first_line = String::new();
    if BufReader::new(file).read_line(&mut first_line).is_err() {
        return String::new();
    }

    let trimmed_newline = first_line.trim_end_matches('\n');

    if !SHEBANG_RE.is_match(trimmed_newline) {
        return String::new();
    }

    trimmed_newline
        .strip_prefix("#!")
        .unwrap_or("")
        .trim_end_matches('\r')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_file(contents: &[u8]) -> tempfile::TempDir {
        let dir = tempdir().unwrap();
        let mut f = std::fs::File::create(dir.path().join("f")).unwrap();
        f.write_all(contents).unwrap();
        dir
    }

    #[test]
    fn extracts_simple_shebang() {
        let dir = write_file(b"#!/bin/sh\necho hi\n");
        assert_eq!(read_shebang(&dir.path().join("f")), "/bin/sh");
    }

    #[test]
    fn strips_trailing_carriage_return() {
        let dir = write_file(b"#!/bin/sh\r\necho hi\n");
        assert_eq!(read_shebang(&dir.path().join("f")), "/bin/sh");
    }

    #[test]
    fn preserves_trailing_arguments() {
        let dir = write_file(b"#!/usr/bin/env python3\nprint('hi')\n");
        assert_eq!(read_shebang(&dir.path().join("f")), "/usr/bin/env python3");
    }

    #[test]
    fn requires_non_whitespace_immediately_after_bang() {
        let dir = write_file(b"#! /bin/sh\n");
        assert_eq!(read_shebang(&dir.path().join("f")), "");
    }

    #[test]
    fn missing_bang_yields_empty() {
        let dir = write_file(b"just a regular file\n");
        assert_eq!(read_shebang(&dir.path().join("f")), "");
    }

    #[test]
    fn empty_file_yields_empty() {
        let dir = write_file(b"");
        assert_eq!(read_shebang(&dir.path().join("f")), "");
    }

    #[test]
    fn missing_file_yields_empty_without_error() {
        let dir = tempdir().unwrap();
        assert_eq!(read_shebang(&dir.path().join("nope")), "");
    }

    #[test]
    fn directory_yields_empty_without_error() {
        let dir = tempdir().unwrap();
        assert_eq!(read_shebang(dir.path()), "");
    }
}
