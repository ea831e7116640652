//! Route resolver (component C).
//!
//! Maps a normalized request path to one of `Static`, `StaticDefault`, `Execute`,
//! `Directory`, or `NotFound`. Always re-resolved per request: the `RouteMapEntry`
//! walk in `banner.rs` is cosmetic only, so the filesystem can change freely while the
//! server runs.

use crate::assets;
use crate::classifier::is_executable;
use crate::models::ResolvedRoute;
use std::fs;
use std::path::{Path, PathBuf};

/// `request_path` must already be normalized (leading slash, `.`/`..` segments
/// cleaned) by the request handler before this is called.
pub fn resolve(root: &Path, request_path: &str) -> ResolvedRoute {
    let relative = request_path.trim_start_matches('/');
    let candidate = if relative.is_empty() {
        root.to_path_buf()
    } else {
        root.join(relative)
    };

    let meta = match fs::metadata(&candidate) {
        Ok(meta) => meta,
        Err(_) => {
            return if assets::contains(request_path) {
                ResolvedRoute::StaticDefault(request_path.to_string())
            } else {
                ResolvedRoute::NotFound
            };
        }
    };

    if meta.is_dir() {
        if let Some(index_path) = find_index_executable(&candidate) {
            if let Ok(index_meta) = fs::metadata(&index_path) {
                return finalize(index_path, &index_meta);
            }
        }
        return match find_static_index(&candidate) {
            Some(index_path) => ResolvedRoute::Static(index_path),
            None => ResolvedRoute::Directory(candidate),
        };
    }

    finalize(candidate, &meta)
}

fn finalize(path: PathBuf, meta: &fs::Metadata) -> ResolvedRoute {
    if is_executable(&path, meta) {
        ResolvedRoute::Execute(path)
    } else {
        ResolvedRoute::Static(path)
    }
}

/// Scans the immediate children of `dir` for a file named `index` (case-insensitive,
/// extension stripped) that the classifier marks executable. Filesystem order decides
/// ties; `read_dir`'s iteration order is whatever the OS hands back.
fn find_index_executable(dir: &Path) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;

    for entry in entries.flatten() {
        let path = entry.path();
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(_) => continue,
        };
        if meta.is_dir() {
            continue;
        }

        let stem = path.file_stem().map(|s| s.to_string_lossy().to_lowercase());
        if stem.as_deref() != Some("index") {
            continue;
        }

        if is_executable(&path, &meta) {
            return Some(path);
        }
    }

    None
}

/// A directory with no executable index still falls through to the static file
/// server before a listing is generated, matching the behavior the teacher's static
/// server applies unconditionally (spec.md §4.C step 2, §8 boundary behavior).
fn find_static_index(dir: &Path) -> Option<PathBuf> {
    for name in ["index.html", "index.htm"] {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[cfg(unix)]
    fn make_executable(path: &Path) {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn resolves_plain_static_file() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("page.html"), b"<html></html>").unwrap();

        match resolve(dir.path(), "/page.html") {
            ResolvedRoute::Static(p) => assert_eq!(p, dir.path().join("page.html")),
            other => panic!("expected Static, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn resolves_executable_file() {
        let dir = tempdir().unwrap();
        let script = dir.path().join("hello");
        {
            let mut f = std::fs::File::create(&script).unwrap();
            writeln!(f, "#!/bin/sh\necho hi").unwrap();
        }
        make_executable(&script);

        match resolve(dir.path(), "/hello") {
            ResolvedRoute::Execute(p) => assert_eq!(p, script),
            other => panic!("expected Execute, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn directory_with_executable_index_routes_to_it() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        let index = sub.join("index.sh");
        {
            let mut f = std::fs::File::create(&index).unwrap();
            writeln!(f, "#!/bin/sh\necho hi").unwrap();
        }
        make_executable(&index);

        match resolve(dir.path(), "/sub") {
            ResolvedRoute::Execute(p) => assert_eq!(p, index),
            other => panic!("expected Execute, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn directory_with_non_executable_index_html_serves_it_statically() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        let index = sub.join("index.html");
        std::fs::write(&index, b"<html></html>").unwrap();

        match resolve(dir.path(), "/sub") {
            ResolvedRoute::Static(p) => assert_eq!(p, index),
            other => panic!("expected Static, got {other:?}"),
        }
    }

    #[test]
    fn directory_with_no_index_serves_listing() {
        let dir = tempdir().unwrap();
        std::fs::create_dir(dir.path().join("empty_sub")).unwrap();

        match resolve(dir.path(), "/empty_sub") {
            ResolvedRoute::Directory(_) => {}
            other => panic!("expected Directory, got {other:?}"),
        }
    }

    #[test]
    fn missing_path_without_embedded_asset_is_not_found() {
        let dir = tempdir().unwrap();
        match resolve(dir.path(), "/does/not/exist") {
            ResolvedRoute::NotFound => {}
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn favicon_falls_back_to_embedded_asset_when_absent_on_disk() {
        let dir = tempdir().unwrap();
        match resolve(dir.path(), "/favicon.ico") {
            ResolvedRoute::StaticDefault(p) => assert_eq!(p, "/favicon.ico"),
            other => panic!("expected StaticDefault, got {other:?}"),
        }
    }
}
