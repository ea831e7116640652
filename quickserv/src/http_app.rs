//! Request handler (component E).
//!
//! CORS headers, path normalization, resolver-driven dispatch, and the directory
//! listing renderer — adapted from the teacher's static file server to also route
//! `Execute` entries into the CGI driver.

use crate::driver::{self, DriverOutcome, ExecutionRequest};
use crate::models::{BindInfo, DirEntry, FileEntry, ResolvedRoute};
use crate::{assets, resolver};
use bytes::Bytes;
use chrono::Utc;
use std::fs;
use std::net::SocketAddr;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use warp::http::{HeaderMap, Method, StatusCode};
use warp::{Filter, Reply};

/// Starts serving `root` at `bind.lan_address:bind.port` on all interfaces. Runs
/// until the process is killed — there is no graceful-shutdown path, matching
/// spec.md §6 ("Exit codes: 0 normal shutdown (never reached)").
pub async fn start_server(root: PathBuf, bind: BindInfo) {
    let root = Arc::new(root);

    let log_filter = warp::log::custom(|info| {
        tracing::info!(
            target: "quickserv::access",
            "{} {} {} {} - {} bytes",
            Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
            info.method(),
            info.path(),
            info.status(),
            info.elapsed().as_millis(),
        );
    });

    let routes = warp::path::full()
        .and(warp::method())
        .and(warp::header::headers_cloned())
        .and(warp::query::raw().or(warp::any().map(String::new)).unify())
        .and(warp::body::bytes())
        .and_then(move |path: warp::path::FullPath, method: Method, headers: HeaderMap, query: String, body: Bytes| {
            let root = Arc::clone(&root);
            async move { handle_request(root, path.as_str(), method, headers, query, body).await }
        })
        .with(log_filter)
        .with(warp::reply::with::header("access-control-allow-origin", "*"))
        .with(warp::reply::with::header("access-control-allow-methods", "*"))
        .with(warp::reply::with::header("access-control-allow-headers", "*"))
        .with(warp::reply::with::header("access-control-expose-headers", "*"));

    let addr = SocketAddr::from(([0, 0, 0, 0], bind.port));
    warp::serve(routes).run(addr).await;
}

async fn handle_request(
    root: Arc<PathBuf>,
    raw_path: &str,
    method: Method,
    headers: HeaderMap,
    query: String,
    body: Bytes,
) -> Result<warp::reply::Response, warp::Rejection> {
    if method == Method::OPTIONS {
        return Ok(warp::reply::with_status("", StatusCode::NO_CONTENT).into_response());
    }

    let normalized = normalize_path(raw_path);
    let route = resolver::resolve(&root, &normalized);

    match route {
        ResolvedRoute::Static(path) => serve_static_file(&path),
        ResolvedRoute::StaticDefault(key) => serve_embedded_asset(&key),
        ResolvedRoute::Directory(path) => serve_directory_listing(&path, &root, &normalized),
        ResolvedRoute::NotFound => Ok(not_found()),
        ResolvedRoute::Execute(script_path) => {
            run_executable(&script_path, &method, &headers, &query, &body).await
        }
    }
}

/// Collapses `.`/`..` segments and guarantees a leading slash, so every later
/// filesystem lookup sees an already-contained path (spec.md §4.E, Invariant 1).
fn normalize_path(raw_path: &str) -> String {
    let decoded = percent_encoding::percent_decode_str(raw_path)
        .decode_utf8_lossy()
        .into_owned();

    let mut segments: Vec<&str> = Vec::new();
    for component in Path::new(&decoded).components() {
        match component {
            Component::Normal(part) => segments.push(part.to_str().unwrap_or("")),
            Component::ParentDir => {
                segments.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

fn serve_static_file(path: &Path) -> Result<warp::reply::Response, warp::Rejection> {
    match fs::read(path) {
        Ok(contents) => {
            let mime_type = mime_guess::from_path(path).first_or_octet_stream().to_string();
            Ok(warp::reply::with_header(contents, "content-type", mime_type).into_response())
        }
        Err(_) => Ok(not_found()),
    }
}

fn serve_embedded_asset(key: &str) -> Result<warp::reply::Response, warp::Rejection> {
    match assets::get(key) {
        Some((bytes, mime)) => Ok(warp::reply::with_header(bytes, "content-type", mime).into_response()),
        None => Ok(not_found()),
    }
}

async fn run_executable(
    script_path: &Path,
    method: &Method,
    headers: &HeaderMap,
    query: &str,
    body: &[u8],
) -> Result<warp::reply::Response, warp::Rejection> {
    let header_pairs: Vec<(String, String)> = headers
        .iter()
        .map(|(name, value)| (name.as_str().to_string(), value.to_str().unwrap_or("").to_string()))
        .collect();

    let content_type = headers.get("content-type").and_then(|v| v.to_str().ok());
    let natively_executable = crate::driver::spawn::has_native_exec_permission(script_path);

    let request = ExecutionRequest {
        script_path,
        natively_executable,
        method: method.as_str(),
        headers: &header_pairs,
        content_type,
        query,
        body,
    };

    match driver::execute(request, CancellationToken::new()).await {
        DriverOutcome::Completed(bytes) => Ok(warp::reply::with_status(bytes, StatusCode::OK).into_response()),
        DriverOutcome::Failed(message) => {
            tracing::error!(error = %message, script = %script_path.display(), "executable route failed");
            Ok(warp::reply::with_status("Internal Server Error", StatusCode::INTERNAL_SERVER_ERROR).into_response())
        }
        DriverOutcome::Cancelled => {
            Ok(warp::reply::with_status("", StatusCode::INTERNAL_SERVER_ERROR).into_response())
        }
    }
}

fn not_found() -> warp::reply::Response {
    warp::reply::with_status("Not Found", StatusCode::NOT_FOUND).into_response()
}

fn serve_directory_listing(
    dir_path: &Path,
    root_path: &Path,
    request_path: &str,
) -> Result<warp::reply::Response, warp::Rejection> {
    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(_) => return Ok(not_found()),
    };

    let mut files: Vec<FileEntry> = Vec::new();
    let mut directories: Vec<DirEntry> = Vec::new();

    for entry in entries.flatten() {
        let path = entry.path();
        let file_name = entry.file_name().to_string_lossy().to_string();

        if file_name.starts_with('.') {
            continue;
        }

        let relative_path = if request_path == "/" {
            format!("/{file_name}")
        } else {
            format!("{request_path}/{file_name}")
        };

        if path.is_dir() {
            directories.push((file_name, relative_path));
        } else {
            let size = path.metadata().map(|m| m.len()).unwrap_or(0);
            files.push((file_name, relative_path, size));
        }
    }

    directories.sort_by(|a, b| a.0.cmp(&b.0));
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let title = if request_path == "/" {
        "Index of /".to_string()
    } else {
        format!("Index of {request_path}")
    };

    let mut html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>{title}</title>
    <style>
        body {{ font-family: Arial, sans-serif; margin: 40px; background-color: #f5f5f5; }}
        .container {{ background-color: white; padding: 20px; border-radius: 8px; box-shadow: 0 2px 4px rgba(0,0,0,0.1); }}
        h1 {{ color: #333; border-bottom: 2px solid #ddd; padding-bottom: 10px; }}
        table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
        th, td {{ padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }}
        th {{ background-color: #f8f9fa; font-weight: bold; }}
        a {{ color: #007bff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        .directory {{ color: #6f42c1; }}
        .file {{ color: #28a745; }}
        .size {{ text-align: right; font-family: monospace; }}
    </style>
</head>
<body>
    <div class="container">
        <h1>{title}</h1>
        <table>
            <thead><tr><th>Name</th><th>Type</th><th>Size</th></tr></thead>
            <tbody>"#
    );

    if request_path != "/" {
        let parent = parent_path(request_path);
        html.push_str(&format!(
            r#"<tr><td><a href="{parent}" class="directory">📁 ..</a></td><td>Directory</td><td>-</td></tr>"#
        ));
    }

    for (name, path) in directories {
        html.push_str(&format!(
            r#"<tr><td><a href="{path}" class="directory">📁 {name}</a></td><td>Directory</td><td>-</td></tr>"#
        ));
    }

    for (name, path, size) in files {
        let size_str = format_file_size(size);
        html.push_str(&format!(
            r#"<tr><td><a href="{path}" class="file">📄 {name}</a></td><td>File</td><td class="size">{size_str}</td></tr>"#
        ));
    }

    html.push_str("</tbody></table></div></body></html>");

    let _ = root_path;
    Ok(warp::reply::with_header(html, "content-type", "text/html; charset=utf-8").into_response())
}

fn parent_path(request_path: &str) -> String {
    match request_path.rfind('/') {
        Some(0) => "/".to_string(),
        Some(idx) => request_path[..idx].to_string(),
        None => "/".to_string(),
    }
}

fn format_file_size(size: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = size as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{size:.1} {}", UNITS[unit_index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_dot_dot_segments() {
        assert_eq!(normalize_path("/a/../b"), "/b");
        assert_eq!(normalize_path("/a/./b"), "/a/b");
        assert_eq!(normalize_path("/../../etc/passwd"), "/etc/passwd");
    }

    #[test]
    fn normalize_treats_empty_path_as_root() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("/"), "/");
    }

    #[test]
    fn parent_path_of_top_level_entry_is_root() {
        assert_eq!(parent_path("/sub"), "/");
    }

    #[test]
    fn parent_path_of_nested_entry_strips_last_segment() {
        assert_eq!(parent_path("/a/b"), "/a");
    }

    #[test]
    fn file_size_formatting_scales_units() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2048), "2.0 KB");
    }
}
