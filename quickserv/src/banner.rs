//! Startup banner and one-shot route map walk (component G).
//!
//! The walk here is purely cosmetic: it exists to print a route map at startup and
//! must never be consulted by the runtime dispatcher, which always re-resolves
//! through `resolver::resolve` per spec.md §3 ("Route map ... banner use only").

use crate::classifier::is_executable;
use crate::models::RouteMapEntry;
use shared::constants::general::DASH_LINE;
use std::fs;
use std::net::IpAddr;
use std::path::{Path, PathBuf};

/// Walks `root` once, collecting every executable file as a `RouteMapEntry`.
/// Directories and files the walk cannot read are skipped silently — this is
/// cosmetic, not a dispatch decision.
pub fn walk_route_map(root: &Path) -> Vec<RouteMapEntry> {
    let mut entries = Vec::new();
    walk_dir(root, root, &mut entries);
    entries.sort_by(|a, b| a.request_path.cmp(&b.request_path));
    entries
}

fn walk_dir(root: &Path, dir: &Path, out: &mut Vec<RouteMapEntry>) {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(_) => return,
    };

    for entry in read_dir.flatten() {
        let path = entry.path();
        let meta = match entry.metadata() {
            Ok(meta) => meta,
            Err(_) => continue,
        };

        if meta.is_dir() {
            walk_dir(root, &path, out);
            continue;
        }

        if is_executable(&path, &meta) {
            if let Ok(relative) = path.strip_prefix(root) {
                out.push(RouteMapEntry {
                    request_path: format!("/{}", relative.to_string_lossy().replace('\\', "/")),
                    executable_path: path,
                });
            }
        }
    }
}

/// Prints the startup banner: version, root, route map, and the URL to open.
pub fn print_banner(root: &Path, lan_address: IpAddr, port: u16, route_map: &[RouteMapEntry]) {
    println!("🚀 QuickServ v{}", env!("CARGO_PKG_VERSION"));
    println!("{DASH_LINE}");
    println!("📂 Serving: {}", root.display());
    println!(
        "🌐 http://{}:{port}",
        crate::network::display_host(lan_address)
    );

    if route_map.is_empty() {
        println!("🧩 No executable routes found; serving static files only.");
    } else {
        println!("🧩 Executable routes:");
        for entry in route_map {
            println!("   {} -> {}", entry.request_path, executable_display(&entry.executable_path));
        }
    }

    println!("{DASH_LINE}");
}

fn executable_display(path: &PathBuf) -> String {
    path.display().to_string()
}
