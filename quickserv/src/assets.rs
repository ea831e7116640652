//! Embedded default assets (component H).
//!
//! Read-only, compiled into the binary, keyed by request path relative to the
//! serving root. A disk file at the same path always shadows the embedded copy —
//! the resolver only consults this module after an `fs::metadata` lookup fails.

use rust_embed::RustEmbed;

#[derive(RustEmbed)]
#[folder = "default_assets"]
struct DefaultAssets;

/// Returns true if `request_path` (e.g. `/favicon.ico`) names an embedded asset.
pub fn contains(request_path: &str) -> bool {
    DefaultAssets::get(key_for(request_path)).is_some()
}

/// Returns the bytes and guessed MIME type for `request_path`, if embedded.
pub fn get(request_path: &str) -> Option<(Vec<u8>, String)> {
    let file = DefaultAssets::get(key_for(request_path))?;
    let mime = mime_guess::from_path(request_path)
        .first_or_octet_stream()
        .to_string();
    Some((file.data.into_owned(), mime))
}

fn key_for(request_path: &str) -> &str {
    request_path.trim_start_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favicon_is_embedded() {
        assert!(contains("/favicon.ico"));
        let (bytes, mime) = get("/favicon.ico").expect("favicon should be embedded");
        assert!(!bytes.is_empty());
        assert!(mime.contains("image") || mime == "application/octet-stream");
    }

    #[test]
    fn unknown_path_is_absent() {
        assert!(!contains("/nonexistent-asset.bin"));
        assert!(get("/nonexistent-asset.bin").is_none());
    }
}
