//! Environment overlay construction (spec.md §4.D "Child construction").

/// Builds the `REQUEST_METHOD` plus one `HTTP_<NAME>` entry per request header,
/// in order, hyphens replaced with underscores. Repeated headers produce repeated
/// `HTTP_<NAME>` entries rather than a single comma-joined value — whichever the
/// child reads last wins, matching how `std::process::Command::env` folds repeats.
///
/// Header names arrive already lowercased (the HTTP stack normalizes them); this
/// does not re-case them, it only substitutes hyphens.
pub fn build_overlay(method: &str, headers: &[(String, String)]) -> Vec<(String, String)> {
    let mut overlay = Vec::with_capacity(headers.len() + 1);
    overlay.push(("REQUEST_METHOD".to_string(), method.to_string()));

    for (name, value) in headers {
        overlay.push((header_env_key(name), value.clone()));
    }

    overlay
}

fn header_env_key(header_name: &str) -> String {
    format!("HTTP_{}", header_name.replace('-', "_"))
}
