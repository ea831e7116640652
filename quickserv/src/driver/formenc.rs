//! Form parsing, argv translation, and the double-escape stdin re-encoding used by
//! the CGI-imitation driver (component D, spec.md §4.D).

use percent_encoding::percent_decode_str;
use url::form_urlencoded;

/// True when a request qualifies as a form submission: every `GET`, or any other
/// method whose `Content-Type` is exactly `application/x-www-form-urlencoded`
/// (parameters like `;charset=...` are ignored).
pub fn is_form_submission(method: &str, content_type: Option<&str>) -> bool {
    if method.eq_ignore_ascii_case("GET") {
        return true;
    }
    content_type
        .map(|ct| {
            ct.split(';')
                .next()
                .unwrap_or("")
                .trim()
                .eq_ignore_ascii_case("application/x-www-form-urlencoded")
        })
        .unwrap_or(false)
}

/// Parses `application/x-www-form-urlencoded` bytes into ordered `(name, value)`
/// pairs, preserving repeats.
pub fn parse_form(bytes: &[u8]) -> Vec<(String, String)> {
    form_urlencoded::parse(bytes)
        .into_owned()
        .collect::<Vec<_>>()
}

/// Translates parsed form pairs into a CGI argument vector per spec.md §4.D:
/// - empty name: the value becomes a positional argument;
/// - non-empty name, empty value: the name is appended literally;
/// - single-character name: `-name value`;
/// - longer name: `--name value`.
pub fn form_to_argv(pairs: &[(String, String)]) -> Vec<String> {
    let mut argv = Vec::with_capacity(pairs.len() * 2);

    for (name, value) in pairs {
        if name.is_empty() {
            argv.push(value.clone());
        } else if value.is_empty() {
            argv.push(name.clone());
        } else if name.chars().count() == 1 {
            argv.push(format!("-{name}"));
            argv.push(value.clone());
        } else {
            argv.push(format!("--{name}"));
            argv.push(value.clone());
        }
    }

    argv
}

/// Re-encodes parsed form pairs for delivery on the child's stdin via the
/// double-escape round trip: `%`→`%25`, then `&`→`%26`, then `=`→`%3D` inside every
/// name and value, URL-encode the resulting form, then URL-decode the whole string
/// exactly once. This preserves literal `%`, `&`, `=` bytes inside field data while
/// keeping the structural `&`/`=` separators intact — see spec.md §9 for why the
/// escape ordering matters (inverting it breaks literal `&`/`=`).
pub fn reencode_form_for_stdin(pairs: &[(String, String)]) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in pairs {
        serializer.append_pair(&double_escape(name), &double_escape(value));
    }
    let wire = serializer.finish();

    percent_decode_str(&wire).decode_utf8_lossy().into_owned()
}

fn double_escape(s: &str) -> String {
    s.replace('%', "%25").replace('&', "%26").replace('=', "%3D")
}
