use regex::Regex;
use std::sync::LazyLock;

/// Extension appended to every archive file name
pub const ARCHIVE_EXTENSION: &str = ".html";

// ASCII letters, digits and the Latin-1 range up to `å`, matched case-insensitively
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)[^a-å0-9]").expect("filename pattern should be valid"));

/// Convert a page title to a file name.
///
/// Each disallowed character becomes one space (runs are not collapsed), the
/// result is lowercased and `.html` is appended. A blank title gives just the
/// extension.
pub fn sanitize_filename(title: &str) -> String {
    if title.trim().is_empty() {
        return ARCHIVE_EXTENSION.to_string();
    }

    let name = DISALLOWED.replace_all(title, " ").to_lowercase();
    format!("{name}{ARCHIVE_EXTENSION}")
}

/// Escape text for use inside an HTML element
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
