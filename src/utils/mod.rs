use std::sync::LazyLock;

use regex::Regex;

/// Date-shaped substring: full dates first so they win at equal positions,
/// year-month as the shorter alternative. Matching is leftmost-first.
pub static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}[-/]\d{2}[-/]\d{2}|\d{4}[-/]\d{2}").unwrap());

/// Escape HTML special characters
pub fn escape_html(text: &str) -> String {
    text.replace("&", "&amp;")
        .replace("<", "&lt;")
        .replace(">", "&gt;")
        .replace("\"", "&quot;")
        .replace("'", "&#39;")
}

/// Escape HTML attribute values
pub fn escape_attr(text: &str) -> String {
    escape_html(text)
}

/// Normalize request path by trimming surrounding slashes
pub fn normalize_path(path: &str) -> String {
    path.trim_matches('/').to_string()
}

/// Leftmost date-shaped substring of `text`, if any
pub fn find_date(text: &str) -> Option<&str> {
    DATE_PATTERN.find(text).map(|m| m.as_str())
}

/// Strip the display extension from a file name
pub fn strip_markdown_extension(name: &str) -> &str {
    name.strip_suffix(".mdx")
        .or_else(|| name.strip_suffix(".md"))
        .unwrap_or(name)
}
