use std::sync::LazyLock;

use regex::Regex;
use time::{Date, OffsetDateTime, macros::format_description};

use crate::types::ExtractedMetadata;
use crate::utils::{find_date, strip_markdown_extension};

static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static HEADING_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#{1,6} ").unwrap());

/// Service deriving title, description and date from a document.
///
/// Undated paths fall back to the current date, which is the one
/// non-deterministic input; `with_today` pins it for tests.
pub struct MetadataService {
    today: Option<Date>,
}

impl MetadataService {
    /// Create a new metadata service using the system clock
    pub fn new() -> Self {
        Self { today: None }
    }

    /// Create a metadata service with a fixed "today"
    pub fn with_today(today: Date) -> Self {
        Self { today: Some(today) }
    }

    /// Derive metadata from a document's raw text and its path
    pub fn extract(&self, content: &str, path: &str) -> ExtractedMetadata {
        let title = TITLE_PATTERN
            .captures(content)
            .map(|caps| caps[1].trim().to_string())
            .unwrap_or_else(|| {
                let name = path.rsplit('/').next().unwrap_or(path);
                strip_markdown_extension(name).to_string()
            });

        let description = self.extract_description(content);

        let date = find_date(path)
            .map(|token| token.replace('/', "-"))
            .unwrap_or_else(|| self.today_string());

        ExtractedMetadata {
            title,
            description,
            date,
        }
    }

    /// Remove the first level-1 heading line and any blank lines that
    /// immediately follow it. Later level-1 headings are left alone; the
    /// page shell displays the title separately.
    pub fn strip_leading_title(&self, content: &str) -> String {
        let Some(m) = TITLE_PATTERN.find(content) else {
            return content.to_string();
        };

        let mut out = String::with_capacity(content.len());
        out.push_str(&content[..m.start()]);

        let mut rest = &content[m.end()..];
        if let Some(after) = rest.strip_prefix('\n') {
            rest = after;
        }
        loop {
            match rest.find('\n') {
                Some(idx) if rest[..idx].trim().is_empty() => rest = &rest[idx + 1..],
                None if rest.trim().is_empty() => {
                    rest = "";
                    break;
                }
                _ => break,
            }
        }
        out.push_str(rest);
        out
    }

    /// First suitable paragraph: preferably from the block between the first
    /// level-1 heading and the next heading, otherwise from anywhere.
    fn extract_description(&self, content: &str) -> String {
        if let Some(m) = TITLE_PATTERN.find(content) {
            let after_title = &content[m.end()..];
            let block = match HEADING_PATTERN.find(after_title) {
                Some(next) => &after_title[..next.start()],
                None => after_title,
            };
            if let Some(paragraph) = first_paragraph(block) {
                return paragraph;
            }
        }
        first_paragraph(content).unwrap_or_default()
    }

    fn today_string(&self) -> String {
        let today = self
            .today
            .unwrap_or_else(|| OffsetDateTime::now_utc().date());
        today
            .format(format_description!("[year]-[month]-[day]"))
            .unwrap_or_default()
    }
}

impl Default for MetadataService {
    fn default() -> Self {
        Self::new()
    }
}

/// First blank-line-terminated run that is non-empty and not a heading,
/// with emphasis markers stripped
fn first_paragraph(text: &str) -> Option<String> {
    for paragraph in text.split("\n\n") {
        let trimmed = paragraph.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let joined = trimmed
            .lines()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(" ");
        return Some(joined.replace("**", "").replace('*', ""));
    }
    None
}
