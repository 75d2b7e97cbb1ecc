use std::sync::LazyLock;

use regex::Regex;

static H3_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").unwrap());
static H2_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").unwrap());
static H1_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").unwrap());
static STRONG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static EM_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").unwrap());
static CODE_BLOCK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)```(.*?)```").unwrap());
static INLINE_CODE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BULLET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:<p>)?\* (.*?)(?:</p>)?$").unwrap());
static NUMBERED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(?:<p>)?\d+\. (.*?)(?:</p>)?$").unwrap());

/// Line prefixes the paragraph pass treats as already block-level
const BLOCK_PREFIXES: [&str; 7] = ["<h", "<ul", "<ol", "<li", "<blockquote", "<pre", "<img"];

/// Service converting markdown into markup through an ordered pipeline of
/// text substitutions. Each pass rewrites the whole text; later passes see
/// (and tolerate) the markup injected by earlier ones, so the pass order is
/// part of the contract. Pure and deterministic.
pub struct MarkdownService;

impl MarkdownService {
    /// Create a new markdown service
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline
    pub fn render(&self, markdown: &str) -> String {
        let mut html = markdown.to_string();
        html = self.convert_headings(&html);
        html = self.wrap_paragraphs(&html);
        html = self.convert_emphasis(&html);
        html = self.convert_links(&html);
        html = self.convert_code_blocks(&html);
        html = self.convert_inline_code(&html);
        html = self.convert_bullet_lists(&html);
        html = self.convert_numbered_lists(&html);
        html
    }

    /// Pass 1: headings, longest prefix first so `###` is never read as `#`
    pub fn convert_headings(&self, text: &str) -> String {
        let text = H3_PATTERN.replace_all(text, "<h3>$1</h3>");
        let text = H2_PATTERN.replace_all(&text, "<h2>$1</h2>");
        H1_PATTERN.replace_all(&text, "<h1>$1</h1>").into_owned()
    }

    /// Pass 2: wrap every non-blank line that is not already block-level.
    ///
    /// Runs before list and code-block conversion, so list-marker lines and
    /// code fences get wrapped here too; the later passes match through the
    /// wrapper (lists) or leave the fragments inside the block (fences).
    pub fn wrap_paragraphs(&self, text: &str) -> String {
        text.lines()
            .map(|line| {
                if line.trim().is_empty()
                    || BLOCK_PREFIXES.iter().any(|prefix| line.starts_with(prefix))
                {
                    line.to_string()
                } else {
                    format!("<p>{}</p>", line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Pass 3a: strong before em so `**` is not consumed as two `*`
    pub fn convert_emphasis(&self, text: &str) -> String {
        let text = STRONG_PATTERN.replace_all(text, "<strong>$1</strong>");
        EM_PATTERN.replace_all(&text, "<em>$1</em>").into_owned()
    }

    /// Pass 3b: markdown links
    pub fn convert_links(&self, text: &str) -> String {
        LINK_PATTERN
            .replace_all(text, "<a class=\"post-link\" href=\"$2\">$1</a>")
            .into_owned()
    }

    /// Pass 4: fenced code blocks, non-greedy across lines
    pub fn convert_code_blocks(&self, text: &str) -> String {
        CODE_BLOCK_PATTERN
            .replace_all(text, "<pre class=\"code-block\"><code>$1</code></pre>")
            .into_owned()
    }

    /// Pass 5: inline code spans
    pub fn convert_inline_code(&self, text: &str) -> String {
        INLINE_CODE_PATTERN
            .replace_all(text, "<code class=\"inline-code\">$1</code>")
            .into_owned()
    }

    /// Pass 6: bullet items, then merge consecutive item lines into one
    /// `<ul>` line so the numbered pass cannot re-wrap them
    pub fn convert_bullet_lists(&self, text: &str) -> String {
        let text = BULLET_PATTERN.replace_all(text, "<li>$1</li>");
        wrap_item_runs(&text, "<ul>", "</ul>")
    }

    /// Pass 7: numbered items, merged into `<ol>` lines
    pub fn convert_numbered_lists(&self, text: &str) -> String {
        let text = NUMBERED_PATTERN.replace_all(text, "<li>$1</li>");
        wrap_item_runs(&text, "<ol>", "</ol>")
    }
}

impl Default for MarkdownService {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge each run of consecutive `<li>` lines into a single wrapped line
fn wrap_item_runs(text: &str, open: &str, close: &str) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    for line in text.lines() {
        if line.starts_with("<li>") && line.ends_with("</li>") {
            run.push(line);
        } else {
            if !run.is_empty() {
                out.push(format!("{}{}{}", open, run.join(""), close));
                run.clear();
            }
            out.push(line.to_string());
        }
    }
    if !run.is_empty() {
        out.push(format!("{}{}{}", open, run.join(""), close));
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn headings_convert_longest_prefix_first() {
        let service = MarkdownService::new();
        let out = service.convert_headings("# One\n## Two\n### Three");
        assert_eq!(out, "<h1>One</h1>\n<h2>Two</h2>\n<h3>Three</h3>");
    }

    #[test]
    fn paragraphs_skip_block_lines_and_blanks() {
        let service = MarkdownService::new();
        let out = service.wrap_paragraphs("<h1>T</h1>\n\nplain text");
        assert_eq!(out, "<h1>T</h1>\n\n<p>plain text</p>");
    }

    #[test]
    fn emphasis_wraps_strong_and_em() {
        let service = MarkdownService::new();
        let out = service.render("**bold** and *italic*");
        assert!(out.contains("<strong>bold</strong>"));
        assert!(out.contains("<em>italic</em>"));
    }

    #[test]
    fn links_get_presentational_class() {
        let service = MarkdownService::new();
        let out = service.convert_links("see [docs](https://example.com)");
        assert_eq!(
            out,
            "see <a class=\"post-link\" href=\"https://example.com\">docs</a>"
        );
    }

    #[test]
    fn fence_yields_one_code_block_containing_code() {
        let service = MarkdownService::new();
        let out = service.render("```\ncode\n```");
        assert_eq!(out.matches("<pre class=\"code-block\"><code>").count(), 1);
        assert_eq!(out.matches("</code></pre>").count(), 1);
        let start = out.find("<code>").unwrap() + "<code>".len();
        let end = out.find("</code>").unwrap();
        assert!(out[start..end].contains("code"));
    }

    #[test]
    fn inline_code_span() {
        let service = MarkdownService::new();
        let out = service.render("use `cargo` here");
        assert!(out.contains("<code class=\"inline-code\">cargo</code>"));
    }

    #[test]
    fn consecutive_bullets_wrap_in_one_ul() {
        let service = MarkdownService::new();
        let out = service.render("* one\n* two");
        assert_eq!(out, "<ul><li>one</li><li>two</li></ul>");
    }

    #[test]
    fn consecutive_numbers_wrap_in_one_ol() {
        let service = MarkdownService::new();
        let out = service.render("1. one\n2. two");
        assert_eq!(out, "<ol><li>one</li><li>two</li></ol>");
    }

    #[test]
    fn bullet_run_is_not_rewrapped_as_ordered() {
        let service = MarkdownService::new();
        let out = service.render("* one\n* two\n\n1. first\n2. second");
        assert_eq!(
            out,
            "<ul><li>one</li><li>two</li></ul>\n\n<ol><li>first</li><li>second</li></ol>"
        );
    }

    #[test]
    fn separated_lists_stay_separate() {
        let service = MarkdownService::new();
        let out = service.render("* one\n\n* two");
        assert_eq!(out, "<ul><li>one</li></ul>\n\n<ul><li>two</li></ul>");
    }

    #[test]
    fn render_is_deterministic() {
        let service = MarkdownService::new();
        let input = "# T\n\ntext **b** `c`\n\n* a\n* b\n\n```\nx\n```\n";
        assert_eq!(service.render(input), service.render(input));
    }
}
