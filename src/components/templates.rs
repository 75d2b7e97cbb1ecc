use crate::types::PageContext;
use crate::utils::{escape_attr, escape_html};

/// Component assembling full HTML pages around rendered content
pub struct TemplateComponent;

impl TemplateComponent {
    /// Create a new template component
    pub fn new() -> Self {
        Self
    }

    /// Wrap a rendered document and its navigation into the page shell
    pub fn render_page(&self, context: &PageContext) -> String {
        format!(
            "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>{title}</title>\
<meta name=\"description\" content=\"{description}\">\
<link rel=\"canonical\" href=\"{canonical}\">\
<link rel=\"stylesheet\" href=\"/static/css/folio.css\"></head>\
<body><div class=\"layout\">\
<aside class=\"sidebar\">{navigation}</aside>\
<main class=\"content\"><article class=\"post\">\
<header class=\"post-header\"><h1 class=\"post-title\">{title}</h1>\
<p class=\"post-meta\"><time>{date}</time> · \
<a class=\"post-source\" href=\"{blob}\">{source}</a></p></header>\
{content}\
</article></main></div></body></html>",
            title = escape_html(&context.title),
            description = escape_attr(&context.description),
            canonical = escape_attr(&context.canonical_url),
            navigation = context.navigation_html,
            date = escape_html(&context.date),
            blob = escape_attr(&context.blob_url),
            source = escape_html(&context.source_path),
            content = context.content_html,
        )
    }

    /// Page shown when a snapshot holds no qualifying content
    pub fn render_empty_site(&self) -> String {
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>No posts yet</title>\
<link rel=\"stylesheet\" href=\"/static/css/folio.css\"></head>\
<body><main class=\"content empty-site\"><h1>No posts yet</h1>\
<p>This repository has no markdown documents outside its root directory.</p>\
</main></body></html>"
            .to_string()
    }

    /// Landing page describing how to address a repository
    pub fn render_landing(&self) -> String {
        "<!doctype html><html lang=\"en\"><head><meta charset=\"utf-8\">\
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
<title>folio</title>\
<link rel=\"stylesheet\" href=\"/static/css/folio.css\"></head>\
<body><main class=\"content landing\"><h1>folio</h1>\
<p>Render a repository as a site: <code>/&lt;owner&gt;/&lt;repo&gt;</code> \
or <code>/&lt;owner&gt;/&lt;repo&gt;/tree/&lt;branch&gt;</code>.</p>\
</main></body></html>"
            .to_string()
    }
}

impl Default for TemplateComponent {
    fn default() -> Self {
        Self::new()
    }
}
