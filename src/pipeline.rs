use log::{debug, info};

use crate::components::NavigationComponent;
use crate::errors::SiteError;
use crate::services::{ContentService, MarkdownService, MetadataService};
use crate::types::{DocumentSet, PageContext, RepoRef};

/// Orchestrator composing the content-to-site steps for one request:
/// select target document, extract metadata, strip the redundant title,
/// render the body, build navigation.
pub struct ContentPipeline {
    content: ContentService,
    metadata: MetadataService,
    markdown: MarkdownService,
    navigation: NavigationComponent,
}

impl ContentPipeline {
    /// Create a pipeline with the default services
    pub fn new() -> Self {
        Self {
            content: ContentService::new(),
            metadata: MetadataService::new(),
            markdown: MarkdownService::new(),
            navigation: NavigationComponent::new(),
        }
    }

    /// Create a pipeline with a specific metadata service (pinned clock)
    pub fn with_metadata(metadata: MetadataService) -> Self {
        Self {
            metadata,
            ..Self::new()
        }
    }

    /// Turn a snapshot into a page. `requested` selects a document when it
    /// names one that exists; otherwise the most recent document is shown
    /// (a missing path falls back silently, by design).
    pub fn assemble(
        &self,
        set: &DocumentSet,
        repo: &RepoRef,
        requested: Option<&str>,
    ) -> Result<PageContext, SiteError> {
        if set.is_empty() {
            return Err(SiteError::NoContent);
        }
        let paths = set.markdown_paths();

        let base_path = self.content.compute_base_path(paths);
        let ordered = self.content.sort_by_recency(paths);
        let default = self
            .content
            .default_path(&ordered)
            .ok_or(SiteError::NoContent)?;

        let selected = match requested {
            Some(path) if set.contains(path) => path,
            Some(path) => {
                debug!("Requested '{}' not in snapshot, using default", path);
                default
            }
            None => default,
        };
        let document = set.get(selected).ok_or(SiteError::NoContent)?;

        let meta = self.metadata.extract(&document.content, selected);
        let body = self.metadata.strip_leading_title(&document.content);
        let content_html = self.markdown.render(&body);

        let tree = self.navigation.build(paths, &base_path);
        let navigation_html = self
            .navigation
            .render(&tree, &repo.link_prefix(), selected);

        info!(
            "Assembled page for {}/{}@{}: '{}' ({})",
            repo.owner, repo.repo, repo.branch, meta.title, selected
        );

        Ok(PageContext {
            title: meta.title,
            description: meta.description,
            date: meta.date,
            content_html,
            navigation_html,
            source_path: selected.to_string(),
            blob_url: repo.blob_url(selected),
            canonical_url: repo.page_url(selected),
        })
    }
}

impl Default for ContentPipeline {
    fn default() -> Self {
        Self::new()
    }
}
