use std::sync::Arc;

use serde::Deserialize;

use crate::config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

/// Identity of the repository snapshot a request is served from
#[derive(Debug, Clone)]
pub struct RepoRef {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

impl RepoRef {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: branch.into(),
        }
    }

    /// Prefix for document links: `/owner/repo` on the default branch,
    /// `/owner/repo/tree/branch` otherwise.
    pub fn link_prefix(&self) -> String {
        if self.branch == "main" {
            format!("/{}/{}", self.owner, self.repo)
        } else {
            format!("/{}/{}/tree/{}", self.owner, self.repo, self.branch)
        }
    }

    /// Canonical URL of a document page on this site
    pub fn page_url(&self, path: &str) -> String {
        format!("{}/{}", self.link_prefix(), path)
    }

    /// GitHub blob URL of the document source
    pub fn blob_url(&self, path: &str) -> String {
        format!(
            "https://github.com/{}/{}/blob/{}/{}",
            self.owner, self.repo, self.branch, path
        )
    }
}

/// One source file fetched from the content provider
#[derive(Debug, Clone)]
pub struct Document {
    pub content: String,
    pub size: u64,
}

/// Provider response for one (owner, repo, branch) snapshot.
///
/// The `files` map keeps the provider's key order (`serde_json` with
/// `preserve_order`), which downstream components rely on for stable
/// navigation sibling order.
#[derive(Debug, Deserialize)]
pub struct SnapshotResponse {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub tree: Vec<TreeEntry>,
    #[serde(default)]
    pub files: serde_json::Map<String, serde_json::Value>,
}

/// One entry of the provider's tree listing
#[derive(Debug, Deserialize)]
pub struct TreeEntry {
    pub path: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

/// File payload inside the provider's `files` map
#[derive(Debug, Deserialize)]
pub struct FileEntry {
    pub content: String,
    #[serde(default)]
    pub size: u64,
}

/// Ordered path -> Document mapping for one snapshot, plus the derived
/// subset of non-root markdown paths that all content processing runs on.
#[derive(Debug, Default)]
pub struct DocumentSet {
    documents: Vec<(String, Document)>,
    markdown_paths: Vec<String>,
}

impl DocumentSet {
    pub fn new(documents: Vec<(String, Document)>) -> Self {
        let markdown_paths = documents
            .iter()
            .filter(|(path, _)| is_markdown_path(path) && path.contains('/'))
            .map(|(path, _)| path.clone())
            .collect();
        Self {
            documents,
            markdown_paths,
        }
    }

    /// Non-root markdown paths, in provider order
    pub fn markdown_paths(&self) -> &[String] {
        &self.markdown_paths
    }

    pub fn get(&self, path: &str) -> Option<&Document> {
        self.documents
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, doc)| doc)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.markdown_paths.iter().any(|p| p == path)
    }

    pub fn is_empty(&self) -> bool {
        self.markdown_paths.is_empty()
    }
}

/// Check for a markdown-family extension
pub fn is_markdown_path(path: &str) -> bool {
    path.ends_with(".md") || path.ends_with(".mdx")
}

/// Metadata derived from a document's text and path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedMetadata {
    pub title: String,
    pub description: String,
    pub date: String,
}

/// Everything the page shell needs to assemble a full document page
#[derive(Debug, Clone)]
pub struct PageContext {
    pub title: String,
    pub description: String,
    pub date: String,
    pub content_html: String,
    pub navigation_html: String,
    pub source_path: String,
    pub blob_url: String,
    pub canonical_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(content: &str) -> Document {
        Document {
            content: content.to_string(),
            size: content.len() as u64,
        }
    }

    #[test]
    fn document_set_filters_root_and_non_markdown() {
        let set = DocumentSet::new(vec![
            ("README.md".to_string(), doc("root readme")),
            ("blog/2024-01-01-a.md".to_string(), doc("# A")),
            ("blog/img/logo.png".to_string(), doc("")),
            ("blog/notes.mdx".to_string(), doc("# Notes")),
        ]);
        assert_eq!(
            set.markdown_paths(),
            &["blog/2024-01-01-a.md".to_string(), "blog/notes.mdx".to_string()]
        );
        assert!(!set.contains("README.md"));
        assert!(set.get("README.md").is_some());
    }

    #[test]
    fn repo_ref_urls() {
        let main = RepoRef::new("alice", "blog", "main");
        assert_eq!(main.page_url("posts/a.md"), "/alice/blog/posts/a.md");
        assert_eq!(
            main.blob_url("posts/a.md"),
            "https://github.com/alice/blog/blob/main/posts/a.md"
        );

        let dev = RepoRef::new("alice", "blog", "dev");
        assert_eq!(dev.page_url("posts/a.md"), "/alice/blog/tree/dev/posts/a.md");
    }
}
