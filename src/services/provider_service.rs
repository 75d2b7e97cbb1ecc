use log::{debug, info, warn};

use crate::errors::SiteError;
use crate::types::{Document, DocumentSet, FileEntry, SnapshotResponse};

/// Service fetching repository snapshots from the content provider
#[derive(Clone)]
pub struct ProviderService {
    http: reqwest::Client,
    base_url: String,
}

impl ProviderService {
    /// Create a new provider service
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch one (owner, repo, branch) snapshot, markdown files only
    pub async fn fetch_snapshot(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<SnapshotResponse, SiteError> {
        let url = format!(
            "{}/{}/{}/{}?ext=md,mdx",
            self.base_url.trim_end_matches('/'),
            owner,
            repo,
            branch
        );
        debug!("Fetching snapshot: {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!("Provider returned {} for {}", status, url);
            return Err(SiteError::Upstream {
                status: status.as_u16(),
                message: status
                    .canonical_reason()
                    .unwrap_or("upstream request failed")
                    .to_string(),
            });
        }

        let snapshot = response.json::<SnapshotResponse>().await?;
        info!(
            "Fetched snapshot {}/{}@{}: {} files",
            snapshot.owner,
            snapshot.repo,
            snapshot.branch,
            snapshot.files.len()
        );
        Ok(snapshot)
    }
}

/// Decode the snapshot's files map into a DocumentSet, preserving the
/// provider's path order
pub fn document_set_from(snapshot: SnapshotResponse) -> Result<DocumentSet, SiteError> {
    let mut documents = Vec::with_capacity(snapshot.files.len());
    for (path, value) in snapshot.files {
        let entry: FileEntry = serde_json::from_value(value)?;
        documents.push((
            path,
            Document {
                content: entry.content,
                size: entry.size,
            },
        ));
    }
    Ok(DocumentSet::new(documents))
}
