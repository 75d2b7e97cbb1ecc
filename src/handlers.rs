use axum::{
    extract::{Path as AxumPath, State},
    response::{Html, IntoResponse},
};
use log::info;

use crate::components::TemplateComponent;
use crate::errors::SiteError;
use crate::pipeline::ContentPipeline;
use crate::services::{ProviderService, document_set_from};
use crate::types::{AppState, RepoRef};
use crate::utils::normalize_path;

/// Handle root path requests with a short landing page
pub async fn handle_root() -> impl IntoResponse {
    let templates = TemplateComponent::new();
    Html(templates.render_landing())
}

/// Handle `/owner/repo` requests: the most recent document on the default branch
pub async fn handle_repo(
    State(state): State<AppState>,
    AxumPath((owner, repo)): AxumPath<(String, String)>,
) -> Result<impl IntoResponse, SiteError> {
    serve_document(&state, &owner, &repo, "").await
}

/// Handle `/owner/repo/*path` requests, including `/tree/<branch>/...` forms
pub async fn handle_repo_path(
    State(state): State<AppState>,
    AxumPath((owner, repo, rest)): AxumPath<(String, String, String)>,
) -> Result<impl IntoResponse, SiteError> {
    serve_document(&state, &owner, &repo, &rest).await
}

async fn serve_document(
    state: &AppState,
    owner: &str,
    repo: &str,
    rest: &str,
) -> Result<Html<String>, SiteError> {
    let (branch, requested) = parse_branch_path(rest, &state.config.default_branch);
    if let Some(path) = requested.as_deref() {
        if !is_valid_document_path(path) {
            return Err(SiteError::InvalidPath);
        }
    }
    info!(
        "Document request: {}/{}@{} path={:?}",
        owner, repo, branch, requested
    );

    let provider = ProviderService::new(state.http.clone(), state.config.provider_url.clone());
    let snapshot = provider.fetch_snapshot(owner, repo, &branch).await?;
    let set = document_set_from(snapshot)?;

    let repo_ref = RepoRef::new(owner, repo, branch);
    let pipeline = ContentPipeline::new();
    let page = pipeline.assemble(&set, &repo_ref, requested.as_deref())?;

    let templates = TemplateComponent::new();
    Ok(Html(templates.render_page(&page)))
}

/// Reject document paths that climb out of the repository
pub fn is_valid_document_path(path: &str) -> bool {
    !path.split('/').any(|segment| segment == "..")
}

/// Split the wildcard remainder into (branch, document path). A leading
/// `tree/<branch>/` segment selects the branch, GitHub style; otherwise the
/// default branch applies and the whole remainder is the document path.
pub fn parse_branch_path(rest: &str, default_branch: &str) -> (String, Option<String>) {
    let normalized = normalize_path(rest);
    if let Some(after_tree) = normalized.strip_prefix("tree/") {
        let (branch, path) = match after_tree.split_once('/') {
            Some((branch, path)) => (branch.to_string(), path.to_string()),
            None => (after_tree.to_string(), String::new()),
        };
        let branch = if branch.is_empty() {
            default_branch.to_string()
        } else {
            branch
        };
        (branch, (!path.is_empty()).then_some(path))
    } else {
        (
            default_branch.to_string(),
            (!normalized.is_empty()).then_some(normalized),
        )
    }
}
