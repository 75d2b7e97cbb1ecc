use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::components::TemplateComponent;

/// Custom error types for the site renderer
#[derive(Debug)]
pub enum SiteError {
    /// Non-2xx response from the content provider
    Upstream { status: u16, message: String },
    /// Transport-level failure talking to the content provider
    Http(reqwest::Error),
    /// Malformed provider payload
    Decode(serde_json::Error),
    /// Snapshot has no qualifying non-root markdown files
    NoContent,
    /// Requested document path climbs out of the repository
    InvalidPath,
}

impl From<reqwest::Error> for SiteError {
    fn from(err: reqwest::Error) -> Self {
        SiteError::Http(err)
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Decode(err)
    }
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        match self {
            SiteError::Upstream { status, message } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("Upstream error: {}", message),
            )
                .into_response(),
            SiteError::Http(e) => (
                StatusCode::BAD_GATEWAY,
                format!("Fetch error: {}", e),
            )
                .into_response(),
            SiteError::Decode(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Decode error: {}", e),
            )
                .into_response(),
            // An empty snapshot is a page of its own, not an error status
            SiteError::NoContent => {
                let templates = TemplateComponent::new();
                Html(templates.render_empty_site()).into_response()
            }
            SiteError::InvalidPath => (StatusCode::BAD_REQUEST, "Invalid path").into_response(),
        }
    }
}
