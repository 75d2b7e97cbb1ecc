//! Folio - render a repository's markdown tree as a website
//!
//! One document view per request: a snapshot of markdown files is fetched
//! from a content provider, the content root is inferred, one document is
//! selected (requested or most recent), and the page is assembled from the
//! rendered body plus a navigation tree derived from the file paths.

pub mod components;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod logger;
pub mod pipeline;
pub mod services;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use components::{NavigationComponent, NavigationNode, TemplateComponent};
pub use config::Config;
pub use errors::SiteError;
pub use pipeline::ContentPipeline;
pub use services::{ContentService, MarkdownService, MetadataService, ProviderService};
pub use types::{Document, DocumentSet, ExtractedMetadata, PageContext, RepoRef};
