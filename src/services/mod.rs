pub mod content_service;
pub mod markdown_service;
pub mod metadata_service;
pub mod provider_service;

pub use content_service::ContentService;
pub use markdown_service::MarkdownService;
pub use metadata_service::MetadataService;
pub use provider_service::{ProviderService, document_set_from};
