pub mod navigation;
pub mod templates;

pub use navigation::{NavigationComponent, NavigationLeaf, NavigationNode};
pub use templates::TemplateComponent;
