use log::debug;

use crate::utils::{escape_attr, escape_html, strip_markdown_extension};

/// A directory in the navigation tree. Child directories and file leaves
/// are owned and kept in first-insertion order; directories render before
/// files at every level.
#[derive(Debug, Default)]
pub struct NavigationNode {
    pub dirs: Vec<(String, NavigationNode)>,
    pub files: Vec<NavigationLeaf>,
}

/// A document leaf: display name plus the full path it links to
#[derive(Debug, Clone)]
pub struct NavigationLeaf {
    pub name: String,
    pub path: String,
}

impl NavigationNode {
    /// Insert one document by its path segments relative to the base path.
    /// Intermediate directories are created on demand.
    pub fn insert(&mut self, segments: &[&str], full_path: &str) {
        match segments {
            [] => {}
            [file] => self.files.push(NavigationLeaf {
                name: strip_markdown_extension(file).to_string(),
                path: full_path.to_string(),
            }),
            [dir, rest @ ..] => {
                let idx = match self.dirs.iter().position(|(name, _)| name == dir) {
                    Some(idx) => idx,
                    None => {
                        self.dirs.push(((*dir).to_string(), NavigationNode::default()));
                        self.dirs.len() - 1
                    }
                };
                self.dirs[idx].1.insert(rest, full_path);
            }
        }
    }

    /// Whether any leaf below this node is the currently viewed document
    pub fn contains_active(&self, current_path: &str) -> bool {
        self.files.iter().any(|leaf| leaf.path == current_path)
            || self.dirs.iter().any(|(_, node)| node.contains_active(current_path))
    }
}

/// Component building and rendering the sidebar navigation
pub struct NavigationComponent;

impl NavigationComponent {
    /// Create a new navigation component
    pub fn new() -> Self {
        Self
    }

    /// Build the navigation tree from flat document paths.
    ///
    /// Paths outside `base_path` are skipped; the remainder of each path is
    /// split into segments and inserted into an owned root node.
    pub fn build(&self, paths: &[String], base_path: &str) -> NavigationNode {
        let mut root = NavigationNode::default();
        for path in paths {
            let relative = if base_path.is_empty() {
                path.as_str()
            } else {
                match path
                    .strip_prefix(base_path)
                    .and_then(|rest| rest.strip_prefix('/'))
                {
                    Some(rest) => rest,
                    None => continue,
                }
            };
            let segments: Vec<&str> = relative.split('/').collect();
            root.insert(&segments, path);
        }
        debug!(
            "Navigation tree built: {} top-level dirs, {} top-level files",
            root.dirs.len(),
            root.files.len()
        );
        root
    }

    /// Render the tree as sidebar HTML. The leaf whose path equals
    /// `current_path` exactly is marked active; directories containing it
    /// render expanded.
    pub fn render(&self, root: &NavigationNode, link_prefix: &str, current_path: &str) -> String {
        let mut html = String::new();
        html.push_str("<nav class=\"sidebar-nav\">");
        html.push_str("<div class=\"sidebar-title\">Posts</div>");
        self.render_node(root, link_prefix, current_path, &mut html);
        html.push_str("</nav>");
        html
    }

    fn render_node(
        &self,
        node: &NavigationNode,
        link_prefix: &str,
        current_path: &str,
        html: &mut String,
    ) {
        html.push_str("<ul class=\"nav-list\">");
        for (name, child) in &node.dirs {
            html.push_str("<li class=\"nav-item dir\">");
            if child.contains_active(current_path) {
                html.push_str("<details open>");
            } else {
                html.push_str("<details>");
            }
            html.push_str(&format!("<summary>{}/</summary>", escape_html(name)));
            self.render_node(child, link_prefix, current_path, html);
            html.push_str("</details>");
            html.push_str("</li>");
        }
        for leaf in &node.files {
            let href = format!("{}/{}", link_prefix, leaf.path);
            html.push_str("<li class=\"nav-item file\">");
            if leaf.path == current_path {
                html.push_str(&format!(
                    "<a class=\"active\" href=\"{}\">{}</a>",
                    escape_attr(&href),
                    escape_html(&leaf.name)
                ));
            } else {
                html.push_str(&format!(
                    "<a href=\"{}\">{}</a>",
                    escape_attr(&href),
                    escape_html(&leaf.name)
                ));
            }
            html.push_str("</li>");
        }
        html.push_str("</ul>");
    }
}

impl Default for NavigationComponent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn paths(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builds_dirs_before_files() {
        let component = NavigationComponent::new();
        let root = component.build(
            &paths(&["blog/a/x.md", "blog/a/y.md", "blog/b.md"]),
            "blog",
        );
        assert_eq!(root.dirs.len(), 1);
        assert_eq!(root.dirs[0].0, "a");
        assert_eq!(root.dirs[0].1.files.len(), 2);
        assert_eq!(root.dirs[0].1.files[0].name, "x");
        assert_eq!(root.dirs[0].1.files[1].name, "y");
        assert_eq!(root.files.len(), 1);
        assert_eq!(root.files[0].name, "b");

        let html = component.render(&root, "/o/r", "");
        let dir_pos = html.find("<summary>a/</summary>").unwrap();
        let file_pos = html.find(">b</a>").unwrap();
        assert!(dir_pos < file_pos);
    }

    #[test]
    fn siblings_keep_insertion_order() {
        let component = NavigationComponent::new();
        let root = component.build(
            &paths(&["blog/zeta.md", "blog/alpha.md", "blog/mid/inner.md"]),
            "blog",
        );
        assert_eq!(root.files[0].name, "zeta");
        assert_eq!(root.files[1].name, "alpha");
        assert_eq!(root.dirs[0].0, "mid");
    }

    #[test]
    fn paths_outside_base_are_skipped() {
        let component = NavigationComponent::new();
        let root = component.build(&paths(&["blog/a.md", "docs/b.md"]), "blog");
        assert_eq!(root.files.len(), 1);
        assert_eq!(root.files[0].path, "blog/a.md");
    }

    #[test]
    fn empty_base_uses_full_paths() {
        let component = NavigationComponent::new();
        let root = component.build(&paths(&["blog/a.md", "docs/b.md"]), "");
        assert_eq!(root.dirs.len(), 2);
        assert_eq!(root.dirs[0].0, "blog");
        assert_eq!(root.dirs[1].0, "docs");
    }

    #[test]
    fn active_leaf_is_exact_match_even_with_name_collisions() {
        let component = NavigationComponent::new();
        let root = component.build(
            &paths(&["blog/a/post.md", "blog/b/post.md"]),
            "blog",
        );
        let html = component.render(&root, "/o/r", "blog/b/post.md");
        assert_eq!(html.matches("class=\"active\"").count(), 1);
        assert!(html.contains("<a class=\"active\" href=\"/o/r/blog/b/post.md\">post</a>"));
    }

    #[test]
    fn directory_with_active_leaf_renders_open() {
        let component = NavigationComponent::new();
        let root = component.build(
            &paths(&["blog/a/x.md", "blog/b/y.md"]),
            "blog",
        );
        let html = component.render(&root, "/o/r", "blog/a/x.md");
        assert_eq!(html.matches("<details open>").count(), 1);
    }
}
