// File: src/manifest.rs
// Purpose: Binds source paths to typed exports and builds the node tree

use crate::config::RoutingConfig;
use crate::error::CompileError;
use crate::node::{Export, Node, NodeKind};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;
use walkdir::WalkDir;

/// In-memory node produced by a [`Manifest`] or assembled by hand
pub struct ManifestNode<V> {
    name: String,
    kind: NodeKind,
    export: Option<Export<V>>,
    children: Vec<ManifestNode<V>>,
}

impl<V> ManifestNode<V> {
    /// Unnamed container used as the tree root
    pub fn root() -> Self {
        Self::folder("")
    }

    /// Empty container
    pub fn folder(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Container,
            export: None,
            children: Vec::new(),
        }
    }

    /// Leaf with an export
    pub fn leaf(name: impl Into<String>, export: Export<V>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Leaf,
            export: Some(export),
            children: Vec::new(),
        }
    }

    /// Leaf whose source was found but nothing was registered for it
    pub fn unbound(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: NodeKind::Leaf,
            export: None,
            children: Vec::new(),
        }
    }

    /// Leaf exporting a page component
    pub fn page<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        Self::leaf(name, Export::component(f))
    }

    /// Leaf exporting a layout
    pub fn layout<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        Self::leaf(name, Export::layout(f))
    }

    /// Appends a child (builder)
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_router::manifest::ManifestNode;
    /// use arbor_router::node::Node;
    ///
    /// let root: ManifestNode<String> = ManifestNode::root()
    ///     .with_child(ManifestNode::page("page", || "home".to_string()))
    ///     .with_child(ManifestNode::folder("users")
    ///         .with_child(ManifestNode::page("[id]", || "user".to_string())));
    ///
    /// assert_eq!(root.children().len(), 2);
    /// ```
    pub fn with_child(mut self, child: ManifestNode<V>) -> Self {
        self.children.push(child);
        self
    }

    /// Inserts a leaf at a `/`-separated relative path, creating folders on the way
    ///
    /// A leaf with the same name at the same level is replaced.
    fn insert_leaf(&mut self, segments: &[&str], export: Option<Export<V>>) {
        match segments {
            [] => {}
            [name] => {
                self.children
                    .retain(|c| !(c.kind == NodeKind::Leaf && c.name == *name));
                self.children.push(ManifestNode {
                    name: (*name).to_string(),
                    kind: NodeKind::Leaf,
                    export,
                    children: Vec::new(),
                });
            }
            [folder, rest @ ..] => self.folder_mut(folder).insert_leaf(rest, export),
        }
    }

    /// Ensures a chain of folders exists
    fn insert_folder(&mut self, segments: &[&str]) {
        if let [folder, rest @ ..] = segments {
            self.folder_mut(folder).insert_folder(rest);
        }
    }

    fn folder_mut(&mut self, name: &str) -> &mut ManifestNode<V> {
        let idx = match self
            .children
            .iter()
            .position(|c| c.kind == NodeKind::Container && c.name == name)
        {
            Some(idx) => idx,
            None => {
                self.children.push(ManifestNode::folder(name));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }
}

impl<V> Node<V> for ManifestNode<V> {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> NodeKind {
        self.kind
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn load(&self) -> Option<Export<V>> {
        self.export.clone()
    }
}

/// Registry of typed exports keyed by source path
///
/// Keys are `/`-separated paths relative to the pages root, without file
/// extension: `page`, `about`, `users/[id]`, `dashboard/layout`.
pub struct Manifest<V> {
    exports: BTreeMap<String, Export<V>>,
    layout_marker: String,
}

impl<V> Default for Manifest<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Manifest<V> {
    pub fn new() -> Self {
        Self {
            exports: BTreeMap::new(),
            layout_marker: "layout".to_string(),
        }
    }

    /// Empty manifest using the configured layout marker
    pub fn from_config(config: &RoutingConfig) -> Self {
        Self::new().with_layout_marker(config.layout_marker.clone())
    }

    /// Sets the leaf name [`Manifest::layout`] registers under
    pub fn with_layout_marker(mut self, marker: impl Into<String>) -> Self {
        self.layout_marker = marker.into();
        self
    }

    /// Registers an export under a source path
    pub fn register(mut self, path: &str, export: Export<V>) -> Self {
        self.exports.insert(source_key(path), export);
        self
    }

    /// Registers a page component
    pub fn page<F>(self, path: &str, f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        self.register(path, Export::component(f))
    }

    /// Registers the layout for a folder (`""` is the root folder)
    pub fn layout<F>(self, dir: &str, f: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        let dir = source_key(dir);
        let path = if dir.is_empty() {
            self.layout_marker.clone()
        } else {
            format!("{}/{}", dir, self.layout_marker)
        };
        self.register(&path, Export::layout(f))
    }

    pub fn get(&self, path: &str) -> Option<&Export<V>> {
        self.exports.get(&source_key(path))
    }

    pub fn len(&self) -> usize {
        self.exports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exports.is_empty()
    }

    /// Builds a node tree from the registrations alone
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_router::manifest::Manifest;
    /// use arbor_router::node::Node;
    ///
    /// let tree = Manifest::new()
    ///     .page("page", || "home".to_string())
    ///     .page("users/[id]", || "user".to_string())
    ///     .tree();
    ///
    /// let names: Vec<&str> = tree.children().iter().map(|c| c.name()).collect();
    /// assert_eq!(names, vec!["page", "users"]);
    /// ```
    pub fn tree(&self) -> ManifestNode<V> {
        let mut root = ManifestNode::root();
        for (path, export) in &self.exports {
            let segments: Vec<&str> = path.split('/').collect();
            root.insert_leaf(&segments, Some(export.clone()));
        }
        root
    }

    /// Walks a pages directory and binds every discovered source file
    ///
    /// Directories become containers; files ending in `.{extension}` become
    /// leaves named by their stem. Each leaf receives the export registered
    /// under its relative path, or none when nothing was registered, which
    /// the compiler rejects for pages. Entries are visited in file-name order.
    pub fn discover(
        &self,
        dir: impl AsRef<Path>,
        extension: &str,
    ) -> Result<ManifestNode<V>, CompileError> {
        let dir = dir.as_ref();
        let mut root = ManifestNode::root();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !e.file_name().to_string_lossy().starts_with('.'));

        for entry in walker {
            let entry = entry.map_err(|source| CompileError::Discovery {
                path: dir.to_path_buf(),
                source,
            })?;

            let Ok(relative) = entry.path().strip_prefix(dir) else {
                continue;
            };
            let mut segments: Vec<String> = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();

            if entry.file_type().is_dir() {
                let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
                root.insert_folder(&segments);
                continue;
            }

            if entry.path().extension().and_then(|e| e.to_str()) != Some(extension) {
                continue;
            }

            if let Some(last) = segments.last_mut() {
                let stem = last
                    .strip_suffix(extension)
                    .and_then(|s| s.strip_suffix('.'))
                    .unwrap_or(last.as_str())
                    .to_string();
                *last = stem;
            }

            let key = segments.join("/");
            let export = self.exports.get(&key).cloned();
            debug!(source = %key, bound = export.is_some(), "discovered page source");

            let segments: Vec<&str> = segments.iter().map(String::as_str).collect();
            root.insert_leaf(&segments, export);
        }

        Ok(root)
    }

    /// [`Manifest::discover`] over the configured `pages_dir` and `extension`
    pub fn discover_with(&self, config: &RoutingConfig) -> Result<ManifestNode<V>, CompileError> {
        self.discover(&config.pages_dir, &config.extension)
    }
}

fn source_key(path: &str) -> String {
    path.replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(node: &ManifestNode<String>) -> Vec<(&str, NodeKind)> {
        node.children().iter().map(|c| (c.name(), c.kind())).collect()
    }

    #[test]
    fn test_tree_nests_folders() {
        let tree = Manifest::new()
            .page("dashboard/settings/page", || "settings".to_string())
            .layout("dashboard", |c: String| c)
            .tree();

        assert_eq!(names(&tree), vec![("dashboard", NodeKind::Container)]);

        let dashboard = &tree.children()[0];
        assert_eq!(
            names(dashboard),
            vec![("layout", NodeKind::Leaf), ("settings", NodeKind::Container)]
        );
    }

    #[test]
    fn test_leaf_and_folder_with_same_name_coexist() {
        let tree = Manifest::new()
            .page("users", || "list".to_string())
            .page("users/[id]", || "user".to_string())
            .tree();

        assert_eq!(
            names(&tree),
            vec![("users", NodeKind::Leaf), ("users", NodeKind::Container)]
        );
    }

    #[test]
    fn test_root_layout_key() {
        let manifest: Manifest<String> = Manifest::new().layout("", |c| c);
        assert!(manifest.get("layout").is_some_and(Export::is_layout));

        let manifest: Manifest<String> = Manifest::new()
            .with_layout_marker("_layout")
            .layout("/admin/", |c| c);
        assert!(manifest.get("admin/_layout").is_some());
    }

    #[test]
    fn test_source_key_normalizes_separators() {
        assert_eq!(source_key("/users//[id]/"), "users/[id]");
        assert_eq!(source_key("users\\page"), "users/page");
    }

    #[test]
    fn test_reregistering_replaces() {
        let manifest = Manifest::new()
            .page("about", || "first".to_string())
            .page("about", || "second".to_string());
        assert_eq!(manifest.len(), 1);

        let tree = manifest.tree();
        match tree.children()[0].load() {
            Some(Export::Component(c)) => assert_eq!(c(), "second"),
            other => panic!("unexpected export: {:?}", other),
        }
    }
}
