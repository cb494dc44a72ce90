//! Route compiler: node tree → [`RouteTable`]
//!
//! Walks the tree depth-first carrying the path prefix and the layouts
//! inherited from ancestor folders. At each folder the layout marker is
//! resolved first, so every sibling at that level, and everything below it,
//! sees the same layout list regardless of child order.

use crate::config::RoutingConfig;
use crate::error::CompileError;
use crate::node::{Export, Layout, Node};
use crate::route::{resolve_folder_prefix, resolve_route_path};
use crate::table::{RouteEntry, RouteTable, RouteTableBuilder};
use tracing::{debug, info, warn};

/// Compiles a node tree with the default markers (`page`, `layout`)
///
/// # Examples
///
/// ```
/// use arbor_router::compile_routes;
/// use arbor_router::manifest::Manifest;
///
/// let tree = Manifest::new()
///     .page("page", || "home".to_string())
///     .page("users/[id]", || "user".to_string())
///     .tree();
///
/// let table = compile_routes(&tree).unwrap();
/// assert!(table.contains("/"));
/// assert!(table.contains("/users/:id"));
/// ```
pub fn compile_routes<V, N: Node<V>>(root: &N) -> Result<RouteTable<V>, CompileError> {
    RouteCompiler::new().compile(root)
}

/// Configurable route compiler
#[derive(Debug, Clone)]
pub struct RouteCompiler {
    page_marker: String,
    layout_marker: String,
}

impl Default for RouteCompiler {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteCompiler {
    pub fn new() -> Self {
        Self {
            page_marker: "page".to_string(),
            layout_marker: "layout".to_string(),
        }
    }

    /// Uses the markers from a routing configuration
    pub fn from_config(config: &RoutingConfig) -> Self {
        Self {
            page_marker: config.page_marker.clone(),
            layout_marker: config.layout_marker.clone(),
        }
    }

    pub fn with_page_marker(mut self, marker: impl Into<String>) -> Self {
        self.page_marker = marker.into();
        self
    }

    pub fn with_layout_marker(mut self, marker: impl Into<String>) -> Self {
        self.layout_marker = marker.into();
        self
    }

    /// Compiles the tree below `root` into a route table
    ///
    /// The root's own name is not part of any pattern. Fails on the first
    /// page leaf without a component export.
    pub fn compile<V, N: Node<V>>(&self, root: &N) -> Result<RouteTable<V>, CompileError> {
        let mut builder = RouteTable::builder();
        self.walk(root, "", "", &[], &mut builder)?;

        let table = builder.build();
        info!(routes = table.len(), "compiled route table");
        Ok(table)
    }

    fn walk<V, N: Node<V>>(
        &self,
        folder: &N,
        prefix: &str,
        source: &str,
        inherited: &[Layout<V>],
        builder: &mut RouteTableBuilder<V>,
    ) -> Result<(), CompileError> {
        let layouts = self.folder_layouts(folder, source, inherited);

        for child in folder.children() {
            let child_source = join_source(source, child.name());

            if child.is_container() {
                let child_prefix = resolve_folder_prefix(child.name(), prefix);
                self.walk(child, &child_prefix, &child_source, &layouts, builder)?;
                continue;
            }

            if child.name() == self.layout_marker {
                continue;
            }

            let pattern = resolve_route_path(child.name(), prefix, &self.page_marker);
            let component = match child.load() {
                Some(Export::Component(component)) => component,
                Some(Export::Layout(_)) => {
                    return Err(CompileError::ExportMismatch { path: child_source })
                }
                None => return Err(CompileError::MissingExport { path: child_source }),
            };

            debug!(
                pattern = %pattern,
                source = %child_source,
                layouts = layouts.len(),
                "registered route"
            );
            builder.insert(
                pattern,
                RouteEntry::new(component, layouts.clone()).with_source(child_source),
            );
        }

        Ok(())
    }

    /// Inherited layouts plus this folder's own layout, if it declares a usable one
    fn folder_layouts<V, N: Node<V>>(
        &self,
        folder: &N,
        source: &str,
        inherited: &[Layout<V>],
    ) -> Vec<Layout<V>> {
        let mut layouts = inherited.to_vec();

        for child in folder.children() {
            if !child.is_leaf() || child.name() != self.layout_marker {
                continue;
            }

            match child.load() {
                Some(Export::Layout(layout)) => layouts.push(layout),
                Some(Export::Component(_)) => warn!(
                    source = %join_source(source, child.name()),
                    "layout exports a component, ignoring it"
                ),
                None => warn!(
                    source = %join_source(source, child.name()),
                    "layout has no export, ignoring it"
                ),
            }
        }

        layouts
    }
}

fn join_source(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", parent, name)
    }
}
