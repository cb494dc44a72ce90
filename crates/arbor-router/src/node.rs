//! Source tree abstraction consumed by the route compiler
//!
//! A node is either a leaf that exports a component or layout, or a
//! container that groups further nodes. The compiler reads names, kinds and
//! children, and asks leaves for their export; it never looks inside one.

use std::fmt;
use std::sync::Arc;

/// Renders a page into the caller's view type
pub type Component<V> = Arc<dyn Fn() -> V + Send + Sync>;

/// Wraps an already rendered child view
pub type Layout<V> = Arc<dyn Fn(V) -> V + Send + Sync>;

/// Whether a node produces behavior or groups other nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// Module-like node with an export (page or layout)
    Leaf,
    /// Folder-like node with children
    Container,
}

/// The default export of a leaf node
pub enum Export<V> {
    /// `() -> V`
    Component(Component<V>),
    /// `(children: V) -> V`
    Layout(Layout<V>),
}

impl<V> Export<V> {
    /// Wraps a component closure
    pub fn component<F>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        Export::Component(Arc::new(f))
    }

    /// Wraps a layout closure
    pub fn layout<F>(f: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        Export::Layout(Arc::new(f))
    }

    pub fn is_component(&self) -> bool {
        matches!(self, Export::Component(_))
    }

    pub fn is_layout(&self) -> bool {
        matches!(self, Export::Layout(_))
    }
}

impl<V> Clone for Export<V> {
    fn clone(&self) -> Self {
        match self {
            Export::Component(c) => Export::Component(Arc::clone(c)),
            Export::Layout(l) => Export::Layout(Arc::clone(l)),
        }
    }
}

impl<V> fmt::Debug for Export<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Export::Component(_) => f.write_str("Export::Component(..)"),
            Export::Layout(_) => f.write_str("Export::Layout(..)"),
        }
    }
}

/// A node in the source namespace
///
/// Implemented by [`ManifestNode`](crate::manifest::ManifestNode) and by any
/// embedding environment that already has its own module tree.
pub trait Node<V> {
    /// Name without extension, e.g. `page`, `layout`, `[id]`, `users`
    fn name(&self) -> &str;

    fn kind(&self) -> NodeKind;

    /// Direct children in declaration order; empty for leaves
    fn children(&self) -> &[Self]
    where
        Self: Sized;

    /// Resolves the node's default export, `None` when it has none
    fn load(&self) -> Option<Export<V>>;

    fn is_leaf(&self) -> bool {
        self.kind() == NodeKind::Leaf
    }

    fn is_container(&self) -> bool {
        self.kind() == NodeKind::Container
    }
}
