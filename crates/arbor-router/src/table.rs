//! Compiled route table
//!
//! The table maps route patterns to entries and fixes the order in which
//! patterns are tried: static patterns first, then by increasing dynamic
//! weight, ties broken by pattern text. The order is deterministic for a
//! given set of patterns, whatever order they were registered in.

use crate::node::{Component, Layout};
use crate::route::pattern_priority;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// A renderable page plus the layouts inherited from its ancestor folders
pub struct RouteEntry<V> {
    component: Component<V>,
    /// Outermost-declared first
    layouts: Vec<Layout<V>>,
    source: String,
}

impl<V> RouteEntry<V> {
    pub fn new(component: Component<V>, layouts: Vec<Layout<V>>) -> Self {
        Self {
            component,
            layouts,
            source: String::new(),
        }
    }

    /// Entry without layouts from a plain closure
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        Self::new(Arc::new(f), Vec::new())
    }

    /// Records the source path the entry was compiled from
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Appends an inner layout (builder)
    pub fn with_layout<F>(mut self, layout: F) -> Self
    where
        F: Fn(V) -> V + Send + Sync + 'static,
    {
        self.layouts.push(Arc::new(layout));
        self
    }

    pub fn component(&self) -> &Component<V> {
        &self.component
    }

    pub fn layouts(&self) -> &[Layout<V>] {
        &self.layouts
    }

    /// Source path, empty for entries not built by the compiler
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Renders the component and wraps it innermost layout first
    ///
    /// With `layouts = [L1, L2]` the result is `L1(L2(component()))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use arbor_router::RouteEntry;
    ///
    /// let entry = RouteEntry::from_fn(|| "page".to_string())
    ///     .with_layout(|c| format!("L1({})", c))
    ///     .with_layout(|c| format!("L2({})", c));
    ///
    /// assert_eq!(entry.render(), "L1(L2(page))");
    /// ```
    pub fn render(&self) -> V {
        self.layouts
            .iter()
            .rev()
            .fold((self.component)(), |children, layout| layout(children))
    }
}

impl<V> Clone for RouteEntry<V> {
    fn clone(&self) -> Self {
        Self {
            component: Arc::clone(&self.component),
            layouts: self.layouts.clone(),
            source: self.source.clone(),
        }
    }
}

impl<V> fmt::Debug for RouteEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("source", &self.source)
            .field("layouts", &self.layouts.len())
            .finish()
    }
}

/// Read-only mapping from route pattern to [`RouteEntry`]
pub struct RouteTable<V> {
    entries: HashMap<String, RouteEntry<V>>,
    order: Vec<String>,
}

impl<V> RouteTable<V> {
    pub fn builder() -> RouteTableBuilder<V> {
        RouteTableBuilder::new()
    }

    pub fn get(&self, pattern: &str) -> Option<&RouteEntry<V>> {
        self.entries.get(pattern)
    }

    pub fn contains(&self, pattern: &str) -> bool {
        self.entries.contains_key(pattern)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Patterns in match order
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// `(pattern, entry)` pairs in match order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry<V>)> {
        self.order
            .iter()
            .filter_map(|p| self.entries.get(p).map(|e| (p.as_str(), e)))
    }
}

impl<V> fmt::Debug for RouteTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Accumulates entries before the table is frozen
pub struct RouteTableBuilder<V> {
    entries: HashMap<String, RouteEntry<V>>,
}

impl<V> Default for RouteTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> RouteTableBuilder<V> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Inserts an entry; an existing entry for the same pattern is replaced
    ///
    /// Replacement is logged and the previous entry returned.
    pub fn insert(
        &mut self,
        pattern: impl Into<String>,
        entry: RouteEntry<V>,
    ) -> Option<RouteEntry<V>> {
        let pattern = pattern.into();
        let new_source = entry.source.clone();
        let previous = self.entries.insert(pattern.clone(), entry);

        if let Some(ref prev) = previous {
            warn!(
                pattern = %pattern,
                replaced = %prev.source,
                by = %new_source,
                "duplicate route pattern, keeping the last one"
            );
        }

        previous
    }

    /// Adds an entry (builder)
    pub fn route(mut self, pattern: impl Into<String>, entry: RouteEntry<V>) -> Self {
        self.insert(pattern, entry);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freezes the table and fixes its match order
    pub fn build(self) -> RouteTable<V> {
        let mut order: Vec<String> = self.entries.keys().cloned().collect();
        order.sort_by(|a, b| {
            pattern_priority(a)
                .cmp(&pattern_priority(b))
                .then_with(|| a.cmp(b))
        });

        RouteTable {
            entries: self.entries,
            order,
        }
    }
}
