//! Navigation state
//!
//! [`Router`] owns the current path and the route pattern derived from it.
//! Every navigation assigns the path and recomputes the pattern in the same
//! call, so the two are never observed out of step.

use crate::config::RoutingConfig;
use crate::matcher::{match_pattern_with_options, match_route_with_options};
use crate::path::split_query;
use crate::query;
use crate::table::{RouteEntry, RouteTable};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// How a navigation was requested
///
/// Both kinds update the current path identically; no history is kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    Push,
    Replace,
}

impl fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationKind::Push => f.write_str("push"),
            NavigationKind::Replace => f.write_str("replace"),
        }
    }
}

/// Current path plus the compiled table it is resolved against
///
/// # Examples
///
/// ```
/// use arbor_router::{Router, RouteEntry, RouteTable};
///
/// let table = RouteTable::builder()
///     .route("/", RouteEntry::from_fn(|| "home".to_string()))
///     .route("/users/:id", RouteEntry::from_fn(|| "user".to_string()))
///     .build();
///
/// let mut router = Router::new(table);
/// assert_eq!(router.route_pattern(), "/");
///
/// router.push("/users/42?tab=posts");
/// assert_eq!(router.route_pattern(), "/users/:id");
/// assert_eq!(router.params().get("id"), Some(&"42".to_string()));
/// assert_eq!(router.search_params().get("tab"), Some(&"posts".to_string()));
/// ```
pub struct Router<V> {
    current_path: String,
    route_pattern: String,
    table: Arc<RouteTable<V>>,
    case_insensitive: bool,
}

impl<V> Router<V> {
    /// Mounts a router at `/`
    pub fn new(table: impl Into<Arc<RouteTable<V>>>) -> Self {
        Self::mount(table.into(), false)
    }

    /// Mounts a router at `/` using the routing configuration's match options
    pub fn with_config(table: impl Into<Arc<RouteTable<V>>>, config: &RoutingConfig) -> Self {
        Self::mount(table.into(), config.case_insensitive)
    }

    fn mount(table: Arc<RouteTable<V>>, case_insensitive: bool) -> Self {
        let mut router = Self {
            current_path: String::new(),
            route_pattern: String::new(),
            table,
            case_insensitive,
        };
        router.set_path("/".to_string());
        router
    }

    /// The path last navigated to, query string included
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Table key matching the current path, `""` when nothing matches
    pub fn route_pattern(&self) -> &str {
        &self.route_pattern
    }

    pub fn table(&self) -> &Arc<RouteTable<V>> {
        &self.table
    }

    /// Entry for the current route pattern
    pub fn current_entry(&self) -> Option<&RouteEntry<V>> {
        if self.route_pattern.is_empty() {
            return None;
        }
        self.table.get(&self.route_pattern)
    }

    pub fn push(&mut self, path: impl Into<String>) {
        self.navigate(NavigationKind::Push, path.into());
    }

    pub fn replace(&mut self, path: impl Into<String>) {
        self.navigate(NavigationKind::Replace, path.into());
    }

    fn navigate(&mut self, kind: NavigationKind, path: String) {
        self.set_path(path);
        debug!(
            kind = %kind,
            path = %self.current_path,
            pattern = %self.route_pattern,
            "navigated"
        );
    }

    fn set_path(&mut self, path: String) {
        let (path_only, _) = split_query(&path);
        self.route_pattern = match_route_with_options(path_only, &self.table, self.case_insensitive)
            .map(|m| m.pattern)
            .unwrap_or_default();
        self.current_path = path;
    }

    /// Dynamic segments of the current path under the current pattern
    ///
    /// Recomputed on every call; empty when nothing matched or the pattern
    /// is fully literal.
    pub fn params(&self) -> HashMap<String, String> {
        let (path_only, _) = split_query(&self.current_path);
        match_pattern_with_options(path_only, &self.route_pattern, self.case_insensitive)
            .into_params()
    }

    /// Query parameters of the current path
    pub fn search_params(&self) -> HashMap<String, String> {
        query::search_params(&self.current_path)
    }
}

impl<V> Clone for Router<V> {
    fn clone(&self) -> Self {
        Self {
            current_path: self.current_path.clone(),
            route_pattern: self.route_pattern.clone(),
            table: Arc::clone(&self.table),
            case_insensitive: self.case_insensitive,
        }
    }
}

impl<V> fmt::Debug for Router<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("current_path", &self.current_path)
            .field("route_pattern", &self.route_pattern)
            .field("routes", &self.table.len())
            .finish()
    }
}
