//! View resolution
//!
//! Turns the router's current match into a rendered view, falling back to a
//! caller-supplied not-found view when the current path matches nothing.

use crate::config::RoutingConfig;
use crate::router::Router;
use std::sync::Arc;

/// Context handed to the not-found view
///
/// Carries the unmatched path and the single action the fallback offers:
/// replacing the current path with the home path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotFound {
    path: String,
    home_path: String,
}

impl NotFound {
    /// The path that matched no route
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn home_path(&self) -> &str {
        &self.home_path
    }

    /// Navigates back home with `replace`
    pub fn go_home<V>(&self, router: &mut Router<V>) {
        router.replace(self.home_path.clone());
    }
}

/// Resolves the current route of `router` into a view
///
/// Renders the matched component wrapped in its layouts, innermost first,
/// or calls `not_found` (with a home path of `/`) when nothing matched.
pub fn resolve_view<V>(router: &Router<V>, not_found: impl FnOnce(&NotFound) -> V) -> V {
    resolve_with_home(router, "/", not_found)
}

fn resolve_with_home<V>(
    router: &Router<V>,
    home_path: &str,
    not_found: impl FnOnce(&NotFound) -> V,
) -> V {
    match router.current_entry() {
        Some(entry) => entry.render(),
        None => not_found(&NotFound {
            path: router.current_path().to_string(),
            home_path: home_path.to_string(),
        }),
    }
}

/// Reusable view resolver holding the not-found fallback
///
/// # Examples
///
/// ```
/// use arbor_router::{Router, RouterView, RouteEntry, RouteTable};
///
/// let table = RouteTable::builder()
///     .route("/", RouteEntry::from_fn(|| "home".to_string()))
///     .build();
/// let view = RouterView::new(|nf| format!("404: {}", nf.path()));
///
/// let mut router = Router::new(table);
/// assert_eq!(view.render(&router), "home");
///
/// router.push("/missing");
/// assert_eq!(view.render(&router), "404: /missing");
/// ```
pub struct RouterView<V> {
    not_found: Arc<dyn Fn(&NotFound) -> V + Send + Sync>,
    home_path: String,
}

impl<V> RouterView<V> {
    pub fn new<F>(not_found: F) -> Self
    where
        F: Fn(&NotFound) -> V + Send + Sync + 'static,
    {
        Self {
            not_found: Arc::new(not_found),
            home_path: "/".to_string(),
        }
    }

    /// Uses the configured home path for the not-found action
    pub fn from_config<F>(config: &RoutingConfig, not_found: F) -> Self
    where
        F: Fn(&NotFound) -> V + Send + Sync + 'static,
    {
        Self::new(not_found).with_home_path(config.home_path.clone())
    }

    pub fn with_home_path(mut self, path: impl Into<String>) -> Self {
        self.home_path = path.into();
        self
    }

    pub fn render(&self, router: &Router<V>) -> V {
        resolve_with_home(router, &self.home_path, |nf| (self.not_found)(nf))
    }
}

impl<V> Clone for RouterView<V> {
    fn clone(&self) -> Self {
        Self {
            not_found: Arc::clone(&self.not_found),
            home_path: self.home_path.clone(),
        }
    }
}
