//! # Arbor Router
//!
//! A file-tree router for client-side views:
//! - Pages from leaf names (`about` → `/about`, `page` → its folder's path)
//! - Dynamic segments (`[id]` → `/users/:id`)
//! - Nested layouts inherited per folder level
//! - Query strings (`/search?q=rust`) kept out of matching
//!
//! ## Pipeline
//!
//! 1. A [`Manifest`] binds source paths to typed exports, either on its own
//!    ([`Manifest::tree`]) or against a pages directory on disk
//!    ([`Manifest::discover`]).
//! 2. [`compile_routes`] walks the resulting node tree once and produces an
//!    immutable [`RouteTable`].
//! 3. A [`Router`] holds the current path; every [`Router::push`] or
//!    [`Router::replace`] recomputes the matched pattern immediately.
//! 4. [`RouterView`] renders the matched page inside its layouts, or the
//!    not-found fallback.
//!
//! The view type `V` is chosen by the caller; components are `Fn() -> V` and
//! layouts are `Fn(V) -> V`.
//!
//! ## Example
//!
//! ```
//! use arbor_router::{compile_routes, Manifest, Router, RouterView};
//!
//! let tree = Manifest::new()
//!     .layout("", |children: String| format!("<app>{}</app>", children))
//!     .page("page", || "home".to_string())
//!     .page("users/[id]", || "user".to_string())
//!     .tree();
//!
//! let table = compile_routes(&tree).unwrap();
//! let view = RouterView::new(|_| "not found".to_string());
//!
//! let mut router = Router::new(table);
//! router.push("/users/42?tab=posts");
//!
//! assert_eq!(router.route_pattern(), "/users/:id");
//! assert_eq!(router.params().get("id"), Some(&"42".to_string()));
//! assert_eq!(router.search_params().get("tab"), Some(&"posts".to_string()));
//! assert_eq!(view.render(&router), "<app>user</app>");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod compiler;
pub mod config;
pub mod error;
pub mod manifest;
pub mod matcher;
pub mod node;
pub mod path;
pub mod query;
pub mod route;
pub mod router;
pub mod table;
pub mod view;

// ============================================================================
// Re-exports
// ============================================================================

pub use compiler::{compile_routes, RouteCompiler};
pub use config::{Config, RoutingConfig};
pub use error::CompileError;
pub use manifest::{Manifest, ManifestNode};
pub use matcher::{match_pattern, match_route, match_segments, PatternMatch, RouteMatch};
pub use node::{Component, Export, Layout, Node, NodeKind};
pub use path::{normalize_path, split_query};
pub use query::{parse_query, search_params};
pub use router::{NavigationKind, Router};
pub use table::{RouteEntry, RouteTable, RouteTableBuilder};
pub use view::{resolve_view, NotFound, RouterView};
