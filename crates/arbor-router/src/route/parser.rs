/// Route path resolution and priority calculation
///
/// Pure functions that turn a node name plus its folder prefix into a
/// compiled route pattern, and rank patterns for matching order.

use super::pattern::{classify_segment, to_pattern_segment};
use crate::path::{join_segment, normalize_path, segments};

/// Computes the route pattern for a leaf node (pure function)
///
/// # Rules
///
/// - `page_marker` maps to the folder prefix itself (`/` at the root)
/// - `[param]` maps to `prefix/:param`
/// - any other name maps to `prefix/name`
///
/// # Examples
///
/// ```
/// use arbor_router::route::parser::resolve_route_path;
///
/// assert_eq!(resolve_route_path("page", "", "page"), "/");
/// assert_eq!(resolve_route_path("page", "/users", "page"), "/users");
/// assert_eq!(resolve_route_path("[id]", "/users", "page"), "/users/:id");
/// assert_eq!(resolve_route_path("about", "", "page"), "/about");
/// ```
pub fn resolve_route_path(name: &str, prefix: &str, page_marker: &str) -> String {
    if name == page_marker {
        return normalize_path(prefix).into_owned();
    }

    join_segment(prefix, &to_pattern_segment(name))
}

/// Computes the prefix a container node hands to its children
///
/// Bracketed folder names contribute a dynamic segment, as leaves do.
pub fn resolve_folder_prefix(name: &str, prefix: &str) -> String {
    join_segment(prefix, &to_pattern_segment(name))
}

/// Calculates route priority for matching order (pure function)
///
/// Lower number = higher priority (matched first).
///
/// 1. **Static routes** → 0
/// 2. **Dynamic routes** → dynamic segments + depth + 1
///
/// # Examples
///
/// ```
/// use arbor_router::route::parser::calculate_priority;
///
/// assert_eq!(calculate_priority(0, 2), 0);
/// assert_eq!(calculate_priority(1, 2), 4);
/// ```
pub fn calculate_priority(dynamic_count: usize, depth: usize) -> usize {
    if dynamic_count == 0 {
        0
    } else {
        dynamic_count + depth + 1
    }
}

/// Priority of a compiled pattern string
pub fn pattern_priority(pattern: &str) -> usize {
    let (depth, dynamic_count) = segments(pattern).fold((0, 0), |(depth, dynamic), seg| {
        let dynamic = dynamic + usize::from(classify_segment(seg).is_dynamic());
        (depth + 1, dynamic)
    });

    calculate_priority(dynamic_count, depth)
}
