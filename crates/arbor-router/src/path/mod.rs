/// Path utilities for validation, normalization and query splitting
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

/// Validates if a path is in canonical pattern form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use arbor_router::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/users/:id"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("about"));
/// assert!(!is_valid_path("/about/"));
/// assert!(!is_valid_path("/about//page"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when input is already valid (zero allocations),
/// `Cow::Owned` when normalization was needed.
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
/// - Empty input → `/`
///
/// # Examples
///
/// ```
/// use arbor_router::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("/about/"), "/about");
/// assert_eq!(normalize_path("//users//:id"), "/users/:id");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Splits a navigated path at the first `?`
///
/// Returns the path-only portion and the raw query string (without the `?`),
/// if one is present.
///
/// # Examples
///
/// ```
/// use arbor_router::path::split_query;
///
/// assert_eq!(split_query("/x?a=1&b=2"), ("/x", Some("a=1&b=2")));
/// assert_eq!(split_query("/x"), ("/x", None));
/// assert_eq!(split_query("/x?"), ("/x", Some("")));
/// ```
pub fn split_query(path: &str) -> (&str, Option<&str>) {
    match path.split_once('?') {
        Some((path_only, query)) => (path_only, Some(query)),
        None => (path, None),
    }
}

/// Non-empty `/`-separated segments of a path
///
/// Leading, trailing and doubled slashes are ignored.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

/// Appends one segment to a route prefix
///
/// An empty prefix is the root, so `join_segment("", "about")` is `/about`.
pub fn join_segment(prefix: &str, segment: &str) -> String {
    let joined = format!("{}/{}", prefix.trim_end_matches('/'), segment);
    normalize_path(&joined).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_path() {
        assert!(is_valid_path("/"));
        assert!(is_valid_path("/about"));
        assert!(is_valid_path("/users/:id"));

        assert!(!is_valid_path(""));
        assert!(!is_valid_path("about"));
        assert!(!is_valid_path("/about/"));
        assert!(!is_valid_path("/about//page"));
        assert!(!is_valid_path("/about\\page"));
    }

    #[test]
    fn test_normalize_path_valid() {
        let path = normalize_path("/about");
        assert!(matches!(path, Cow::Borrowed("/about")));

        let path = normalize_path("/");
        assert!(matches!(path, Cow::Borrowed("/")));
    }

    #[test]
    fn test_normalize_path_repairs() {
        assert_eq!(normalize_path("/about/"), "/about");
        assert_eq!(normalize_path("/path///to////page"), "/path/to/page");
        assert_eq!(normalize_path("\\users\\123"), "/users/123");
        assert_eq!(normalize_path("users"), "/users");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn test_split_query_first_question_mark() {
        assert_eq!(split_query("/a?b=1?c=2"), ("/a", Some("b=1?c=2")));
        assert_eq!(split_query("?a=1"), ("", Some("a=1")));
    }

    #[test]
    fn test_segments_skip_empty() {
        let segs: Vec<&str> = segments("//users///42/").collect();
        assert_eq!(segs, vec!["users", "42"]);
        assert_eq!(segments("/").count(), 0);
    }

    #[test]
    fn test_join_segment() {
        assert_eq!(join_segment("", "about"), "/about");
        assert_eq!(join_segment("/users", ":id"), "/users/:id");
        assert_eq!(join_segment("/users/", "new"), "/users/new");
    }
}
