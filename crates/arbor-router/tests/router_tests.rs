//! Integration tests for arbor-router
//!
//! Covers the full pipeline: node tree → compiled table → navigation →
//! parameters, query strings and rendered views.

use arbor_router::*;
use pretty_assertions::assert_eq;
use rstest::rstest;
use std::collections::HashMap;

fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn tag(name: &'static str) -> impl Fn(String) -> String + Send + Sync + 'static {
    move |children| format!("<{name}>{children}</{name}>")
}

/// pages/
/// ├── layout        (L1)
/// ├── page          → /
/// ├── about         → /about
/// ├── users/
/// │   ├── page      → /users
/// │   ├── new       → /users/new
/// │   └── [id]      → /users/:id
/// └── sub/
///     ├── layout    (L2)
///     ├── page      → /sub
///     └── [slug]/
///         └── page  → /sub/:slug
fn app_manifest() -> Manifest<String> {
    Manifest::new()
        .layout("", tag("L1"))
        .page("page", || "home".to_string())
        .page("about", || "about".to_string())
        .page("users/page", || "users".to_string())
        .page("users/new", || "new-user".to_string())
        .page("users/[id]", || "user".to_string())
        .layout("sub", tag("L2"))
        .page("sub/page", || "sub".to_string())
        .page("sub/[slug]/page", || "post".to_string())
}

fn app_table() -> RouteTable<String> {
    compile_routes(&app_manifest().tree()).unwrap()
}

fn not_found_view() -> RouterView<String> {
    RouterView::new(|nf| format!("404 {}", nf.path()))
}

// ----------------------------------------------------------------------------
// Compilation
// ----------------------------------------------------------------------------

#[test]
fn test_compiled_patterns() {
    let table = app_table();
    let patterns: Vec<&str> = table.patterns().collect();

    assert_eq!(
        patterns,
        vec![
            "/",
            "/about",
            "/sub",
            "/users",
            "/users/new",
            "/sub/:slug",
            "/users/:id",
        ]
    );
}

#[test]
fn test_patterns_are_canonical() {
    for pattern in app_table().patterns() {
        assert!(path::is_valid_path(pattern), "not canonical: {pattern}");
    }
}

#[rstest]
#[case("[id]", "", "/:id")]
#[case("[id]", "/users", "/users/:id")]
#[case("[slug]", "/a/b/c", "/a/b/c/:slug")]
fn test_bracketed_leaf_compiles_to_colon(
    #[case] leaf: &str,
    #[case] prefix: &str,
    #[case] expected: &str,
) {
    assert_eq!(route::resolve_route_path(leaf, prefix, "page"), expected);
}

#[rstest]
#[case("", "/")]
#[case("/users", "/users")]
#[case("/users/:id/posts", "/users/:id/posts")]
fn test_page_marker_keys_its_prefix(#[case] prefix: &str, #[case] expected: &str) {
    let pattern = route::resolve_route_path("page", prefix, "page");
    assert_eq!(pattern, expected);
    assert!(!pattern.ends_with("/page"));
}

#[test]
fn test_layout_chain_order() {
    let table = app_table();

    assert_eq!(table.get("/").unwrap().layouts().len(), 1);
    assert_eq!(table.get("/users/:id").unwrap().layouts().len(), 1);
    assert_eq!(table.get("/sub").unwrap().layouts().len(), 2);
    assert_eq!(table.get("/sub/:slug").unwrap().layouts().len(), 2);

    assert_eq!(table.get("/sub").unwrap().render(), "<L1><L2>sub</L2></L1>");
}

#[test]
fn test_missing_export_rejects_compilation() {
    let tree = ManifestNode::root()
        .with_child(ManifestNode::page("page", || "home".to_string()))
        .with_child(ManifestNode::unbound("broken"));

    match compile_routes::<String, _>(&tree) {
        Err(CompileError::MissingExport { path }) => assert_eq!(path, "broken"),
        other => panic!("expected MissingExport, got {:?}", other.map(|t| t.len())),
    }
}

// ----------------------------------------------------------------------------
// Matching
// ----------------------------------------------------------------------------

#[rstest]
#[case("/a/b", "/:x")]
#[case("/a", "/a/b")]
#[case("/", "/:x")]
#[case("/x/y/z", "/:a/:b")]
fn test_segment_count_mismatch(#[case] actual: &str, #[case] pattern: &str) {
    assert!(match_segments(actual, pattern).is_empty());
}

#[test]
fn test_match_dynamic_route() {
    let m = match_route("/users/42", &app_table()).unwrap();
    assert_eq!(m.pattern, "/users/:id");
    assert_eq!(m.params, map(&[("id", "42")]));
}

#[test]
fn test_match_literal_route() {
    let m = match_route("/about", &app_table()).unwrap();
    assert_eq!(m, RouteMatch { pattern: "/about".to_string(), params: HashMap::new() });
}

#[test]
fn test_static_sibling_beats_dynamic() {
    let m = match_route("/users/new", &app_table()).unwrap();
    assert_eq!(m.pattern, "/users/new");
}

#[test]
fn test_literal_route_requires_exact_path() {
    let table = app_table();
    assert!(match_route("/about/", &table).is_none());
    assert!(match_route("about", &table).is_none());
    assert!(match_route("", &table).is_none());

    let mut router = Router::new(table);
    router.push("/about/");
    assert_eq!(router.route_pattern(), "");
    assert_eq!(not_found_view().render(&router), "404 /about/");
}

#[test]
fn test_unknown_route_falls_back() {
    let table = app_table();
    assert!(match_route("/unknown", &table).is_none());

    let mut router = Router::new(table);
    router.push("/unknown");
    assert_eq!(router.route_pattern(), "");
    assert_eq!(not_found_view().render(&router), "404 /unknown");
}

// ----------------------------------------------------------------------------
// Navigation & views
// ----------------------------------------------------------------------------

#[test]
fn test_nested_layouts_render_outermost_root() {
    let mut router = Router::new(app_table());
    router.push("/sub/hello");

    assert_eq!(router.params(), map(&[("slug", "hello")]));
    assert_eq!(
        not_found_view().render(&router),
        "<L1><L2>post</L2></L1>"
    );
}

#[test]
fn test_search_params_drop_malformed_pairs() {
    let mut router = Router::new(app_table());
    router.push("/x?a=1&b=2&broken");

    assert_eq!(router.search_params(), map(&[("a", "1"), ("b", "2")]));
}

#[test]
fn test_push_updates_pattern_immediately() {
    let mut router = Router::new(app_table());
    assert_eq!(router.route_pattern(), "/");

    router.push("/users/7?tab=info");
    assert_eq!(router.route_pattern(), "/users/:id");

    router.replace("/about");
    assert_eq!(router.route_pattern(), "/about");
}

#[test]
fn test_params_idempotent() {
    let mut router = Router::new(app_table());
    router.push("/users/99");

    let first = router.params();
    let second = router.params();
    assert_eq!(first, second);
    assert_eq!(first, map(&[("id", "99")]));
}

#[test]
fn test_literal_route_has_no_params() {
    let mut router = Router::new(app_table());
    router.push("/about?x=1");
    assert!(router.params().is_empty());
    assert_eq!(router.search_params(), map(&[("x", "1")]));
}

#[test]
fn test_not_found_go_home() {
    let mut router = Router::new(app_table());
    router.push("/missing/page");

    let mut action = None;
    let rendered = resolve_view(&router, |nf| {
        action = Some(nf.clone());
        "fallback".to_string()
    });
    assert_eq!(rendered, "fallback");

    action.unwrap().go_home(&mut router);
    assert_eq!(router.current_path(), "/");
    assert_eq!(not_found_view().render(&router), "<L1>home</L1>");
}

#[test]
fn test_table_shared_across_threads() {
    let table = std::sync::Arc::new(app_table());

    let handles: Vec<_> = ["/users/1", "/users/2"]
        .into_iter()
        .map(|path| {
            let table = std::sync::Arc::clone(&table);
            std::thread::spawn(move || {
                let mut router = Router::new(table);
                router.push(path);
                router.params()
            })
        })
        .collect();

    let ids: Vec<String> = handles
        .into_iter()
        .map(|h| h.join().unwrap()["id"].clone())
        .collect();
    assert_eq!(ids, vec!["1".to_string(), "2".to_string()]);
}
