//! Path matching and parameter extraction
//!
//! Both the actual path and the pattern are split on `/` with empty
//! segments discarded, so leading, trailing and doubled slashes are
//! tolerated on either side. A pattern segment written `:name` (compiled
//! form) or `[name]` (source form) binds the actual segment unconditionally;
//! every other segment must match literally. Route resolution is stricter
//! for purely literal patterns, see [`match_route`].

use crate::path::segments;
use crate::route::{classify_segment, PatternSegmentType};
use crate::table::RouteTable;
use std::collections::HashMap;

/// Outcome of matching one path against one pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternMatch {
    /// Segment counts differ or a literal segment differs
    Unmatched,
    /// Every segment is literal and all of them matched
    Literal,
    /// Matched, binding at least one dynamic segment
    Bound(HashMap<String, String>),
}

impl PatternMatch {
    pub fn is_match(&self) -> bool {
        !matches!(self, PatternMatch::Unmatched)
    }

    /// Bound parameters; empty for literal matches and mismatches alike
    pub fn into_params(self) -> HashMap<String, String> {
        match self {
            PatternMatch::Bound(params) => params,
            PatternMatch::Literal | PatternMatch::Unmatched => HashMap::new(),
        }
    }
}

/// Result of resolving a path against a route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// The matched key in the route table
    pub pattern: String,
    /// Extracted parameters from the path
    pub params: HashMap<String, String>,
}

/// Matches a path against a pattern (case-sensitive)
///
/// # Examples
///
/// ```
/// use arbor_router::matcher::{match_pattern, PatternMatch};
///
/// assert_eq!(match_pattern("/about", "/about"), PatternMatch::Literal);
/// assert_eq!(match_pattern("/about", "/contact"), PatternMatch::Unmatched);
/// assert!(matches!(match_pattern("/users/7", "/users/:id"), PatternMatch::Bound(_)));
/// ```
pub fn match_pattern(actual: &str, pattern: &str) -> PatternMatch {
    match_pattern_with_options(actual, pattern, false)
}

/// Matches a path against a pattern with options
///
/// With `case_insensitive`, literal segments compare ignoring ASCII case;
/// bound values always keep the case of the actual path.
pub fn match_pattern_with_options(
    actual: &str,
    pattern: &str,
    case_insensitive: bool,
) -> PatternMatch {
    let actual_segments: Vec<&str> = segments(actual).collect();
    let pattern_segments: Vec<&str> = segments(pattern).collect();

    if actual_segments.len() != pattern_segments.len() {
        return PatternMatch::Unmatched;
    }

    let bound = pattern_segments.iter().zip(&actual_segments).try_fold(
        HashMap::new(),
        |mut params, (pattern_seg, actual_seg)| match classify_segment(pattern_seg) {
            PatternSegmentType::Dynamic(name) => {
                params.insert(name.to_string(), (*actual_seg).to_string());
                Some(params)
            }
            PatternSegmentType::Static(literal) => {
                let equal = if case_insensitive {
                    literal.eq_ignore_ascii_case(actual_seg)
                } else {
                    literal == *actual_seg
                };
                equal.then_some(params)
            }
        },
    );

    match bound {
        None => PatternMatch::Unmatched,
        Some(params) if params.is_empty() => PatternMatch::Literal,
        Some(params) => PatternMatch::Bound(params),
    }
}

/// Extracts parameters of `actual` under `pattern`
///
/// Returns an empty map when the segment counts differ, when a literal
/// segment differs, or when the pattern simply has no dynamic segments.
/// Use [`match_pattern`] to tell those cases apart.
///
/// # Examples
///
/// ```
/// use arbor_router::matcher::match_segments;
///
/// let params = match_segments("/users/42", "/users/:id");
/// assert_eq!(params.get("id"), Some(&"42".to_string()));
///
/// let params = match_segments("/users/42/posts", "/users/:id");
/// assert!(params.is_empty());
/// ```
pub fn match_segments(actual: &str, pattern: &str) -> HashMap<String, String> {
    match_pattern(actual, pattern).into_params()
}

/// Finds the first pattern in table order that matches `path_only`
///
/// `path_only` must already have its query string removed. A pattern with
/// dynamic segments is accepted once it binds; a purely literal pattern
/// only when it equals `path_only` exactly, so `/about/` does not resolve
/// to `/about`.
///
/// # Examples
///
/// ```
/// use arbor_router::{RouteEntry, RouteTable};
/// use arbor_router::matcher::match_route;
///
/// let table = RouteTable::builder()
///     .route("/users/:id", RouteEntry::from_fn(|| "user".to_string()))
///     .build();
///
/// let m = match_route("/users/42", &table).unwrap();
/// assert_eq!(m.pattern, "/users/:id");
/// assert_eq!(m.params.get("id"), Some(&"42".to_string()));
/// ```
pub fn match_route<V>(path_only: &str, table: &RouteTable<V>) -> Option<RouteMatch> {
    match_route_with_options(path_only, table, false)
}

/// [`match_route`] with case-insensitive literal comparison available
pub fn match_route_with_options<V>(
    path_only: &str,
    table: &RouteTable<V>,
    case_insensitive: bool,
) -> Option<RouteMatch> {
    table.patterns().find_map(|pattern| {
        let params = match match_pattern_with_options(path_only, pattern, case_insensitive) {
            PatternMatch::Bound(params) => params,
            PatternMatch::Literal if literal_equals(pattern, path_only, case_insensitive) => {
                HashMap::new()
            }
            _ => return None,
        };

        Some(RouteMatch {
            pattern: pattern.to_string(),
            params,
        })
    })
}

fn literal_equals(pattern: &str, path_only: &str, case_insensitive: bool) -> bool {
    if case_insensitive {
        pattern.eq_ignore_ascii_case(path_only)
    } else {
        pattern == path_only
    }
}
