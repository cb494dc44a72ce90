/// Query string handling for navigated paths
///
/// Values are taken verbatim; no percent-decoding is applied.

use crate::path::split_query;
use std::collections::HashMap;

/// Parses a raw query string (`a=1&b=2`) into a map
///
/// Each `&`-separated piece is split on its first `=`. Pieces without `=`,
/// or with an empty key or an empty value, are dropped. A later duplicate
/// key overwrites an earlier one.
///
/// # Examples
///
/// ```
/// use arbor_router::query::parse_query;
///
/// let params = parse_query("a=1&b=2&broken&=x&y=");
/// assert_eq!(params.len(), 2);
/// assert_eq!(params.get("a"), Some(&"1".to_string()));
/// assert_eq!(params.get("b"), Some(&"2".to_string()));
/// ```
pub fn parse_query(query: &str) -> HashMap<String, String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .filter(|(key, value)| !key.is_empty() && !value.is_empty())
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Search parameters of a full navigated path
///
/// Everything after the first `?` is parsed with [`parse_query`]; a path
/// without `?` has no search parameters.
///
/// # Examples
///
/// ```
/// use arbor_router::query::search_params;
///
/// let params = search_params("/x?a=1&b=2&broken");
/// assert_eq!(params.len(), 2);
/// assert!(search_params("/x").is_empty());
/// ```
pub fn search_params(path: &str) -> HashMap<String, String> {
    match split_query(path) {
        (_, Some(query)) => parse_query(query),
        (_, None) => HashMap::new(),
    }
}
