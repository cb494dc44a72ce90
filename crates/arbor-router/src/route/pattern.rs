//! Segment classification for source names and compiled patterns
//!
//! Source tree names write dynamic segments as `[name]`; compiled route
//! patterns write them as `:name`. Both forms classify to the same segment type.

/// Represents the two kinds of route pattern segments
///
/// # Examples
///
/// ```
/// use arbor_router::route::pattern::{classify_segment, PatternSegmentType};
///
/// assert!(matches!(classify_segment("about"), PatternSegmentType::Static(_)));
/// assert!(matches!(classify_segment("[id]"), PatternSegmentType::Dynamic(_)));
/// assert!(matches!(classify_segment(":id"), PatternSegmentType::Dynamic(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSegmentType<'a> {
    /// Dynamic parameter: `[id]` in source names, `:id` once compiled
    Dynamic(&'a str),
    /// Static text segment
    Static(&'a str),
}

impl PatternSegmentType<'_> {
    /// Returns true for dynamic segments
    pub fn is_dynamic(&self) -> bool {
        matches!(self, PatternSegmentType::Dynamic(_))
    }
}

/// Classifies a segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Bracketed**: `[name]` with a non-empty name
/// 2. **Colon-prefixed**: `:name` with a non-empty name
/// 3. **Static**: Any other text, including `[]` and a bare `:`
pub fn classify_segment(segment: &str) -> PatternSegmentType<'_> {
    if let Some(name) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        if !name.is_empty() {
            return PatternSegmentType::Dynamic(name);
        }
    }

    match segment.strip_prefix(':') {
        Some(name) if !name.is_empty() => PatternSegmentType::Dynamic(name),
        _ => PatternSegmentType::Static(segment),
    }
}

/// Converts a source name into its compiled pattern segment
///
/// `[id]` becomes `:id`; every other name is kept as written.
///
/// # Examples
///
/// ```
/// use arbor_router::route::pattern::to_pattern_segment;
///
/// assert_eq!(to_pattern_segment("[slug]"), ":slug");
/// assert_eq!(to_pattern_segment("about"), "about");
/// ```
pub fn to_pattern_segment(name: &str) -> String {
    match name.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        Some(param) if !param.is_empty() => format!(":{}", param),
        _ => name.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_static() {
        assert_eq!(classify_segment("about"), PatternSegmentType::Static("about"));
    }

    #[test]
    fn test_classify_bracketed() {
        assert_eq!(classify_segment("[id]"), PatternSegmentType::Dynamic("id"));
    }

    #[test]
    fn test_classify_colon() {
        assert_eq!(classify_segment(":id"), PatternSegmentType::Dynamic("id"));
    }

    #[test]
    fn test_classify_degenerate_markers_are_static() {
        assert_eq!(classify_segment("[]"), PatternSegmentType::Static("[]"));
        assert_eq!(classify_segment(":"), PatternSegmentType::Static(":"));
        assert_eq!(classify_segment("[id"), PatternSegmentType::Static("[id"));
    }

    #[test]
    fn test_to_pattern_segment() {
        assert_eq!(to_pattern_segment("[userId]"), ":userId");
        assert_eq!(to_pattern_segment("[]"), "[]");
        assert_eq!(to_pattern_segment("settings"), "settings");
    }
}
