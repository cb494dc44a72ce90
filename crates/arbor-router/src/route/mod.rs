/// Route module for file-tree routing
///
/// Pure functional components for turning node names into route patterns.

pub mod parser;
pub mod pattern;

pub use parser::{calculate_priority, pattern_priority, resolve_folder_prefix, resolve_route_path};
pub use pattern::{classify_segment, to_pattern_segment, PatternSegmentType};
