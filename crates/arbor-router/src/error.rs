// File: src/error.rs
// Purpose: Errors raised while discovering and compiling the route tree

use std::path::PathBuf;
use thiserror::Error;

/// Failure while turning a node tree into a route table
#[derive(Debug, Error)]
pub enum CompileError {
    /// A page leaf has no component export bound to it
    #[error("no component export for page `{path}`")]
    MissingExport { path: String },

    /// A page leaf is bound to a layout instead of a component
    #[error("page `{path}` exports a layout, expected a component")]
    ExportMismatch { path: String },

    /// The pages directory could not be walked
    #[error("failed to discover pages under {path:?}")]
    Discovery {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },
}
