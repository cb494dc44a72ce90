// File: src/config.rs
// Purpose: Configuration parsing from arbor.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Router configuration file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Directory containing page sources (default: "pages")
    #[serde(default = "default_pages_dir")]
    pub pages_dir: String,

    /// Extension of page source files (default: "rs")
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Leaf name that maps to its folder's own path (default: "page")
    #[serde(default = "default_page_marker")]
    pub page_marker: String,

    /// Leaf name that declares a folder layout (default: "layout")
    #[serde(default = "default_layout_marker")]
    pub layout_marker: String,

    /// Whether literal segments match case-insensitively (default: false)
    #[serde(default = "default_false")]
    pub case_insensitive: bool,

    /// Where the not-found view sends the user (default: "/")
    #[serde(default = "default_home_path")]
    pub home_path: String,
}

fn default_pages_dir() -> String {
    "pages".to_string()
}

fn default_extension() -> String {
    "rs".to_string()
}

fn default_page_marker() -> String {
    "page".to_string()
}

fn default_layout_marker() -> String {
    "layout".to_string()
}

fn default_home_path() -> String {
    "/".to_string()
}

fn default_false() -> bool {
    false
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            pages_dir: default_pages_dir(),
            extension: default_extension(),
            page_marker: default_page_marker(),
            layout_marker: default_layout_marker(),
            case_insensitive: default_false(),
            home_path: default_home_path(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// A missing or empty file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from default path (./arbor.toml)
    pub fn load_default() -> Result<Self> {
        Self::load("arbor.toml")
    }
}
