//! Configuration - import policy, anchor layout and output preferences
//!
//! Layers, later ones winning field by field:
//! 1. built-in defaults
//! 2. user config (`config.yaml` in the platform config directory)
//! 3. `.dimchain.yaml` in the working directory
//!
//! Command-line flags are applied on top by the CLI.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::core::layout::AnchorLayout;

/// File name of the per-directory config
pub const LOCAL_CONFIG_FILE: &str = ".dimchain.yaml";

/// How [`ChainStore::import_project`](crate::core::ChainStore::import_project)
/// treats fields it cannot use
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImportPolicy {
    /// Absent or malformed top-level fields fall back to empty values,
    /// anchors are padded or truncated to match the dimensions
    #[default]
    Lenient,
    /// Any malformed field or anchor count mismatch rejects the file
    Strict,
}

impl std::fmt::Display for ImportPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportPolicy::Lenient => write!(f, "lenient"),
            ImportPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Import policy for project files
    pub import_policy: ImportPolicy,

    /// Placement of synthesized anchors
    pub layout: AnchorLayout,

    /// Indent exported project files
    pub pretty: bool,

    /// Decimals shown for millimeter values
    pub decimals: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            import_policy: ImportPolicy::default(),
            layout: AnchorLayout::default(),
            pretty: false,
            decimals: 2,
        }
    }
}

/// A partially specified config file; absent keys keep the lower layer
#[derive(Debug, Default, Deserialize)]
struct ConfigLayer {
    import_policy: Option<ImportPolicy>,
    layout: Option<AnchorLayout>,
    pretty: Option<bool>,
    decimals: Option<usize>,
}

impl Config {
    /// Load the layered configuration for the current directory
    pub fn load() -> Self {
        let mut config = Config::default();

        if let Some(path) = Self::user_config_path() {
            config.merge_file(&path);
        }
        config.merge_file(Path::new(LOCAL_CONFIG_FILE));

        config
    }

    /// Location of the user-level config file
    pub fn user_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "dimchain")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge a YAML config file over this config
    ///
    /// Missing files are ignored; unreadable or invalid ones are logged
    /// and skipped.
    pub fn merge_file(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("cannot read config {}: {}", path.display(), e);
                return;
            }
        };

        match self.merge_str(&content) {
            Ok(()) => log::debug!("loaded config from {}", path.display()),
            Err(e) => log::warn!("ignoring invalid config {}: {}", path.display(), e),
        }
    }

    /// Merge YAML config text over this config
    pub fn merge_str(&mut self, content: &str) -> Result<(), serde_yml::Error> {
        let layer: Option<ConfigLayer> = serde_yml::from_str(content)?;
        let Some(layer) = layer else {
            return Ok(());
        };

        if let Some(policy) = layer.import_policy {
            self.import_policy = policy;
        }
        if let Some(layout) = layer.layout {
            self.layout = layout;
        }
        if let Some(pretty) = layer.pretty {
            self.pretty = pretty;
        }
        if let Some(decimals) = layer.decimals {
            self.decimals = decimals;
        }
        Ok(())
    }
}
