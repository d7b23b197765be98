//! Configuration describing where the build tool wrote its manifest files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "encore.config.json";

/// Overridable locations of the two build manifest files.
///
/// Paths are interpreted relative to the web root handed to the accessor
/// methods; absolute settings are used as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EncoreConfig {
    /// Location of `entrypoints.json` relative to the web root.
    pub entrypoints_path: String,
    /// Location of `manifest.json` relative to the web root.
    pub manifest_path: String,
}

impl Default for EncoreConfig {
    fn default() -> Self {
        Self {
            entrypoints_path: "build/entrypoints.json".into(),
            manifest_path: "build/manifest.json".into(),
        }
    }
}

impl EncoreConfig {
    /// Attempt to load configuration from `encore.config.json` under the
    /// given web root, falling back to defaults when the file is missing
    /// or fails to parse.
    pub fn discover(webroot: &Path) -> Self {
        let candidate = webroot.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Full path to `entrypoints.json` under the web root.
    pub fn entrypoints_file(&self, webroot: &Path) -> PathBuf {
        webroot.join(&self.entrypoints_path)
    }

    /// Full path to `manifest.json` under the web root.
    pub fn manifest_file(&self, webroot: &Path) -> PathBuf {
        webroot.join(&self.manifest_path)
    }
}
