//! The `manifest.json` store mapping logical asset paths to hashed paths.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::ManifestLoadError;

/// Immutable map from logical (pre-build) asset paths to the fingerprinted
/// (post-build) physical paths, as written by the build tool.
#[derive(Debug, Clone, Default)]
pub struct AssetManifest {
  assets: BTreeMap<String, String>,
}

impl AssetManifest {
  /// Build a manifest from an in-memory map.
  pub fn new(assets: BTreeMap<String, String>) -> Self {
    Self { assets }
  }

  /// Load and parse a `manifest.json` file.
  ///
  /// The document root must be a flat JSON object with string values;
  /// anything else is rejected as [`ManifestLoadError::InvalidFormat`].
  pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestLoadError> {
    let path = path.as_ref();
    let contents = match fs::read_to_string(path) {
      Ok(contents) => contents,
      Err(err) if err.kind() == ErrorKind::NotFound => {
        return Err(ManifestLoadError::NotFound {
          path: path.to_path_buf(),
        });
      }
      Err(err) => {
        return Err(ManifestLoadError::Io {
          path: path.to_path_buf(),
          source: err,
        });
      }
    };

    let assets: BTreeMap<String, String> =
      serde_json::from_str(&contents).map_err(|err| ManifestLoadError::InvalidFormat {
        path: path.to_path_buf(),
        source: err,
      })?;
    debug!(
      "loaded {} manifest entries from {}",
      assets.len(),
      path.display()
    );
    Ok(Self::new(assets))
  }

  /// Resolve a logical asset path to its physical path.
  ///
  /// Paths absent from the manifest are returned unchanged so that
  /// templates keep working against a stale or partial build.
  pub fn resolve<'a>(&'a self, logical: &'a str) -> &'a str {
    self
      .assets
      .get(logical)
      .map(String::as_str)
      .unwrap_or(logical)
  }

  /// Returns `true` when the manifest has a mapping for `logical`.
  pub fn contains(&self, logical: &str) -> bool {
    self.assets.contains_key(logical)
  }

  /// Number of mappings in the manifest.
  pub fn len(&self) -> usize {
    self.assets.len()
  }

  /// Returns `true` when the manifest holds no mappings.
  pub fn is_empty(&self) -> bool {
    self.assets.is_empty()
  }
}
