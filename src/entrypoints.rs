//! The `entrypoints.json` store mapping entry names to their asset lists.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::error::ManifestLoadError;

/// Ordered CSS and JS files making up one named entry.
///
/// Either list may be absent in the JSON; newer build tool versions attach
/// additional per-entry keys (integrity hashes etc.) which are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryBundle {
  /// Stylesheet paths in the order the build tool emitted them.
  #[serde(default)]
  pub css: Vec<String>,
  /// Script paths in the order the build tool emitted them.
  #[serde(default)]
  pub js: Vec<String>,
}

/// On-disk layout of `entrypoints.json`.
#[derive(Debug, Deserialize)]
struct EntrypointsFile {
  entrypoints: BTreeMap<String, EntryBundle>,
}

/// Immutable map from entry name to its [`EntryBundle`].
#[derive(Debug, Clone, Default)]
pub struct Entrypoints {
  entries: BTreeMap<String, EntryBundle>,
}

impl Entrypoints {
  /// Build the store from an in-memory map.
  pub fn new(entries: BTreeMap<String, EntryBundle>) -> Self {
    Self { entries }
  }

  /// Load and parse an `entrypoints.json` file.
  ///
  /// The document must carry an `entrypoints` top-level key; a JSON object
  /// without it is rejected as [`ManifestLoadError::InvalidFormat`].
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

    let file: EntrypointsFile =
      serde_json::from_str(&contents).map_err(|err| ManifestLoadError::InvalidFormat {
        path: path.to_path_buf(),
        source: err,
      })?;
    debug!(
      "loaded {} entrypoints from {}",
      file.entrypoints.len(),
      path.display()
    );
    Ok(Self::new(file.entrypoints))
  }

  /// Look up the bundle for a named entry.
  pub fn get(&self, name: &str) -> Option<&EntryBundle> {
    self.entries.get(name)
  }

  /// Ordered stylesheet paths for an entry; empty when the entry is absent.
  pub fn entry_css(&self, name: &str) -> &[String] {
    self.get(name).map(|bundle| bundle.css.as_slice()).unwrap_or(&[])
  }

  /// Ordered script paths for an entry; empty when the entry is absent.
  pub fn entry_js(&self, name: &str) -> &[String] {
    self.get(name).map(|bundle| bundle.js.as_slice()).unwrap_or(&[])
  }

  /// Number of named entries.
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Returns `true` when no entries were declared.
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  fn write_entrypoints(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("entrypoints.json");
    fs::write(&path, contents).expect("failed to write entrypoints fixture");
    (temp, path)
  }

  #[test]
  fn returns_ordered_lists_for_known_entries() {
    let (_temp, path) = write_entrypoints(
      r#"{"entrypoints": {"app": {"css": ["b.css", "a.css"], "js": ["a.js"]}}}"#,
    );
    let entrypoints = Entrypoints::load(&path).unwrap();

    assert_eq!(entrypoints.entry_css("app"), ["b.css", "a.css"]);
    assert_eq!(entrypoints.entry_js("app"), ["a.js"]);
    assert_eq!(entrypoints.len(), 1);
  }

  #[test]
  fn returns_empty_lists_for_unknown_entries() {
    let (_temp, path) =
      write_entrypoints(r#"{"entrypoints": {"app": {"css": ["a.css"], "js": ["a.js"]}}}"#);
    let entrypoints = Entrypoints::load(&path).unwrap();

    assert!(entrypoints.entry_css("other").is_empty());
    assert!(entrypoints.entry_js("other").is_empty());
    assert!(entrypoints.get("other").is_none());
  }

  #[test]
  fn missing_css_or_js_lists_default_to_empty() {
    let (_temp, path) = write_entrypoints(r#"{"entrypoints": {"app": {"js": ["a.js"]}}}"#);
    let entrypoints = Entrypoints::load(&path).unwrap();

    assert!(entrypoints.entry_css("app").is_empty());
    assert_eq!(entrypoints.entry_js("app"), ["a.js"]);
  }

  #[test]
  fn extra_per_entry_keys_are_ignored() {
    let (_temp, path) = write_entrypoints(
      r#"{"entrypoints": {"app": {"js": ["a.js"], "integrity": {"a.js": "sha384-x"}}}}"#,
    );
    let entrypoints = Entrypoints::load(&path).unwrap();

    assert_eq!(entrypoints.entry_js("app"), ["a.js"]);
  }

  #[test]
  fn missing_file_is_not_found() {
    let temp = tempdir().unwrap();
    let err = Entrypoints::load(temp.path().join("entrypoints.json")).unwrap_err();

    assert!(matches!(err, ManifestLoadError::NotFound { .. }));
  }

  #[test]
  fn unreadable_file_is_an_io_error() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("entrypoints.json");
    fs::create_dir(&path).unwrap();

    let err = Entrypoints::load(&path).unwrap_err();

    assert!(matches!(err, ManifestLoadError::Io { .. }));
  }

  #[test]
  fn missing_entrypoints_key_is_invalid_format() {
    let (_temp, path) = write_entrypoints(r#"{"entries": {}}"#);
    let err = Entrypoints::load(&path).unwrap_err();

    assert!(matches!(err, ManifestLoadError::InvalidFormat { .. }));
  }

  #[test]
  fn malformed_json_is_invalid_format() {
    let (_temp, path) = write_entrypoints("not json");
    let err = Entrypoints::load(&path).unwrap_err();

    assert!(matches!(err, ManifestLoadError::InvalidFormat { .. }));
  }
}
