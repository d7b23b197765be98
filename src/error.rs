//! Errors raised while loading build manifests from disk.

use std::path::PathBuf;

/// Failure to load `entrypoints.json` or `manifest.json`.
///
/// Raised only at load time. Every lookup performed after a successful
/// load is total and cannot fail.
#[derive(Debug)]
pub enum ManifestLoadError {
  /// The manifest file does not exist at the expected path.
  NotFound {
    /// Path that was probed.
    path: PathBuf,
  },
  /// The manifest file exists but could not be read.
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The manifest file is not valid JSON or does not have the expected
  /// structure (missing `entrypoints` key, non-object manifest root).
  InvalidFormat {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

impl std::fmt::Display for ManifestLoadError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::NotFound { path } => {
        write!(f, "manifest file not found: {}", path.display())
      }
      Self::Io { path, source } => {
        write!(f, "failed to read {}: {}", path.display(), source)
      }
      Self::InvalidFormat { path, source } => {
        write!(f, "invalid manifest format in {}: {}", path.display(), source)
      }
    }
  }
}

impl std::error::Error for ManifestLoadError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::NotFound { .. } => None,
      Self::Io { source, .. } => Some(source),
      Self::InvalidFormat { source, .. } => Some(source),
    }
  }
}
