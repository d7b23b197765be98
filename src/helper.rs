//! View-facing facade tying the manifest stores and the tag renderer together.

use std::path::Path;

use crate::config::EncoreConfig;
use crate::entrypoints::Entrypoints;
use crate::error::ManifestLoadError;
use crate::manifest::AssetManifest;
use crate::renderer::{LinkOptions, ScriptOptions, TagRenderer};

/// One or many logical asset paths.
///
/// Render operations accept either a single path or a sequence; both are
/// normalised to a sequence before resolution so the renderer is invoked
/// exactly once per call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetPaths {
  /// A single logical path.
  Single(String),
  /// An ordered sequence of logical paths.
  Many(Vec<String>),
}

impl AssetPaths {
  fn into_vec(self) -> Vec<String> {
    match self {
      Self::Single(path) => vec![path],
      Self::Many(paths) => paths,
    }
  }
}

impl From<&str> for AssetPaths {
  fn from(path: &str) -> Self {
    Self::Single(path.to_string())
  }
}

impl From<String> for AssetPaths {
  fn from(path: String) -> Self {
    Self::Single(path)
  }
}

impl From<Vec<String>> for AssetPaths {
  fn from(paths: Vec<String>) -> Self {
    Self::Many(paths)
  }
}

impl From<&[&str]> for AssetPaths {
  fn from(paths: &[&str]) -> Self {
    Self::Many(paths.iter().map(|path| path.to_string()).collect())
  }
}

impl<const N: usize> From<[&str; N]> for AssetPaths {
  fn from(paths: [&str; N]) -> Self {
    Self::Many(paths.iter().map(|path| path.to_string()).collect())
  }
}

/// Per-render-context helper resolving logical asset names into markup.
///
/// Both stores are loaded eagerly when the helper is constructed and stay
/// immutable for its lifetime. All lookups are total; only construction
/// can fail.
#[derive(Debug)]
pub struct AssetHelper<R> {
  entrypoints: Entrypoints,
  manifest: AssetManifest,
  renderer: R,
}

fn entry_link_defaults() -> LinkOptions {
  LinkOptions {
    inline: Some(false),
  }
}

fn entry_script_defaults() -> ScriptOptions {
  ScriptOptions {
    defer: Some(true),
    inline: Some(false),
  }
}

impl<R: TagRenderer> AssetHelper<R> {
  /// Build a helper from already-loaded stores.
  pub fn new(entrypoints: Entrypoints, manifest: AssetManifest, renderer: R) -> Self {
    Self {
      entrypoints,
      manifest,
      renderer,
    }
  }

  /// Load both manifest files from the locations the configuration
  /// describes and build a helper around them.
  ///
  /// The first file that is missing, unreadable or malformed aborts
  /// construction with a [`ManifestLoadError`].
  pub fn load(
    config: &EncoreConfig,
    webroot: &Path,
    renderer: R,
  ) -> Result<Self, ManifestLoadError> {
    let entrypoints = Entrypoints::load(config.entrypoints_file(webroot))?;
    let manifest = AssetManifest::load(config.manifest_file(webroot))?;
    Ok(Self::new(entrypoints, manifest, renderer))
  }

  /// Resolve a logical asset path via the manifest.
  ///
  /// Unknown paths are returned unchanged.
  pub fn resolve_asset<'a>(&'a self, path: &'a str) -> &'a str {
    self.manifest.resolve(path)
  }

  /// Ordered stylesheet paths for a named entry; empty when absent.
  pub fn entry_css(&self, entry: &str) -> &[String] {
    self.entrypoints.entry_css(entry)
  }

  /// Ordered script paths for a named entry; empty when absent.
  pub fn entry_js(&self, entry: &str) -> &[String] {
    self.entrypoints.entry_js(entry)
  }

  /// Render `<link>` tags for every stylesheet of a named entry.
  ///
  /// Returns the empty string without consulting the renderer when the
  /// entry is unknown or has no stylesheets. Caller options are merged
  /// over the `{inline: false}` defaults.
  pub fn entry_link_tags(&self, entry: &str, options: LinkOptions) -> String {
    let css = self.entrypoints.entry_css(entry);
    if css.is_empty() {
      return String::new();
    }
    let options = options.merged_over(&entry_link_defaults());
    self.renderer.css(css, None, &options)
  }

  /// Render `<script>` tags for every script of a named entry.
  ///
  /// Same shape as [`entry_link_tags`], with caller options merged over
  /// the `{defer: true, inline: false}` defaults.
  ///
  /// [`entry_link_tags`]: AssetHelper::entry_link_tags
  pub fn entry_script_tags(&self, entry: &str, options: ScriptOptions) -> String {
    let js = self.entrypoints.entry_js(entry);
    if js.is_empty() {
      return String::new();
    }
    let options = options.merged_over(&entry_script_defaults());
    self.renderer.script(js, &options)
  }

  /// Render an `<img>` tag for an asset resolved via the manifest.
  pub fn image(&self, path: &str, attrs: &[(&str, &str)]) -> String {
    self.renderer.image(self.manifest.resolve(path), attrs)
  }

  /// Render `<link>` tags for one or many manifest-resolved stylesheets.
  ///
  /// Options are handed to the renderer as given; the entry defaults do
  /// not apply here.
  pub fn css(&self, paths: impl Into<AssetPaths>, options: LinkOptions) -> String {
    let resolved = self.resolve_all(paths.into());
    self.renderer.css(&resolved, None, &options)
  }

  /// Render `<script>` tags for one or many manifest-resolved scripts.
  pub fn script(&self, paths: impl Into<AssetPaths>, options: ScriptOptions) -> String {
    let resolved = self.resolve_all(paths.into());
    self.renderer.script(&resolved, &options)
  }

  /// The loaded entrypoints store.
  pub fn entrypoints(&self) -> &Entrypoints {
    &self.entrypoints
  }

  /// The loaded manifest store.
  pub fn manifest(&self) -> &AssetManifest {
    &self.manifest
  }

  fn resolve_all(&self, paths: AssetPaths) -> Vec<String> {
    paths
      .into_vec()
      .into_iter()
      .map(|path| self.manifest.resolve(&path).to_string())
      .collect()
  }
}
