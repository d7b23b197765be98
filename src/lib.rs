#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod entrypoints;
pub mod error;
pub mod helper;
pub mod manifest;
pub mod renderer;

pub use config::EncoreConfig;
pub use entrypoints::{EntryBundle, Entrypoints};
pub use error::ManifestLoadError;
pub use helper::{AssetHelper, AssetPaths};
pub use manifest::AssetManifest;
pub use renderer::{HtmlTagRenderer, LinkOptions, ScriptOptions, TagRenderer};
