//! The resolved build configuration record handed to the bundler engine.

mod dev;
mod plugins;
mod rules;
mod types;

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub use dev::{DevServerOptions, StatsOptions};
pub use plugins::PluginSpec;
pub use rules::{first_match, Transform, TransformRule, TransformStep};
pub use types::SourceMapMode;

use crate::error::{ConfigError, Result};

/// Everything the bundler engine needs for one client build.
///
/// Assembled once per invocation and never mutated afterwards; each mode
/// builds its full record in one piece. `entry` preserves insertion order
/// and `rules`/`plugins` order is part of the contract with the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    pub source_map: SourceMapMode,

    /// Bundle name to ordered module identifiers.
    pub entry: IndexMap<String, Vec<String>>,

    pub output: OutputOptions,

    /// First matching rule claims the file; order is declaration order.
    pub rules: Vec<TransformRule>,

    /// Activation order matters; see [`PluginSpec`] for the contract.
    pub plugins: Vec<PluginSpec>,

    /// Present only for development builds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_server: Option<DevServerOptions>,
}

/// Where output lands and how files are named.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputOptions {
    pub path: PathBuf,

    /// `[hash:8]` in production, `[name].js` in development.
    pub filename: String,

    /// Fixed production URL, or the dev-server URL otherwise.
    pub public_path: String,
}

impl BuildConfig {
    /// Convert to `serde_json::Value` — the wire shape the engine consumes.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidSettings(e.to_string()))
    }
}
