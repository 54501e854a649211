//! Dev-server options carried inside a development build config.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    /// Whether the server applies hot patches instead of full reloads.
    pub hot: bool,

    /// The server only serves bundle output, never a content directory.
    pub serve_static: bool,

    pub quiet: bool,

    pub no_info: bool,

    pub stats: StatsOptions,
}

/// Which fields the dev server prints per rebuild.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOptions {
    pub assets: bool,
    pub version: bool,
    pub hash: bool,
    pub timings: bool,
    pub chunks: bool,
    pub chunk_modules: bool,
}

impl DevServerOptions {
    pub fn new(hot: bool) -> Self {
        Self {
            hot,
            serve_static: false,
            quiet: false,
            no_info: false,
            stats: StatsOptions::default(),
        }
    }
}

impl Default for StatsOptions {
    fn default() -> Self {
        Self {
            assets: true,
            version: false,
            hash: false,
            timings: false,
            chunks: false,
            chunk_modules: true,
        }
    }
}
