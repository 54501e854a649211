//! Project manifest reader.
//!
//! The client entry point is declared in the project's `package.json` under
//! the `loadout.client` field, the same place the rest of the toolchain
//! keeps its per-project switches.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Manifest field holding loadout's project configuration.
pub const MANIFEST_FIELD: &str = "loadout";

const MANIFEST_FILE: &str = "package.json";
const CLIENT_FIELD: &str = "loadout.client";

/// The parts of `package.json` the resolver cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
    client: PathBuf,
}

impl Manifest {
    /// Read `package.json` from the project root and extract the declared
    /// client entry.
    pub fn load(app_path: impl AsRef<Path>) -> Result<Self> {
        let path = app_path.as_ref().join(MANIFEST_FILE);
        let content = fs::read_to_string(&path)
            .map_err(|_| ConfigError::ManifestNotFound { path: path.clone() })?;

        let parsed: Value =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidManifest {
                path: path.clone(),
                message: e.to_string(),
            })?;

        let client = parsed
            .get(MANIFEST_FIELD)
            .and_then(|v| v.get("client"))
            .and_then(Value::as_str)
            .ok_or(ConfigError::MissingClientEntry {
                path: path.clone(),
                field: CLIENT_FIELD,
            })?;

        Ok(Self {
            path,
            client: PathBuf::from(client),
        })
    }

    /// The declared client entry, relative to the project root.
    pub fn client(&self) -> &Path {
        &self.client
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
