//! The project's transform-configuration file.
//!
//! `.transformrc` declares the named presets the script transform applies.
//! We can't put the fast-refresh preset in the file itself because it is
//! only wanted for hot development builds, never for refresh, none, or
//! production. So the resolver reads the declared presets and merges the
//! fast-refresh preset on top when hot mode asks for it.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Transform-configuration file read from the project root.
pub const PRESET_FILE: &str = ".transformrc";

/// Preset enabling in-place component state patching.
pub const FAST_REFRESH_PRESET: &str = "react-refresh";

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PresetFile {
    #[serde(default)]
    pub presets: Vec<String>,
}

impl PresetFile {
    /// Read `.transformrc` from the project root.
    ///
    /// This is only called for hot development builds; a missing or
    /// malformed file aborts resolution rather than silently building
    /// without fast refresh.
    pub fn load(app_path: impl AsRef<Path>) -> Result<Self> {
        let path = app_path.as_ref().join(PRESET_FILE);
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|source| ConfigError::PresetFileUnreadable {
                path: PathBuf::from(path),
                source,
            })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::InvalidPresetFile {
            path: PathBuf::from(path),
            source,
        })
    }

    /// Declared presets plus the fast-refresh preset, declared order kept.
    pub fn with_fast_refresh(self) -> Vec<String> {
        let mut presets = self.presets;
        if !presets.iter().any(|p| p == FAST_REFRESH_PRESET) {
            presets.push(FAST_REFRESH_PRESET.to_string());
        }
        presets
    }
}
