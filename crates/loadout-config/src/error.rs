//! Error types for configuration loading and resolution.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    // Environment flag errors (strict parsing only; `BuildEnv::from_env`
    // keeps the historical silent fallback)
    #[error("unrecognized {variable} value: {value:?}")]
    UnknownMode {
        variable: &'static str,
        value: String,
    },

    // Settings loading/validation errors
    #[error("invalid settings: {0}")]
    InvalidSettings(String),

    #[error("settings validation failed: {message}")]
    SettingsValidation {
        message: String,
        hint: Option<String>,
    },

    #[error("invalid file matcher {pattern:?}: {source}")]
    InvalidMatcher {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    // Project manifest errors
    #[error("manifest not found: {}", .path.display())]
    ManifestNotFound { path: PathBuf },

    #[error("invalid manifest {}: {message}", .path.display())]
    InvalidManifest { path: PathBuf, message: String },

    #[error("manifest {} declares no client entry (missing `{field}`)", .path.display())]
    MissingClientEntry {
        path: PathBuf,
        field: &'static str,
    },

    // Transform preset file errors (hot development only)
    #[error("transform preset file not readable: {}", .path.display())]
    PresetFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid transform preset file {}: {source}", .path.display())]
    InvalidPresetFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    pub(crate) fn settings(message: impl Into<String>) -> Self {
        ConfigError::SettingsValidation {
            message: message.into(),
            hint: None,
        }
    }

    pub(crate) fn settings_with_hint(
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        ConfigError::SettingsValidation {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }
}
