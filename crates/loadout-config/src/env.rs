//! Build environment flags.
//!
//! The two flags are an explicit [`BuildEnv`] value handed to the resolver,
//! so mode selection is an injectable, testable input rather than ambient
//! global state. `from_env` remains for callers that want the flags read
//! straight off the process environment.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Environment variable selecting production vs. development output.
pub const BUILD_MODE_VAR: &str = "BUILD_MODE";

/// Environment variable selecting the reload strategy.
pub const RELOAD_MODE_VAR: &str = "RELOAD_MODE";

/// Whether the build targets production or local development.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Hashed filenames, extracted stylesheets, minified output.
    Production,
    /// Fast rebuilds, inline stylesheets, dev-server plumbing.
    #[default]
    Development,
}

impl BuildMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Production => "production",
            BuildMode::Development => "development",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "production" => Ok(BuildMode::Production),
            "development" => Ok(BuildMode::Development),
            other => Err(ConfigError::UnknownMode {
                variable: BUILD_MODE_VAR,
                value: other.to_string(),
            }),
        }
    }
}

/// Reload strategy for development builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReloadMode {
    /// Patch running application state in place without a page reload.
    Hot,
    /// Full page reload on change, no state patching.
    Refresh,
    /// No reload plumbing at all.
    #[default]
    None,
}

impl ReloadMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReloadMode::Hot => "hot",
            ReloadMode::Refresh => "refresh",
            ReloadMode::None => "none",
        }
    }
}

impl fmt::Display for ReloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReloadMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hot" => Ok(ReloadMode::Hot),
            "refresh" => Ok(ReloadMode::Refresh),
            "none" => Ok(ReloadMode::None),
            other => Err(ConfigError::UnknownMode {
                variable: RELOAD_MODE_VAR,
                value: other.to_string(),
            }),
        }
    }
}

/// The two flags every resolution decision branches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BuildEnv {
    pub mode: BuildMode,
    pub reload: ReloadMode,
}

impl BuildEnv {
    pub fn new(mode: BuildMode, reload: ReloadMode) -> Self {
        Self { mode, reload }
    }

    /// Read `BUILD_MODE` and `RELOAD_MODE` from the process environment.
    ///
    /// Anything other than the expected literals (including an absent
    /// variable) falls back to development / none without complaint.
    /// Strict callers should parse the variables through [`FromStr`]
    /// instead.
    pub fn from_env() -> Self {
        let mode = match std::env::var(BUILD_MODE_VAR).as_deref() {
            Ok("production") => BuildMode::Production,
            _ => BuildMode::Development,
        };
        let reload = match std::env::var(RELOAD_MODE_VAR).as_deref() {
            Ok("hot") => ReloadMode::Hot,
            Ok("refresh") => ReloadMode::Refresh,
            _ => ReloadMode::None,
        };
        Self { mode, reload }
    }

    pub fn is_production(&self) -> bool {
        self.mode == BuildMode::Production
    }

    /// Hot patching is only wired up outside production builds.
    pub fn is_hot(&self) -> bool {
        !self.is_production() && self.reload == ReloadMode::Hot
    }

    /// Whether the dev-server client bootstrap belongs in the vendor bundle.
    pub fn wants_dev_client(&self) -> bool {
        !self.is_production() && matches!(self.reload, ReloadMode::Hot | ReloadMode::Refresh)
    }
}
