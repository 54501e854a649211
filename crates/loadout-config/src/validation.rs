//! Settings validation.
//!
//! Schema checks (`validate_settings`) run on every resolution; filesystem
//! checks (`validate_project`) are for CLI preflight, where reporting a
//! missing manifest before the engine starts beats a mid-build abort.

use regex::Regex;

use crate::error::{ConfigError, Result};
use crate::manifest::Manifest;
use crate::settings::Settings;

/// Check field values without touching the filesystem.
pub fn validate_settings(settings: &Settings) -> Result<()> {
    if settings.app_path.as_os_str().is_empty() {
        return Err(ConfigError::settings("app_path is empty"));
    }

    if settings.dev_port == 0 {
        return Err(ConfigError::settings_with_hint(
            "dev_port cannot be 0",
            "Pick the port your dev server listens on",
        ));
    }

    if settings.public_path.trim().is_empty() {
        return Err(ConfigError::settings("public_path is empty"));
    }

    if settings.vendor_modules.is_empty() {
        return Err(ConfigError::settings_with_hint(
            "vendor_modules is empty",
            "List the framework modules to split into the vendor bundle",
        ));
    }
    for module in &settings.vendor_modules {
        if module.trim().is_empty() {
            return Err(ConfigError::settings("vendor_modules contains an empty name"));
        }
    }

    if settings.hot_bootstrap.trim().is_empty() {
        return Err(ConfigError::settings("hot_bootstrap is empty"));
    }
    if settings.dev_client_bootstrap.trim().is_empty() {
        return Err(ConfigError::settings("dev_client_bootstrap is empty"));
    }

    for pattern in [
        &settings.matchers.script,
        &settings.matchers.style,
        &settings.matchers.json,
        &settings.matchers.font,
        &settings.matchers.api_stub,
    ] {
        compile(pattern)?;
    }

    Ok(())
}

/// Schema checks plus the filesystem reads a resolution will perform.
pub fn validate_project(settings: &Settings) -> Result<()> {
    validate_settings(settings)?;
    Manifest::load(&settings.app_path)?;
    Ok(())
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidMatcher {
        pattern: pattern.to_string(),
        source,
    })
}
