//! Shared build constants: paths, dev-server address, vendor modules, and
//! file matchers.
//!
//! Every field has a default, so a project with no `loadout.toml` resolves
//! with the stock layout. Loading layers three sources, later wins:
//! built-in defaults, then `loadout.toml` in the project root, then
//! `LOADOUT_*` environment variables.

use std::path::{Path, PathBuf};

use figment::providers::{Env, Format as _, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Settings file searched for in the project root.
pub const SETTINGS_FILE: &str = "loadout.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Project root; entry paths and the output directory resolve under it.
    #[serde(default = "default_app_path")]
    pub app_path: PathBuf,

    /// Output directory name, joined onto `app_path`.
    #[serde(default = "default_build_dir")]
    pub build_dir: PathBuf,

    #[serde(default = "default_dev_host")]
    pub dev_host: String,

    #[serde(default = "default_dev_port")]
    pub dev_port: u16,

    /// Public URL assets are served from in production.
    #[serde(default = "default_public_path")]
    pub public_path: String,

    /// Framework/runtime modules split into the vendor bundle.
    #[serde(default = "default_vendor_modules")]
    pub vendor_modules: Vec<String>,

    /// Module identifier of the hot-runtime client bootstrap.
    #[serde(default = "default_hot_bootstrap")]
    pub hot_bootstrap: String,

    /// Module identifier of the dev-server client bootstrap; the dev-server
    /// URL is appended as a query when it is injected.
    #[serde(default = "default_dev_client_bootstrap")]
    pub dev_client_bootstrap: String,

    /// Query string applied to the css step of the stylesheet chain.
    #[serde(default = "default_css_modules_query")]
    pub css_modules_query: String,

    #[serde(default)]
    pub matchers: Matchers,
}

/// Regular expressions deciding which transform rule claims a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchers {
    #[serde(default = "default_script_matcher")]
    pub script: String,

    #[serde(default = "default_style_matcher")]
    pub style: String,

    #[serde(default = "default_json_matcher")]
    pub json: String,

    #[serde(default = "default_font_matcher")]
    pub font: String,

    /// Server-only API modules stubbed out of the client bundle.
    #[serde(default = "default_api_stub_matcher")]
    pub api_stub: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_path: default_app_path(),
            build_dir: default_build_dir(),
            dev_host: default_dev_host(),
            dev_port: default_dev_port(),
            public_path: default_public_path(),
            vendor_modules: default_vendor_modules(),
            hot_bootstrap: default_hot_bootstrap(),
            dev_client_bootstrap: default_dev_client_bootstrap(),
            css_modules_query: default_css_modules_query(),
            matchers: Matchers::default(),
        }
    }
}

impl Default for Matchers {
    fn default() -> Self {
        Self {
            script: default_script_matcher(),
            style: default_style_matcher(),
            json: default_json_matcher(),
            font: default_font_matcher(),
            api_stub: default_api_stub_matcher(),
        }
    }
}

impl Settings {
    /// Stock settings rooted at `root` instead of the current directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            app_path: root.into(),
            ..Self::default()
        }
    }

    /// Load settings for a project rooted at `root`.
    ///
    /// Priority: `LOADOUT_*` environment variables > `loadout.toml` >
    /// built-in defaults. The settings file is optional.
    pub fn load(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let settings: Settings = Figment::from(Serialized::defaults(Settings::with_root(root)))
            .merge(Toml::file(root.join(SETTINGS_FILE)))
            .merge(Env::prefixed("LOADOUT_"))
            .extract()
            .map_err(|e| ConfigError::InvalidSettings(e.to_string()))?;

        tracing::debug!(root = %root.display(), "loaded build settings");
        Ok(settings)
    }

    /// `http://{host}:{port}/` — where the dev server serves assets from.
    pub fn dev_server_url(&self) -> String {
        format!("http://{}:{}/", self.dev_host, self.dev_port)
    }
}

fn default_app_path() -> PathBuf {
    PathBuf::from(".")
}

fn default_build_dir() -> PathBuf {
    PathBuf::from(".build")
}

fn default_dev_host() -> String {
    "localhost".into()
}

fn default_dev_port() -> u16 {
    8081
}

fn default_public_path() -> String {
    "/assets/".into()
}

fn default_vendor_modules() -> Vec<String> {
    vec![
        "react".into(),
        "react-dom".into(),
        "react-router".into(),
        "loadout/runtime".into(),
    ]
}

fn default_hot_bootstrap() -> String {
    "loadout/hot/dev-server".into()
}

fn default_dev_client_bootstrap() -> String {
    "loadout/dev-server/client".into()
}

fn default_css_modules_query() -> String {
    "modules&importLoaders=1&localIdentName=[name]__[local]___[hash:base64:5]".into()
}

fn default_script_matcher() -> String {
    r"\.js$".into()
}

fn default_style_matcher() -> String {
    r"\.css$".into()
}

fn default_json_matcher() -> String {
    r"\.json$".into()
}

fn default_font_matcher() -> String {
    r"\.(otf|eot|svg|ttf|woff|woff2)(\?.*)?$".into()
}

fn default_api_stub_matcher() -> String {
    "modules/api/".into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_root_only_changes_app_path() {
        let settings = Settings::with_root("/srv/app");
        assert_eq!(settings.app_path, PathBuf::from("/srv/app"));
        assert_eq!(settings.build_dir, Settings::default().build_dir);
        assert_eq!(settings.dev_port, Settings::default().dev_port);
    }

    #[test]
    fn dev_server_url_formats_host_and_port() {
        let mut settings = Settings::default();
        settings.dev_host = "0.0.0.0".into();
        settings.dev_port = 9000;
        assert_eq!(settings.dev_server_url(), "http://0.0.0.0:9000/");
    }

    #[test]
    fn vendor_defaults_include_framework_runtime() {
        let settings = Settings::default();
        assert!(settings
            .vendor_modules
            .contains(&"loadout/runtime".to_string()));
    }
}
