//! The build configuration resolver.
//!
//! One synchronous pass from `(BuildEnv, Settings)` to a [`BuildConfig`].
//! Every sub-decision is a pure function of the two environment flags; the
//! only filesystem reads are the project manifest and, for hot development
//! builds, the transform preset file. Each mode assembles its complete
//! record in one place instead of patching a shared partial record, so a
//! `BuildConfig` is never observable half-built.

use std::path::Path;

use tracing::debug;

use crate::config::{
    BuildConfig, DevServerOptions, OutputOptions, PluginSpec, SourceMapMode, Transform,
    TransformRule, TransformStep,
};
use crate::env::BuildEnv;
use crate::error::Result;
use crate::manifest::Manifest;
use crate::presets::PresetFile;
use crate::settings::Settings;
use crate::validation;

/// Entry name for application code.
pub const APP_ENTRY: &str = "app";

/// Entry name for the framework/runtime bundle, split for caching.
pub const VENDOR_ENTRY: &str = "_vendor";

/// Output chunk the vendor entry is split into.
pub const VENDOR_FILENAME: &str = "vendor.js";

const HASHED_FILENAME: &str = "[hash:8]";
const DEV_FILENAME: &str = "[name].js";
const EXTRACTED_STYLES_FILENAME: &str = "styles.[hash:8].css";

pub struct Resolver {
    env: BuildEnv,
    settings: Settings,
}

impl Resolver {
    pub fn new(env: BuildEnv, settings: Settings) -> Self {
        Self { env, settings }
    }

    /// Resolve the full build configuration.
    ///
    /// Reads the client entry from the project manifest; use
    /// [`Resolver::resolve_with_entry`] to supply one directly.
    pub fn resolve(&self) -> Result<BuildConfig> {
        let manifest = Manifest::load(&self.settings.app_path)?;
        self.resolve_with_entry(manifest.client())
    }

    /// Resolve with an explicit client entry (relative to the project root).
    pub fn resolve_with_entry(&self, client: &Path) -> Result<BuildConfig> {
        validation::validate_settings(&self.settings)?;

        debug!(
            mode = %self.env.mode,
            reload = %self.env.reload,
            client = %client.display(),
            "resolving build config"
        );

        if self.env.is_production() {
            Ok(self.production_config(client))
        } else {
            self.development_config(client)
        }
    }

    /// Production: hashed filenames, extracted styles, full optimizer run.
    fn production_config(&self, client: &Path) -> BuildConfig {
        let settings = &self.settings;

        BuildConfig {
            source_map: SourceMapMode::Full,
            entry: self.entries(client),
            output: OutputOptions {
                path: settings.app_path.join(&settings.build_dir),
                filename: HASHED_FILENAME.to_string(),
                public_path: settings.public_path.clone(),
            },
            rules: self.rules(None),
            plugins: vec![
                vendor_split(),
                PluginSpec::ExtractStyles {
                    filename: EXTRACTED_STYLES_FILENAME.to_string(),
                },
                PluginSpec::Dedupe,
                PluginSpec::StableModuleOrder,
                PluginSpec::Minify,
            ],
            dev_server: None,
        }
    }

    /// Development: literal filenames, inline styles, reload plumbing per
    /// the reload flag.
    fn development_config(&self, client: &Path) -> Result<BuildConfig> {
        let settings = &self.settings;

        // The preset file is the one read that can fail mid-resolution;
        // do it before assembling anything.
        let presets = if self.env.is_hot() {
            Some(PresetFile::load(&settings.app_path)?.with_fast_refresh())
        } else {
            None
        };

        let mut plugins = vec![
            vendor_split(),
            PluginSpec::dev_banner(self.env.mode.as_str(), self.env.reload.as_str()),
        ];
        if self.env.is_hot() {
            plugins.push(PluginSpec::HotModuleReplacement);
        }

        Ok(BuildConfig {
            source_map: SourceMapMode::CheapModuleEval,
            entry: self.entries(client),
            output: OutputOptions {
                path: settings.app_path.join(&settings.build_dir),
                filename: DEV_FILENAME.to_string(),
                public_path: settings.dev_server_url(),
            },
            rules: self.rules(presets),
            plugins,
            dev_server: Some(DevServerOptions::new(self.env.is_hot())),
        })
    }

    /// The `app` entry plus the vendor bundle.
    ///
    /// Development prepends bootstraps onto the vendor list: first the
    /// hot-runtime client (hot only), then the dev-server client (hot or
    /// refresh), so when both apply the dev-server client ends up in front.
    fn entries(&self, client: &Path) -> indexmap::IndexMap<String, Vec<String>> {
        let settings = &self.settings;
        let mut vendor = settings.vendor_modules.clone();

        if self.env.is_hot() {
            vendor.insert(0, settings.hot_bootstrap.clone());
        }
        if self.env.wants_dev_client() {
            vendor.insert(
                0,
                format!(
                    "{}?http://{}:{}",
                    settings.dev_client_bootstrap, settings.dev_host, settings.dev_port
                ),
            );
        }

        let mut entry = indexmap::IndexMap::new();
        entry.insert(
            APP_ENTRY.to_string(),
            vec![settings
                .app_path
                .join(client)
                .to_string_lossy()
                .into_owned()],
        );
        entry.insert(VENDOR_ENTRY.to_string(), vendor);
        entry
    }

    /// Transform rules in claim order: script, stylesheet, json, font,
    /// api stub. The order is stable across modes; only the chains differ.
    fn rules(&self, script_presets: Option<Vec<String>>) -> Vec<TransformRule> {
        let matchers = &self.settings.matchers;

        vec![
            self.script_rule(script_presets),
            self.style_rule(),
            TransformRule {
                test: matchers.json.clone(),
                exclude: None,
                transform: Transform::Chain(vec![TransformStep::new("json")]),
            },
            TransformRule {
                test: matchers.font.clone(),
                exclude: None,
                transform: Transform::Chain(vec![
                    TransformStep::new("url").with_query("limit=10000")
                ]),
            },
            TransformRule {
                test: matchers.api_stub.clone(),
                exclude: None,
                transform: Transform::Chain(vec![TransformStep::new("null")]),
            },
        ]
    }

    fn script_rule(&self, presets: Option<Vec<String>>) -> TransformRule {
        let mut step = TransformStep::new("babel");
        if let Some(presets) = presets {
            step = step.with_presets(presets);
        }

        // Server-only api modules must fall through to the stub rule.
        TransformRule {
            test: self.settings.matchers.script.clone(),
            exclude: Some(format!("node_modules|{}", self.settings.matchers.api_stub)),
            transform: Transform::Chain(vec![step]),
        }
    }

    /// Both modes run css (with the modules query) then postcss; production
    /// extracts the result into its own hashed file with the style step as
    /// fallback, development injects through the style step directly.
    fn style_rule(&self) -> TransformRule {
        let settings = &self.settings;
        let css = TransformStep::new("css").with_query(settings.css_modules_query.clone());
        let postcss = TransformStep::new("postcss");
        let style = TransformStep::new("style");

        let transform = if self.env.is_production() {
            Transform::Extract {
                fallback: style,
                chain: vec![css, postcss],
            }
        } else {
            Transform::Chain(vec![style, css, postcss])
        };

        TransformRule {
            test: settings.matchers.style.clone(),
            exclude: None,
            transform,
        }
    }
}

fn vendor_split() -> PluginSpec {
    PluginSpec::VendorSplit {
        chunk: VENDOR_ENTRY.to_string(),
        filename: VENDOR_FILENAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BuildMode, ReloadMode};

    fn resolver(mode: BuildMode, reload: ReloadMode) -> Resolver {
        Resolver::new(BuildEnv::new(mode, reload), Settings::default())
    }

    #[test]
    fn source_map_follows_build_mode() {
        let config = resolver(BuildMode::Production, ReloadMode::None)
            .resolve_with_entry(Path::new("modules/client.js"))
            .unwrap();
        assert_eq!(config.source_map, SourceMapMode::Full);

        let config = resolver(BuildMode::Development, ReloadMode::None)
            .resolve_with_entry(Path::new("modules/client.js"))
            .unwrap();
        assert_eq!(config.source_map, SourceMapMode::CheapModuleEval);
    }

    #[test]
    fn output_path_is_build_dir_under_app_path() {
        let mut settings = Settings::with_root("/srv/site");
        settings.build_dir = ".build".into();
        let resolver = Resolver::new(BuildEnv::default(), settings);

        let config = resolver
            .resolve_with_entry(Path::new("modules/client.js"))
            .unwrap();
        assert_eq!(config.output.path, Path::new("/srv/site/.build"));
    }

    #[test]
    fn app_entry_resolves_under_app_path() {
        let settings = Settings::with_root("/srv/site");
        let resolver = Resolver::new(BuildEnv::default(), settings);

        let config = resolver
            .resolve_with_entry(Path::new("modules/client.js"))
            .unwrap();
        assert_eq!(
            config.entry[APP_ENTRY],
            vec!["/srv/site/modules/client.js".to_string()]
        );
    }

    #[test]
    fn entry_order_is_app_then_vendor() {
        let config = resolver(BuildMode::Production, ReloadMode::None)
            .resolve_with_entry(Path::new("modules/client.js"))
            .unwrap();
        let names: Vec<&str> = config.entry.keys().map(String::as_str).collect();
        assert_eq!(names, [APP_ENTRY, VENDOR_ENTRY]);
    }

    #[test]
    fn invalid_settings_abort_resolution() {
        let mut settings = Settings::default();
        settings.dev_port = 0;
        let resolver = Resolver::new(BuildEnv::default(), settings);

        assert!(resolver
            .resolve_with_entry(Path::new("modules/client.js"))
            .is_err());
    }
}
