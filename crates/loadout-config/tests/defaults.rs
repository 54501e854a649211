//! Tests for default values and edge cases.

use std::path::PathBuf;

use loadout_config::{
    BuildEnv, BuildMode, DevServerOptions, Matchers, PresetFile, ReloadMode, Settings,
};

#[test]
fn settings_defaults() {
    let settings = Settings::default();
    assert_eq!(settings.app_path, PathBuf::from("."));
    assert_eq!(settings.build_dir, PathBuf::from(".build"));
    assert_eq!(settings.dev_host, "localhost");
    assert_eq!(settings.dev_port, 8081);
    assert_eq!(settings.public_path, "/assets/");
    assert_eq!(settings.vendor_modules.len(), 4);
    assert_eq!(settings.hot_bootstrap, "loadout/hot/dev-server");
    assert_eq!(settings.dev_client_bootstrap, "loadout/dev-server/client");
}

#[test]
fn matcher_defaults() {
    let matchers = Matchers::default();
    assert_eq!(matchers.script, r"\.js$");
    assert_eq!(matchers.style, r"\.css$");
    assert_eq!(matchers.json, r"\.json$");
    assert!(matchers.font.contains("woff2"));
    assert_eq!(matchers.api_stub, "modules/api/");
}

#[test]
fn build_env_defaults() {
    let env = BuildEnv::default();
    assert_eq!(env.mode, BuildMode::Development);
    assert_eq!(env.reload, ReloadMode::None);
}

#[test]
fn mode_enums_round_trip_through_serde() {
    for mode in [BuildMode::Production, BuildMode::Development] {
        let json = serde_json::to_string(&mode).unwrap();
        assert_eq!(json, format!("\"{mode}\""));
        assert_eq!(serde_json::from_str::<BuildMode>(&json).unwrap(), mode);
    }

    for reload in [ReloadMode::Hot, ReloadMode::Refresh, ReloadMode::None] {
        let json = serde_json::to_string(&reload).unwrap();
        assert_eq!(json, format!("\"{reload}\""));
        assert_eq!(serde_json::from_str::<ReloadMode>(&json).unwrap(), reload);
    }
}

#[test]
fn preset_file_defaults_to_no_presets() {
    let file: PresetFile = serde_json::from_str("{}").unwrap();
    assert!(file.presets.is_empty());
}

#[test]
fn dev_server_options_defaults() {
    let options = DevServerOptions::new(false);
    assert!(!options.hot);
    assert!(!options.serve_static);
    assert!(!options.quiet);
    assert!(!options.no_info);
    assert!(options.stats.assets);
    assert!(options.stats.chunk_modules);
}
