//! `loadout check` - preflight the inputs a resolution would read.

use loadout_config::{validate_settings, Manifest, PresetFile, Settings};
use tracing::info;

use crate::cli::CheckArgs;
use crate::error::Result;

pub fn check_execute(args: &CheckArgs) -> Result<()> {
    let settings = Settings::load(&args.env.root)?;
    validate_settings(&settings)?;

    let manifest = Manifest::load(&settings.app_path)?;
    info!(client = %manifest.client().display(), "manifest ok");

    let env = args.env.build_env();
    // Hot development is the one configuration with an extra file to read.
    if env.is_hot() {
        let presets = PresetFile::load(&settings.app_path)?;
        info!(presets = presets.presets.len(), "preset file ok");
    }

    println!("mode: {} (reload: {})", env.mode, env.reload);
    println!("client entry: {}", manifest.client().display());
    println!("ok");

    Ok(())
}
