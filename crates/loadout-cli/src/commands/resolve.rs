//! `loadout resolve` - emit the build configuration as JSON on stdout.

use loadout_config::{Resolver, Settings};
use tracing::debug;

use crate::cli::ResolveArgs;
use crate::error::Result;

pub fn resolve_execute(args: &ResolveArgs) -> Result<()> {
    let settings = Settings::load(&args.env.root)?;
    let env = args.env.build_env();

    debug!(mode = %env.mode, reload = %env.reload, "resolving");
    let config = Resolver::new(env, settings).resolve()?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&config)?
    } else {
        serde_json::to_string(&config)?
    };
    println!("{json}");

    Ok(())
}
