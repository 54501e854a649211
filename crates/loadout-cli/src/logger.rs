//! Logging setup for the CLI.
//!
//! Level resolution order: `--verbose` (debug for loadout crates), then
//! `--quiet` (errors only), then `RUST_LOG`, then info.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the global tracing subscriber. Call once, before any logging.
pub fn init(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("loadout=debug,loadout_config=debug,loadout_cli=debug")
    } else if quiet {
        EnvFilter::new("loadout=error,loadout_config=error,loadout_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("loadout=info,loadout_config=info,loadout_cli=info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
