//! CLI error type, rendered through miette at the top level.

use loadout_config::ConfigError;
use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Anything the resolver or its input readers reject.
    #[error(transparent)]
    #[diagnostic(
        code(loadout::config),
        help("run `loadout check` for a preflight report of the project inputs")
    )]
    Config(#[from] ConfigError),

    #[error("failed to serialize build config: {0}")]
    #[diagnostic(code(loadout::json))]
    Json(#[from] serde_json::Error),
}
