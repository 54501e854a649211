//! Command-line interface definition.
//!
//! Mode flags resolve in clap itself: an explicit `--mode`/`--reload` wins,
//! then the `BUILD_MODE`/`RELOAD_MODE` environment variables, then the
//! development/none defaults. Unlike the library's `BuildEnv::from_env`,
//! this path rejects unrecognized values instead of silently defaulting.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use loadout_config::{BuildEnv, BuildMode, ReloadMode};

/// Resolve the client build configuration for the bundler engine
#[derive(Parser, Debug)]
#[command(
    name = "loadout",
    version,
    about = "Resolve the client build configuration for the bundler engine"
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the build configuration and print it as JSON
    Resolve(ResolveArgs),

    /// Validate settings, manifest, and preset file without emitting a config
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub env: EnvArgs,

    /// Pretty-print the emitted JSON
    #[arg(long)]
    pub pretty: bool,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub env: EnvArgs,
}

/// Flags shared by every subcommand that performs a resolution.
#[derive(Args, Debug)]
pub struct EnvArgs {
    /// Project root holding loadout.toml, package.json, and .transformrc
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Build mode
    #[arg(long, value_enum, env = "BUILD_MODE", default_value = "development")]
    pub mode: ModeArg,

    /// Reload strategy for development builds
    #[arg(long, value_enum, env = "RELOAD_MODE", default_value = "none")]
    pub reload: ReloadArg,
}

impl EnvArgs {
    pub fn build_env(&self) -> BuildEnv {
        BuildEnv::new(self.mode.into(), self.reload.into())
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ModeArg {
    /// Hashed filenames, extracted stylesheets, minified output
    #[value(name = "production")]
    Production,

    /// Fast rebuilds and dev-server plumbing
    #[value(name = "development")]
    Development,
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
pub enum ReloadArg {
    /// Patch running application state in place
    #[value(name = "hot")]
    Hot,

    /// Full page reload on change
    #[value(name = "refresh")]
    Refresh,

    /// No reload plumbing
    #[value(name = "none")]
    None,
}

impl From<ModeArg> for BuildMode {
    fn from(value: ModeArg) -> Self {
        match value {
            ModeArg::Production => BuildMode::Production,
            ModeArg::Development => BuildMode::Development,
        }
    }
}

impl From<ReloadArg> for ReloadMode {
    fn from(value: ReloadArg) -> Self {
        match value {
            ReloadArg::Hot => ReloadMode::Hot,
            ReloadArg::Refresh => ReloadMode::Refresh,
            ReloadArg::None => ReloadMode::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_flags_convert_to_library_enums() {
        assert_eq!(BuildMode::from(ModeArg::Production), BuildMode::Production);
        assert_eq!(ReloadMode::from(ReloadArg::Refresh), ReloadMode::Refresh);
    }

    #[test]
    fn resolve_defaults_to_development_none() {
        std::env::remove_var("BUILD_MODE");
        std::env::remove_var("RELOAD_MODE");
        let cli = Cli::parse_from(["loadout", "resolve"]);
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        let env = args.env.build_env();
        assert_eq!(env.mode, BuildMode::Development);
        assert_eq!(env.reload, ReloadMode::None);
    }

    #[test]
    fn explicit_flags_win() {
        let cli = Cli::parse_from(["loadout", "resolve", "--mode", "production", "--reload", "hot"]);
        let Command::Resolve(args) = cli.command else {
            panic!("expected resolve");
        };
        let env = args.env.build_env();
        assert_eq!(env.mode, BuildMode::Production);
        assert_eq!(env.reload, ReloadMode::Hot);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(Cli::try_parse_from(["loadout", "resolve", "--mode", "prod"]).is_err());
    }
}
