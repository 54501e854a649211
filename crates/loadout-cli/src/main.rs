//! Loadout CLI - resolves the client build configuration.
//!
//! Entry point: parses arguments, initializes logging, and dispatches to
//! the subcommands. Errors come back as miette diagnostics.

use clap::Parser;
use loadout_cli::{cli, commands, logger};
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init(args.verbose, args.quiet, args.no_color);

    let result = match &args.command {
        cli::Command::Resolve(resolve_args) => commands::resolve_execute(resolve_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    result.map_err(Into::into)
}
