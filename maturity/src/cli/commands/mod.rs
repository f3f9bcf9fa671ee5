//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod export;
pub mod pipeline;
pub mod validate;
pub mod version;

use crate::cli::args::{Cli, Commands};
use crate::error::MaturityError;
use crate::observability::Progress;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), MaturityError> {
    let progress = Progress::new(cli.quiet);

    match cli.command {
        Commands::Build(args) => pipeline::build(&args, progress),
        Commands::Convert(args) => pipeline::convert(&args, progress),
        Commands::Derive(args) => pipeline::derive(&args, progress),
        Commands::Render(args) => pipeline::render(&args, progress),
        Commands::Validate(args) => validate::run(&args, progress),
        Commands::ExportYaml(args) => export::run(&args, progress),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
