//! `maturity`: static site builder for the product management maturity model

use clap::Parser;

use maturity::cli::args::Cli;
use maturity::cli::commands;
use maturity::error::ExitCode;
use maturity::observability::init_logging;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version surface as errors that are not failures
            let code = if e.use_stderr() {
                ExitCode::USAGE_ERROR
            } else {
                ExitCode::SUCCESS
            };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    if !cli.quiet {
        init_logging(cli.log_format.into(), cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
