//! jsoncmp CLI
//!
//! Canonicalize and compare JSON documents, and amortize car loans.
use std::{
    io::{self, Write},
    process::ExitCode,
};

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

mod commands;
mod input;
mod logging;
mod output;

#[derive(Debug, Parser)]
#[command(name = "jsoncmp", version)]
#[command(about = "Compare JSON documents and amortize car loans", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "JSONCMP_FORMAT", global = true)]
    format: OutputFormat,

    /// Increase log verbosity (-v for info, -vv for debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the syntax of two JSON documents and print their canonical form
    Prettify(commands::prettify::PrettifyArgs),
    /// Report keys missing from either document and keys whose values differ
    Compare(commands::compare::CompareArgs),
    /// Compute the monthly payment and total cost of a car loan
    Loan(commands::loan::LoanArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// How a successfully executed command ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// Inputs were valid and, when compared, equal.
    Clean,
    /// The compared documents differ.
    Differences,
    /// At least one input was rejected; details were already reported.
    InvalidInput,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Clean => ExitCode::SUCCESS,
            Outcome::Differences => ExitCode::from(1),
            Outcome::InvalidInput => ExitCode::from(2),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let result = match cli.command {
        Commands::Prettify(args) => {
            commands::prettify::execute(&args, cli.format, &mut stdout, &mut stderr)
        }
        Commands::Compare(args) => {
            commands::compare::execute(&args, cli.format, &mut stdout, &mut stderr)
        }
        Commands::Loan(args) => commands::loan::execute(&args, cli.format, &mut stdout),
    };

    match result {
        Ok(outcome) => outcome.into(),
        Err(error) => {
            tracing::debug!(?error, "Command failed");
            // Nothing else to report to if stderr is gone
            let _ = writeln!(stderr, "Error: {error:#}");
            Outcome::InvalidInput.into()
        }
    }
}
