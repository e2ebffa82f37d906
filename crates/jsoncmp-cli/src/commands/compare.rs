//! Compare command
//!
//! Usage: jsoncmp compare <LEFT> <RIGHT>
use std::io::Write;

use anyhow::Result;
use clap::Args;
use jsoncmp::Session;

use crate::{
    input::{read_pair, Source},
    output, Outcome, OutputFormat,
};

#[derive(Debug, Args)]
pub(crate) struct CompareArgs {
    /// First document (file path, or `-` for stdin)
    pub(crate) left: Source,

    /// Second document (file path, or `-` for stdin)
    pub(crate) right: Source,
}

pub(crate) fn execute(
    args: &CompareArgs,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    let (left, right) = read_pair(&args.left, &args.right)?;
    let mut session = Session::new();
    let outcome = session.validate(&left, &right);

    if !outcome.is_valid() {
        match format {
            OutputFormat::Text => {
                output::write_syntax_errors(err, &outcome)?;
                writeln!(err, "Fix the syntax errors above before comparing.")?;
            }
            OutputFormat::Json => {
                output::emit_json(out, &output::ValidationView::new(&session, &outcome))?;
            }
        }
        return Ok(Outcome::InvalidInput);
    }

    let report = session.compare()?;
    tracing::info!(entries = report.len(), "Comparison finished");
    match format {
        OutputFormat::Text => output::write_report(out, &report)?,
        OutputFormat::Json => output::emit_json(out, &output::CompareView::new(&report))?,
    }

    Ok(if report.is_empty() {
        Outcome::Clean
    } else {
        Outcome::Differences
    })
}
