//! Prettify command
//!
//! Usage: jsoncmp prettify <LEFT> <RIGHT>
use std::io::Write;

use anyhow::Result;
use clap::Args;
use jsoncmp::Session;

use crate::{
    input::{read_pair, Source},
    output, Outcome, OutputFormat,
};

#[derive(Debug, Args)]
pub(crate) struct PrettifyArgs {
    /// First document (file path, or `-` for stdin)
    pub(crate) left: Source,

    /// Second document (file path, or `-` for stdin)
    pub(crate) right: Source,
}

pub(crate) fn execute(
    args: &PrettifyArgs,
    format: OutputFormat,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<Outcome> {
    let (left, right) = read_pair(&args.left, &args.right)?;
    let mut session = Session::new();
    let outcome = session.validate(&left, &right);

    match format {
        OutputFormat::Text => {
            output::write_syntax_errors(err, &outcome)?;
            output::write_canonical_documents(out, &session)?;
            if outcome.is_valid() {
                writeln!(out, "Both JSON inputs are valid and have been prettified.")?;
            }
        }
        OutputFormat::Json => {
            output::emit_json(out, &output::ValidationView::new(&session, &outcome))?;
        }
    }

    Ok(if outcome.is_valid() {
        Outcome::Clean
    } else {
        Outcome::InvalidInput
    })
}
