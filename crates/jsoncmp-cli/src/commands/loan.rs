//! Loan command
//!
//! Usage: jsoncmp loan [--cost <COST>] [--down-payment <AMOUNT>] [--rate <APR>] [--years <YEARS>]
use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;
use loancalc::LoanParameters;

use crate::{output, Outcome, OutputFormat};

#[derive(Debug, Args)]
pub(crate) struct LoanArgs {
    /// Price of the car
    #[arg(long, default_value_t = 30_000.0, allow_negative_numbers = true)]
    pub(crate) cost: f64,

    /// Amount paid upfront
    #[arg(long, default_value_t = 5_000.0, allow_negative_numbers = true)]
    pub(crate) down_payment: f64,

    /// Annual percentage rate, in percent
    #[arg(long, default_value_t = 5.0, allow_negative_numbers = true)]
    pub(crate) rate: f64,

    /// Loan term in years
    #[arg(long, default_value_t = 5)]
    pub(crate) years: u32,
}

pub(crate) fn execute(
    args: &LoanArgs,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<Outcome> {
    let parameters = LoanParameters::new(args.cost, args.down_payment, args.rate, args.years)
        .context("Invalid loan parameters")?;
    let summary = parameters.amortize();

    match format {
        OutputFormat::Text => output::write_loan(out, &summary)?,
        OutputFormat::Json => {
            output::emit_json(out, &output::LoanView::new(&parameters, &summary))?;
        }
    }
    Ok(Outcome::Clean)
}
