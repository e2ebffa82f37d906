use std::{fmt::Display, io::Write};

use anyhow::Result;
use jsoncmp::{CanonicalDocument, DiffReport, Session, Side, SyntaxError, ValidationOutcome};
use loancalc::{format_currency, BreakdownItem, LoanParameters, LoanSummary};
use serde::Serialize;

const SIDES: [Side; 2] = [Side::Left, Side::Right];

/// How documents are called in user-facing messages.
pub(crate) fn label(side: Side) -> &'static str {
    match side {
        Side::Left => "JSON 1",
        Side::Right => "JSON 2",
    }
}

pub(crate) fn emit_json<T: Serialize>(out: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

pub(crate) fn write_syntax_errors(err: &mut dyn Write, outcome: &ValidationOutcome) -> Result<()> {
    for (side, error) in outcome.errors() {
        writeln!(err, "{} Syntax Error: {error}", label(side))?;
    }
    Ok(())
}

pub(crate) fn write_canonical_documents(out: &mut dyn Write, session: &Session) -> Result<()> {
    for side in SIDES {
        if let Some(document) = session.document(side) {
            writeln!(out, "{}:\n{}\n", label(side), document.text())?;
        }
    }
    Ok(())
}

pub(crate) fn write_report(out: &mut dyn Write, report: &DiffReport) -> Result<()> {
    if report.is_empty() {
        writeln!(out, "No missing attributes or differing values found!")?;
        return Ok(());
    }
    let mut first = true;
    write_section(out, &mut first, "Missing in JSON 1", report.missing_in_left())?;
    write_section(out, &mut first, "Missing in JSON 2", report.missing_in_right())?;
    write_section(out, &mut first, "Differing Values", report.differing())?;
    Ok(())
}

fn write_section<T: Display>(
    out: &mut dyn Write,
    first: &mut bool,
    title: &str,
    items: &[T],
) -> Result<()> {
    if items.is_empty() {
        return Ok(());
    }
    if !*first {
        writeln!(out)?;
    }
    *first = false;
    writeln!(out, "{title}:")?;
    for item in items {
        writeln!(out, "- {item}")?;
    }
    Ok(())
}

pub(crate) fn write_loan(out: &mut dyn Write, summary: &LoanSummary) -> Result<()> {
    writeln!(out, "Total Cost: {}", format_currency(summary.total_cost))?;
    writeln!(
        out,
        "Monthly Payment: {}",
        format_currency(summary.monthly_payment)
    )?;
    writeln!(out)?;
    writeln!(out, "{:<15}{:>14}{:>9}", "Category", "Amount", "Share")?;
    for item in summary.breakdown() {
        writeln!(
            out,
            "{:<15}{:>14}{:>8.2}%",
            item.category,
            format_currency(item.amount),
            item.percent
        )?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub(crate) struct ValidationView<'a> {
    valid: bool,
    left: DocumentView<'a>,
    right: DocumentView<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum DocumentView<'a> {
    Valid { canonical: &'a str },
    Invalid { error: ErrorView<'a> },
}

#[derive(Debug, Serialize)]
struct ErrorView<'a> {
    message: &'a str,
    line: usize,
    column: usize,
}

impl<'a> From<&'a SyntaxError> for ErrorView<'a> {
    fn from(error: &'a SyntaxError) -> Self {
        ErrorView {
            message: error.message(),
            line: error.line(),
            column: error.column(),
        }
    }
}

impl<'a> ValidationView<'a> {
    pub(crate) fn new(session: &'a Session, outcome: &'a ValidationOutcome) -> Self {
        let document = |side: Side| match outcome.get(side) {
            Err(error) => DocumentView::Invalid {
                error: error.into(),
            },
            Ok(()) => DocumentView::Valid {
                canonical: session.document(side).map_or("", CanonicalDocument::text),
            },
        };
        ValidationView {
            valid: outcome.is_valid(),
            left: document(Side::Left),
            right: document(Side::Right),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CompareView<'a> {
    equal: bool,
    #[serde(flatten)]
    report: &'a DiffReport,
}

impl<'a> CompareView<'a> {
    pub(crate) fn new(report: &'a DiffReport) -> Self {
        CompareView {
            equal: report.is_empty(),
            report,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LoanView<'a> {
    parameters: &'a LoanParameters,
    summary: &'a LoanSummary,
    interest_paid: f64,
    breakdown: [BreakdownItem; 3],
}

impl<'a> LoanView<'a> {
    pub(crate) fn new(parameters: &'a LoanParameters, summary: &'a LoanSummary) -> Self {
        LoanView {
            parameters,
            summary,
            interest_paid: summary.interest_paid(),
            breakdown: summary.breakdown(),
        }
    }
}
