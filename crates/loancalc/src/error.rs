/// Loan input that the amortization formula has no meaningful answer for.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoanError {
    #[error("{field} must be a finite number, got {value}")]
    NonFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("loan term must be at least one year")]
    ZeroTerm,
    #[error("loan term of {years} years is too long")]
    TermTooLong { years: u32 },
    #[error("down payment ({down_payment}) exceeds the car cost ({cost})")]
    DownPaymentExceedsCost { cost: f64, down_payment: f64 },
    #[error("loan totals are too large to compute")]
    Overflow,
}
