use std::num::NonZeroU32;

use serde::Serialize;

use crate::{amortization::amortize, error::LoanError, LoanSummary, MONTHS_PER_YEAR};

/// Validated input for [`amortize`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanParameters {
    cost: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: NonZeroU32,
}

impl LoanParameters {
    /// Validate loan input.
    ///
    /// # Errors
    ///
    /// - [`LoanError::NonFinite`] for NaN or infinite amounts;
    /// - [`LoanError::Negative`] for a negative cost, down payment or rate;
    /// - [`LoanError::ZeroTerm`] when `term_years` is zero;
    /// - [`LoanError::TermTooLong`] when the number of monthly payments does not fit in a `u32`;
    /// - [`LoanError::DownPaymentExceedsCost`] when the loan amount would be negative;
    /// - [`LoanError::Overflow`] when the payment or total cost is not a finite number.
    pub fn new(
        cost: f64,
        down_payment: f64,
        annual_rate_percent: f64,
        term_years: u32,
    ) -> Result<Self, LoanError> {
        for (field, value) in [
            ("car cost", cost),
            ("down payment", down_payment),
            ("interest rate", annual_rate_percent),
        ] {
            if !value.is_finite() {
                return Err(LoanError::NonFinite { field, value });
            }
            if value < 0.0 {
                return Err(LoanError::Negative { field, value });
            }
        }
        let term_years = NonZeroU32::new(term_years).ok_or(LoanError::ZeroTerm)?;
        if term_years.get().checked_mul(MONTHS_PER_YEAR).is_none() {
            return Err(LoanError::TermTooLong {
                years: term_years.get(),
            });
        }
        if down_payment > cost {
            return Err(LoanError::DownPaymentExceedsCost { cost, down_payment });
        }
        let summary = amortize(cost, down_payment, annual_rate_percent, term_years);
        if !(summary.monthly_payment.is_finite() && summary.total_cost.is_finite()) {
            return Err(LoanError::Overflow);
        }
        Ok(Self {
            cost,
            down_payment,
            annual_rate_percent,
            term_years,
        })
    }

    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }
    #[must_use]
    pub fn down_payment(&self) -> f64 {
        self.down_payment
    }
    #[must_use]
    pub fn annual_rate_percent(&self) -> f64 {
        self.annual_rate_percent
    }
    #[must_use]
    pub fn term_years(&self) -> NonZeroU32 {
        self.term_years
    }

    #[must_use]
    pub fn amortize(&self) -> LoanSummary {
        let summary = amortize(
            self.cost,
            self.down_payment,
            self.annual_rate_percent,
            self.term_years,
        );
        tracing::debug!(
            loan_amount = summary.loan_amount,
            monthly_payment = summary.monthly_payment,
            payments = summary.payments,
            "Amortized loan"
        );
        summary
    }
}
