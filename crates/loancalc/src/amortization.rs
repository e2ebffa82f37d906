use core::fmt;
use std::num::NonZeroU32;

use serde::Serialize;

pub const MONTHS_PER_YEAR: u32 = 12;

/// Totals of a fixed-rate loan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LoanSummary {
    pub down_payment: f64,
    /// Car cost minus down payment.
    pub loan_amount: f64,
    pub monthly_payment: f64,
    /// Sum of all monthly payments.
    pub total_paid: f64,
    /// Total paid plus the down payment.
    pub total_cost: f64,
    pub payments: u32,
}

/// A slice of the total cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    #[serde(rename = "Down Payment")]
    DownPayment,
    #[serde(rename = "Loan Amount")]
    LoanAmount,
    #[serde(rename = "Interest Paid")]
    InterestPaid,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::DownPayment => f.pad("Down Payment"),
            Category::LoanAmount => f.pad("Loan Amount"),
            Category::InterestPaid => f.pad("Interest Paid"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakdownItem {
    pub category: Category,
    pub amount: f64,
    /// Share of the total cost, in percent.
    pub percent: f64,
}

impl LoanSummary {
    /// Interest over the whole term.
    #[must_use]
    pub fn interest_paid(&self) -> f64 {
        self.total_paid - self.loan_amount
    }

    /// Split the total cost into down payment, borrowed principal and interest.
    ///
    /// Percentages are all zero when the total cost is zero.
    #[must_use]
    pub fn breakdown(&self) -> [BreakdownItem; 3] {
        let share = |amount: f64| {
            if self.total_cost == 0.0 {
                0.0
            } else {
                amount / self.total_cost * 100.0
            }
        };
        [
            (Category::DownPayment, self.down_payment),
            (Category::LoanAmount, self.loan_amount),
            (Category::InterestPaid, self.interest_paid()),
        ]
        .map(|(category, amount)| BreakdownItem {
            category,
            amount,
            percent: share(amount),
        })
    }
}

/// Amortize a fixed-rate loan with monthly payments.
///
/// A down payment larger than the principal yields a negative loan amount, which flows through
/// the formula unchanged. Use [`crate::LoanParameters`] to reject such input upfront.
///
/// The payment `L·r·(1+r)^n / ((1+r)^n − 1)` is evaluated as `L·r / (1 − (1+r)^−n)`
/// through `ln_1p`/`exp_m1`, so rates too small to change `1 + r` and terms long enough to
/// overflow `(1+r)^n` still give finite payments.
#[must_use]
pub fn amortize(
    principal: f64,
    down_payment: f64,
    annual_rate_percent: f64,
    term_years: NonZeroU32,
) -> LoanSummary {
    let loan_amount = principal - down_payment;
    let monthly_rate = annual_rate_percent / 100.0 / f64::from(MONTHS_PER_YEAR);
    let payments = term_years.get().saturating_mul(MONTHS_PER_YEAR);
    let n = f64::from(payments);
    let monthly_payment = if monthly_rate > 0.0 {
        let discounted = -(-n * monthly_rate.ln_1p()).exp_m1();
        loan_amount * (monthly_rate / discounted)
    } else {
        loan_amount / n
    };
    let total_paid = monthly_payment * n;
    LoanSummary {
        down_payment,
        loan_amount,
        monthly_payment,
        total_paid,
        total_cost: total_paid + down_payment,
        payments,
    }
}
