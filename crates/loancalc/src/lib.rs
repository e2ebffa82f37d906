//! # loancalc
//!
//! Fixed-rate car loan amortization.
//!
//! [`amortize`] is the raw formula over four scalars. Host applications collecting user input
//! should go through [`LoanParameters::new`], which rejects values the formula gives no
//! meaningful answer for.
//!
//! ```rust
//! use loancalc::{format_currency, LoanParameters};
//!
//! let summary = LoanParameters::new(30_000.0, 5_000.0, 6.0, 5)?.amortize();
//! assert_eq!(format_currency(summary.monthly_payment), "$483.32");
//! assert_eq!(format_currency(summary.total_cost), "$33,999.20");
//! # Ok::<(), loancalc::LoanError>(())
//! ```
mod amortization;
mod currency;
mod error;
mod params;

pub use amortization::{amortize, BreakdownItem, Category, LoanSummary, MONTHS_PER_YEAR};
pub use currency::format_currency;
pub use error::LoanError;
pub use params::LoanParameters;
