//! Closed-form financial calculators.
//!
//! All amounts are [`Decimal`]s. Rates are given in percent (`5` means 5 %).
//! Results are rounded half-up to cents; intermediate values are not.

pub mod cagr;
pub mod interest;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use cagr::{CagrResult, cagr};
pub use interest::{
    CompoundInterestInput, CompoundInterestResult, CompoundingFrequency, SimpleInterestResult,
    compound_interest, simple_interest,
};

/// Longest horizon a projection will be generated for.
pub const MAX_YEARS: u32 = 100;

/// Errors that can occur in the financial calculators.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FinanceError {
    /// The starting value of a CAGR calculation must be positive.
    #[error("initial value must be greater than zero, got {0}")]
    NonPositiveInitialValue(Decimal),

    /// The ending value of a CAGR calculation cannot be negative.
    #[error("final value cannot be negative, got {0}")]
    NegativeFinalValue(Decimal),

    #[error("principal cannot be negative, got {0}")]
    NegativePrincipal(Decimal),

    #[error("interest rate cannot be negative, got {0}")]
    NegativeRate(Decimal),

    #[error("periodic contribution cannot be negative, got {0}")]
    NegativeContribution(Decimal),

    /// The number of years is zero/negative where a period is required, or
    /// longer than [`MAX_YEARS`].
    #[error("years must be between 0 and {max}, got {years}", max = MAX_YEARS)]
    InvalidYears { years: Decimal },

    #[error("compounding frequency must be at least once per year")]
    ZeroCompoundingFrequency,

    /// The result does not fit in a [`Decimal`].
    #[error("calculation overflowed")]
    Overflow,
}

/// One point of a year-by-year balance projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearProjection {
    pub year: Decimal,
    /// Principal plus every contribution made so far.
    pub contributions: Decimal,
    /// Interest earned so far.
    pub interest: Decimal,
    pub balance: Decimal,
}
