//! Simple and compound interest.
//!
//! | Calculator | Formula |
//! |------------|---------|
//! | Simple     | `I = P × r × t`, total `P + I` |
//! | Compound   | `A = P × (1 + r/n)^(n×t)` |
//! | Contributions | `PMT × ((1 + r/n)^(n×t) − 1) / (r/n)`, paid at the end of each period |
//!
//! Both calculators also return a year-by-year projection starting at year 0,
//! used to chart balance growth.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::calculations::finance::simple_interest;
//!
//! let result = simple_interest(dec!(1000), dec!(5), dec!(5)).unwrap();
//!
//! assert_eq!(result.interest, dec!(250.00));
//! assert_eq!(result.total, dec!(1250.00));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use super::{FinanceError, MAX_YEARS, YearProjection};
use crate::calculations::common::round_half_up;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleInterestResult {
    pub interest: Decimal,
    pub total: Decimal,
    pub projection: Vec<YearProjection>,
}

/// How often interest is compounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    Annually,
    Semiannually,
    Quarterly,
    Monthly,
    Weekly,
    Daily,
}

impl CompoundingFrequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Self::Annually => 1,
            Self::Semiannually => 2,
            Self::Quarterly => 4,
            Self::Monthly => 12,
            Self::Weekly => 52,
            Self::Daily => 365,
        }
    }

    /// Parses a frequency name, or a plain number of periods per year.
    pub fn parse_periods(s: &str) -> Option<u32> {
        let s = s.trim().to_ascii_lowercase();
        let named = match s.as_str() {
            "annually" | "yearly" => Some(Self::Annually),
            "semiannually" | "semi-annually" => Some(Self::Semiannually),
            "quarterly" => Some(Self::Quarterly),
            "monthly" => Some(Self::Monthly),
            "weekly" => Some(Self::Weekly),
            "daily" => Some(Self::Daily),
            _ => None,
        };
        named
            .map(|f| f.periods_per_year())
            .or_else(|| s.parse::<u32>().ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: Decimal,
    /// Annual nominal rate in percent.
    pub annual_rate_percent: Decimal,
    pub years: u32,
    pub compounds_per_year: u32,
    /// Deposit made at the end of every compounding period.
    pub periodic_contribution: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub final_balance: Decimal,
    /// Principal plus all periodic contributions.
    pub total_contributions: Decimal,
    pub total_interest: Decimal,
    /// Annual percentage yield, `(1 + r/n)^n − 1`, in percent.
    pub effective_annual_rate_percent: Decimal,
    pub projection: Vec<YearProjection>,
}

/// Computes simple interest on `principal` at `rate_percent` per year over
/// `years` (fractional years allowed).
///
/// # Errors
///
/// Returns [`FinanceError`] for a negative principal or rate, when `years`
/// is negative or longer than [`MAX_YEARS`], or when an amount overflows.
pub fn simple_interest(
    principal: Decimal,
    rate_percent: Decimal,
    years: Decimal,
) -> Result<SimpleInterestResult, FinanceError> {
    if principal < Decimal::ZERO {
        return Err(FinanceError::NegativePrincipal(principal));
    }
    if rate_percent < Decimal::ZERO {
        return Err(FinanceError::NegativeRate(rate_percent));
    }
    if years < Decimal::ZERO || years > Decimal::from(MAX_YEARS) {
        return Err(FinanceError::InvalidYears { years });
    }

    let rate = rate_percent / Decimal::ONE_HUNDRED;
    let interest_at = |t: Decimal| {
        principal
            .checked_mul(rate)
            .and_then(|per_year| per_year.checked_mul(t))
            .ok_or(FinanceError::Overflow)
    };
    let total_at = |interest: Decimal| principal.checked_add(interest).ok_or(FinanceError::Overflow);

    let mut points: Vec<Decimal> = (0..=whole_years(years)).map(Decimal::from).collect();
    if years.fract() != Decimal::ZERO {
        points.push(years);
    }

    let projection = points
        .into_iter()
        .map(|year| {
            let interest = interest_at(year)?;
            Ok(YearProjection {
                year,
                contributions: round_half_up(principal),
                interest: round_half_up(interest),
                balance: round_half_up(total_at(interest)?),
            })
        })
        .collect::<Result<Vec<_>, FinanceError>>()?;

    let interest = interest_at(years)?;
    Ok(SimpleInterestResult {
        interest: round_half_up(interest),
        total: round_half_up(total_at(interest)?),
        projection,
    })
}

fn whole_years(years: Decimal) -> u32 {
    years.trunc().to_u32().unwrap_or(0)
}

/// Computes compound growth of `input.principal` with optional periodic
/// contributions, and a projection for every whole year.
///
/// # Errors
///
/// Returns [`FinanceError`] for negative amounts or rate, a zero
/// compounding frequency, a horizon longer than [`MAX_YEARS`], or when an
/// amount overflows.
pub fn compound_interest(input: &CompoundInterestInput) -> Result<CompoundInterestResult, FinanceError> {
    if input.principal < Decimal::ZERO {
        return Err(FinanceError::NegativePrincipal(input.principal));
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(FinanceError::NegativeRate(input.annual_rate_percent));
    }
    if input.periodic_contribution < Decimal::ZERO {
        return Err(FinanceError::NegativeContribution(input.periodic_contribution));
    }
    if input.compounds_per_year == 0 {
        return Err(FinanceError::ZeroCompoundingFrequency);
    }
    if input.years > MAX_YEARS {
        return Err(FinanceError::InvalidYears {
            years: Decimal::from(input.years),
        });
    }

    let n = Decimal::from(input.compounds_per_year);
    let period_rate = input.annual_rate_percent / Decimal::ONE_HUNDRED / n;

    let projection = (0..=input.years)
        .map(|year| project_year(input, period_rate, year))
        .collect::<Result<Vec<_>, _>>()?;

    let effective = (Decimal::ONE + period_rate)
        .checked_powu(u64::from(input.compounds_per_year))
        .ok_or(FinanceError::Overflow)?
        - Decimal::ONE;

    let last = projection.last().cloned().ok_or(FinanceError::Overflow)?;

    Ok(CompoundInterestResult {
        final_balance: last.balance,
        total_contributions: last.contributions,
        total_interest: last.interest,
        effective_annual_rate_percent: round_half_up(
            effective
                .checked_mul(Decimal::ONE_HUNDRED)
                .ok_or(FinanceError::Overflow)?,
        ),
        projection,
    })
}

fn project_year(
    input: &CompoundInterestInput,
    period_rate: Decimal,
    year: u32,
) -> Result<YearProjection, FinanceError> {
    let periods = u64::from(input.compounds_per_year) * u64::from(year);
    let growth = (Decimal::ONE + period_rate)
        .checked_powu(periods)
        .ok_or(FinanceError::Overflow)?;

    let grown_principal = input
        .principal
        .checked_mul(growth)
        .ok_or(FinanceError::Overflow)?;

    let paid_in = input
        .periodic_contribution
        .checked_mul(Decimal::from(periods))
        .ok_or(FinanceError::Overflow)?;

    let grown_contributions = if period_rate.is_zero() {
        paid_in
    } else {
        (growth - Decimal::ONE)
            .checked_div(period_rate)
            .and_then(|annuity| input.periodic_contribution.checked_mul(annuity))
            .ok_or(FinanceError::Overflow)?
    };

    let balance = grown_principal
        .checked_add(grown_contributions)
        .ok_or(FinanceError::Overflow)?;
    let contributions = input
        .principal
        .checked_add(paid_in)
        .ok_or(FinanceError::Overflow)?;

    Ok(YearProjection {
        year: Decimal::from(year),
        contributions: round_half_up(contributions),
        interest: round_half_up(balance - contributions),
        balance: round_half_up(balance),
    })
}
