//! Compound annual growth rate.
//!
//! `CAGR = (final / initial)^(1 / years) − 1`
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::calculations::finance::cagr;
//!
//! let result = cagr(dec!(10000), dec!(25000), dec!(5)).unwrap();
//!
//! assert_eq!(result.percent, dec!(20.11));
//! assert_eq!(result.total_return_percent, dec!(150.00));
//! ```

use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

use super::{FinanceError, MAX_YEARS};
use crate::calculations::common::round_half_up;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CagrResult {
    /// Unrounded growth rate as a fraction (0.2011… for 20.11 %).
    pub rate: Decimal,
    /// Growth rate in percent, rounded to two places.
    pub percent: Decimal,
    /// `final − initial`.
    pub absolute_return: Decimal,
    /// Total growth over the whole period in percent, rounded to two places.
    pub total_return_percent: Decimal,
}

/// Computes the compound annual growth rate from `initial` to `final_value`
/// over `years` (fractional years allowed).
///
/// # Errors
///
/// * [`FinanceError::NonPositiveInitialValue`] when `initial <= 0`.
/// * [`FinanceError::NegativeFinalValue`] when `final_value < 0`.
/// * [`FinanceError::InvalidYears`] when `years <= 0` or exceeds
///   [`MAX_YEARS`].
/// * [`FinanceError::Overflow`] when an intermediate amount does not fit in
///   a [`Decimal`].
pub fn cagr(
    initial: Decimal,
    final_value: Decimal,
    years: Decimal,
) -> Result<CagrResult, FinanceError> {
    if initial <= Decimal::ZERO {
        return Err(FinanceError::NonPositiveInitialValue(initial));
    }
    if final_value < Decimal::ZERO {
        return Err(FinanceError::NegativeFinalValue(final_value));
    }
    if years <= Decimal::ZERO || years > Decimal::from(MAX_YEARS) {
        return Err(FinanceError::InvalidYears { years });
    }

    let ratio = final_value.checked_div(initial).ok_or(FinanceError::Overflow)?;
    let exponent = Decimal::ONE / years;
    let growth = ratio.checked_powd(exponent).ok_or(FinanceError::Overflow)?;
    let rate = growth - Decimal::ONE;

    let absolute_return = final_value - initial;
    let total_return = absolute_return
        .checked_div(initial)
        .and_then(|r| r.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(FinanceError::Overflow)?;
    let percent = rate
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or(FinanceError::Overflow)?;

    Ok(CagrResult {
        rate,
        percent: round_half_up(percent),
        absolute_return,
        total_return_percent: round_half_up(total_return),
    })
}
