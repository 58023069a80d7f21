//! Calculation modules for the calculator catalogue.
//!
//! Every calculation here is a pure function of its inputs: linear unit
//! conversion through a base unit, the affine temperature scales, a few
//! reciprocal or density-based conversions, and closed-form financial
//! formulas.

pub mod baking;
pub mod common;
pub mod finance;
pub mod health;
pub mod lighting;
pub mod reference;
pub mod units;

pub use common::{InputError, format_value, parse_decimal_input, parse_input, round_half_up, round_to};
pub use finance::{
    CagrResult, CompoundInterestInput, CompoundInterestResult, FinanceError, SimpleInterestResult,
    YearProjection, cagr, compound_interest, simple_interest,
};
pub use reference::{ReferenceRow, reference_table};
pub use units::{ConversionError, Quantity, UnitDef, convert};
