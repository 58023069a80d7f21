//! Precomputed conversion tables shown beneath each converter.

use serde::Serialize;

use super::common::format_value;
use super::units::{ConversionError, Quantity, convert};

/// Sample inputs used when the caller does not supply any.
pub const DEFAULT_SAMPLES: [f64; 7] = [1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0];

const TABLE_DECIMALS: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReferenceRow {
    pub input: f64,
    pub output: f64,
    pub formatted: String,
}

/// Converts every sample from `from` to `to`.
///
/// An empty `samples` slice falls back to [`DEFAULT_SAMPLES`].
///
/// # Errors
///
/// Fails on the first sample that cannot be converted, e.g. an unknown unit
/// or a temperature below absolute zero.
pub fn reference_table(
    quantity: Quantity,
    from: &str,
    to: &str,
    samples: &[f64],
) -> Result<Vec<ReferenceRow>, ConversionError> {
    let samples = if samples.is_empty() {
        &DEFAULT_SAMPLES[..]
    } else {
        samples
    };

    samples
        .iter()
        .map(|&input| {
            let output = convert(quantity, input, from, to)?;
            Ok(ReferenceRow {
                input,
                output,
                formatted: format_value(output, TABLE_DECIMALS),
            })
        })
        .collect()
}
