use axum::{Json, extract::Query};
use calc_core::calculations::common::{MAX_DECIMALS, format_value};
use calc_core::calculations::{
    ConversionError, Quantity, ReferenceRow, UnitDef, parse_input, reference_table,
};
use serde::{Deserialize, Serialize};

use super::required;
use crate::error::ApiError;

const DEFAULT_DECIMALS: usize = 6;

#[derive(Debug, Serialize)]
pub(super) struct QuantityInfo {
    quantity: Quantity,
    base_unit: &'static str,
    allows_negative: bool,
    units: &'static [UnitDef],
}

#[derive(Debug, Serialize)]
pub(super) struct UnitsResponse {
    quantities: Vec<QuantityInfo>,
}

/// `GET /api/units`: every quantity with its units.
pub(super) async fn units() -> Json<UnitsResponse> {
    let quantities = Quantity::ALL
        .into_iter()
        .map(|quantity| QuantityInfo {
            quantity,
            base_unit: quantity.base_unit(),
            allows_negative: quantity.allows_negative(),
            units: quantity.units(),
        })
        .collect();
    Json(UnitsResponse { quantities })
}

fn parse_quantity(raw: &str) -> Result<Quantity, ApiError> {
    Quantity::parse(raw).ok_or_else(|| ConversionError::UnknownQuantity(raw.to_string()).into())
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ConvertParams {
    #[serde(default)]
    quantity: Option<String>,
    #[serde(default)]
    value: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    #[serde(default)]
    decimals: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ConvertResponse {
    quantity: Quantity,
    value: f64,
    from: &'static UnitDef,
    to: &'static UnitDef,
    result: f64,
    formatted: String,
}

/// `GET /api/convert?quantity=&value=&from=&to=`. An empty value converts 0.
pub(super) async fn convert(
    Query(params): Query<ConvertParams>,
) -> Result<Json<ConvertResponse>, ApiError> {
    let quantity = parse_quantity(required(&params.quantity, "quantity")?)?;
    let from = quantity.find_unit(required(&params.from, "from")?)?;
    let to = quantity.find_unit(required(&params.to, "to")?)?;
    let value = parse_input(params.value.as_deref().unwrap_or_default())?;
    let decimals = match params.decimals.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_DECIMALS,
        Some(raw) => raw
            .parse::<usize>()
            .map_err(|_| ApiError::BadRequest(format!("invalid decimals '{raw}'")))?
            .min(MAX_DECIMALS),
    };

    let result = calc_core::calculations::convert(quantity, value, from.key, to.key)?;

    Ok(Json(ConvertResponse {
        quantity,
        value,
        from,
        to,
        result,
        formatted: format_value(result, decimals),
    }))
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ReferenceParams {
    #[serde(default)]
    quantity: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<String>,
    /// Comma-separated sample values.
    #[serde(default)]
    samples: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ReferenceResponse {
    quantity: Quantity,
    from: &'static UnitDef,
    to: &'static UnitDef,
    rows: Vec<ReferenceRow>,
}

/// `GET /api/convert/reference?quantity=&from=&to=[&samples=1,2,3]`.
pub(super) async fn reference(
    Query(params): Query<ReferenceParams>,
) -> Result<Json<ReferenceResponse>, ApiError> {
    let quantity = parse_quantity(required(&params.quantity, "quantity")?)?;
    let from = quantity.find_unit(required(&params.from, "from")?)?;
    let to = quantity.find_unit(required(&params.to, "to")?)?;

    let samples = params
        .samples
        .as_deref()
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(parse_input)
        .collect::<Result<Vec<f64>, _>>()?;

    let rows = reference_table(quantity, from.key, to.key, &samples)?;

    Ok(Json(ReferenceResponse {
        quantity,
        from,
        to,
        rows,
    }))
}
