use axum::{Json, extract::Query};
use calc_core::calculations::finance::{self, CompoundingFrequency};
use calc_core::calculations::{
    CagrResult, CompoundInterestInput, CompoundInterestResult, SimpleInterestResult,
    parse_decimal_input,
};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::required;
use crate::error::ApiError;

const DEFAULT_COMPOUNDS_PER_YEAR: u32 = 12;

fn decimal_param(
    value: &Option<String>,
    name: &str,
) -> Result<Decimal, ApiError> {
    let raw = required(value, name)?;
    parse_decimal_input(raw).map_err(|e| ApiError::BadRequest(format!("{name}: {e}")))
}

fn optional_decimal_param(
    value: &Option<String>,
    name: &str,
) -> Result<Decimal, ApiError> {
    match value.as_deref().map(str::trim) {
        None | Some("") => Ok(Decimal::ZERO),
        Some(_) => decimal_param(value, name),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CagrParams {
    #[serde(default)]
    initial: Option<String>,
    #[serde(default, rename = "final")]
    final_value: Option<String>,
    #[serde(default)]
    years: Option<String>,
}

/// `GET /api/finance/cagr?initial=&final=&years=`.
pub(super) async fn cagr(Query(params): Query<CagrParams>) -> Result<Json<CagrResult>, ApiError> {
    let initial = decimal_param(&params.initial, "initial")?;
    let final_value = decimal_param(&params.final_value, "final")?;
    let years = decimal_param(&params.years, "years")?;

    Ok(Json(finance::cagr(initial, final_value, years)?))
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct SimpleInterestParams {
    #[serde(default)]
    principal: Option<String>,
    #[serde(default)]
    rate: Option<String>,
    #[serde(default)]
    years: Option<String>,
}

/// `GET /api/finance/simple-interest?principal=&rate=&years=`; `rate` is in
/// percent.
pub(super) async fn simple_interest(
    Query(params): Query<SimpleInterestParams>,
) -> Result<Json<SimpleInterestResult>, ApiError> {
    let principal = decimal_param(&params.principal, "principal")?;
    let rate = decimal_param(&params.rate, "rate")?;
    let years = decimal_param(&params.years, "years")?;

    Ok(Json(finance::simple_interest(principal, rate, years)?))
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct CompoundInterestParams {
    #[serde(default)]
    principal: Option<String>,
    #[serde(default)]
    rate: Option<String>,
    #[serde(default)]
    years: Option<String>,
    /// `monthly`, `quarterly`, ... or a number of periods per year.
    #[serde(default)]
    frequency: Option<String>,
    #[serde(default)]
    contribution: Option<String>,
}

/// `GET /api/finance/compound-interest?principal=&rate=&years=[&frequency=][&contribution=]`.
pub(super) async fn compound_interest(
    Query(params): Query<CompoundInterestParams>,
) -> Result<Json<CompoundInterestResult>, ApiError> {
    let years_raw = required(&params.years, "years")?;
    let years = years_raw
        .parse::<u32>()
        .map_err(|_| ApiError::BadRequest(format!("years must be a whole number, got '{years_raw}'")))?;

    let compounds_per_year = match params.frequency.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_COMPOUNDS_PER_YEAR,
        Some(raw) => CompoundingFrequency::parse_periods(raw)
            .ok_or_else(|| ApiError::BadRequest(format!("unknown frequency '{raw}'")))?,
    };

    let input = CompoundInterestInput {
        principal: decimal_param(&params.principal, "principal")?,
        annual_rate_percent: decimal_param(&params.rate, "rate")?,
        years,
        compounds_per_year,
        periodic_contribution: optional_decimal_param(&params.contribution, "contribution")?,
    };

    Ok(Json(finance::compound_interest(&input)?))
}
