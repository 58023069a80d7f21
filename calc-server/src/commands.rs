//! One-shot CLI commands. Each returns the text to print.

use std::fmt::Write as _;

use anyhow::{Context, Result, anyhow, bail};
use calc_core::CalculatorRepository;
use calc_core::calculations::common::format_value;
use calc_core::calculations::finance::{self, CompoundingFrequency};
use calc_core::calculations::health::{Sex, estimate_stride_length, steps_to_distance};
use calc_core::calculations::{
    CompoundInterestInput, Quantity, YearProjection, parse_decimal_input, parse_input,
    reference_table,
};
use rust_decimal::Decimal;

fn quantity(raw: &str) -> Result<Quantity> {
    Quantity::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = Quantity::ALL.iter().map(|q| q.as_str()).collect();
        anyhow!("unknown quantity '{raw}'; expected one of: {}", known.join(", "))
    })
}

fn decimal(
    raw: &str,
    name: &str,
) -> Result<Decimal> {
    parse_decimal_input(raw).with_context(|| format!("invalid {name}"))
}

pub fn convert(
    quantity_raw: &str,
    value_raw: &str,
    from: &str,
    to: &str,
    decimals: usize,
) -> Result<String> {
    let quantity = quantity(quantity_raw)?;
    let from = quantity.find_unit(from)?;
    let to = quantity.find_unit(to)?;
    let value = parse_input(value_raw).context("invalid value")?;

    let result = calc_core::calculations::convert(quantity, value, from.key, to.key)?;

    Ok(format!(
        "{} {} = {} {}",
        format_value(value, decimals),
        from.symbol,
        format_value(result, decimals),
        to.symbol
    ))
}

pub fn units(quantity_raw: Option<&str>) -> Result<String> {
    let quantities = match quantity_raw {
        Some(raw) => vec![quantity(raw)?],
        None => Quantity::ALL.to_vec(),
    };

    let mut out = String::new();
    for quantity in quantities {
        writeln!(out, "{quantity} (base: {})", quantity.base_unit())?;
        for unit in quantity.units() {
            writeln!(out, "  {:<12} {:<8} {}", unit.key, unit.symbol, unit.name)?;
        }
    }
    Ok(out)
}

pub fn reference(
    quantity_raw: &str,
    from: &str,
    to: &str,
    samples: &[f64],
) -> Result<String> {
    let quantity = quantity(quantity_raw)?;
    let from = quantity.find_unit(from)?;
    let to = quantity.find_unit(to)?;

    let mut out = String::new();
    for row in reference_table(quantity, from.key, to.key, samples)? {
        writeln!(
            out,
            "{:>10} {} = {} {}",
            format_value(row.input, 4),
            from.symbol,
            row.formatted,
            to.symbol
        )?;
    }
    Ok(out)
}

pub fn cagr(
    initial: &str,
    final_value: &str,
    years: &str,
) -> Result<String> {
    let result = finance::cagr(
        decimal(initial, "initial value")?,
        decimal(final_value, "final value")?,
        decimal(years, "years")?,
    )?;

    Ok(format!(
        "CAGR: {}%\nAbsolute return: {}\nTotal return: {}%\n",
        result.percent, result.absolute_return, result.total_return_percent
    ))
}

fn projection_table(projection: &[YearProjection]) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "{:>6} {:>16} {:>16} {:>16}",
        "year", "contributions", "interest", "balance"
    )?;
    for point in projection {
        writeln!(
            out,
            "{:>6} {:>16} {:>16} {:>16}",
            point.year, point.contributions, point.interest, point.balance
        )?;
    }
    Ok(out)
}

pub fn simple_interest(
    principal: &str,
    rate: &str,
    years: &str,
) -> Result<String> {
    let result = finance::simple_interest(
        decimal(principal, "principal")?,
        decimal(rate, "rate")?,
        decimal(years, "years")?,
    )?;

    Ok(format!(
        "Interest: {}\nTotal: {}\n\n{}",
        result.interest,
        result.total,
        projection_table(&result.projection)?
    ))
}

pub fn compound_interest(
    principal: &str,
    rate: &str,
    years: u32,
    frequency: &str,
    contribution: &str,
) -> Result<String> {
    let compounds_per_year = CompoundingFrequency::parse_periods(frequency)
        .ok_or_else(|| anyhow!("unknown compounding frequency '{frequency}'"))?;

    let result = finance::compound_interest(&CompoundInterestInput {
        principal: decimal(principal, "principal")?,
        annual_rate_percent: decimal(rate, "rate")?,
        years,
        compounds_per_year,
        periodic_contribution: decimal(contribution, "contribution")?,
    })?;

    Ok(format!(
        "Final balance: {}\nTotal contributions: {}\nTotal interest: {}\nEffective annual rate: {}%\n\n{}",
        result.final_balance,
        result.total_contributions,
        result.total_interest,
        result.effective_annual_rate_percent,
        projection_table(&result.projection)?
    ))
}

/// Distance walked in `steps`, using `stride_m` or a stride estimated from
/// `height_cm`.
pub fn steps(
    steps: f64,
    stride_m: Option<f64>,
    height_cm: Option<f64>,
    sex: &str,
) -> Result<String> {
    if steps < 0.0 {
        bail!("steps cannot be negative");
    }
    let stride = match (stride_m, height_cm) {
        (Some(stride), _) => stride,
        (None, Some(height)) => {
            let sex = Sex::parse(sex).ok_or_else(|| anyhow!("unknown sex '{sex}'"))?;
            estimate_stride_length(height, sex)
        }
        (None, None) => bail!("provide --stride or --height"),
    };
    if stride <= 0.0 {
        bail!("stride must be greater than zero");
    }

    let distance = steps_to_distance(steps, stride);
    Ok(format!(
        "Stride: {} m\nDistance: {} m = {} km = {} mi\n",
        format_value(stride, 3),
        format_value(distance.meters, 2),
        format_value(distance.kilometers, 3),
        format_value(distance.miles, 3)
    ))
}

pub async fn search(
    repo: &dyn CalculatorRepository,
    query: &str,
    limit: u32,
) -> Result<String> {
    let results = repo.search(query, limit).await?;
    if results.is_empty() {
        return Ok(format!("No calculators match '{}'\n", query.trim()));
    }

    let mut out = String::new();
    for calculator in results {
        writeln!(
            out,
            "{:<34} {:<12} {}",
            calculator.name, calculator.category, calculator.url
        )?;
    }
    Ok(out)
}
