//! Ichimoku conversion and base lines

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars, require_period};
use crate::models::indicators::{IchimokuIndicator, IndicatorReading};
use crate::models::PriceSeries;

/// Calculate the Ichimoku lines at the last bar.
///
/// Span A and span B are reported undisplaced: they are the values that will
/// be plotted `displacement` bars ahead. Span B is omitted while the series is
/// shorter than its period.
pub fn calculate_ichimoku(
    series: &PriceSeries,
    conversion_period: usize,
    base_period: usize,
    span_b_period: usize,
    displacement: usize,
) -> Result<IchimokuIndicator, IndicatorError> {
    require_period("ichimoku conversion", conversion_period)?;
    require_period("ichimoku base", base_period)?;
    require_period("ichimoku span b", span_b_period)?;
    require_bars(series.len(), conversion_period.max(base_period))?;

    let high = series.high();
    let low = series.low();
    let insufficient = || IndicatorError::InsufficientData {
        required: conversion_period.max(base_period),
        got: series.len(),
    };

    let conversion = finite(
        "ichimoku conversion",
        math::midpoint(high, low, conversion_period).ok_or_else(insufficient)?,
    )?;
    let base = finite(
        "ichimoku base",
        math::midpoint(high, low, base_period).ok_or_else(insufficient)?,
    )?;

    Ok(IchimokuIndicator {
        conversion,
        base,
        span_a: (conversion + base) / 2.0,
        span_b: math::midpoint(high, low, span_b_period),
        displacement,
    })
}

/// Conversion line against base line
pub fn ichimoku_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let ichimoku = calculate_ichimoku(
        series,
        params.ichimoku_conversion,
        params.ichimoku_base,
        params.ichimoku_span_b,
        params.ichimoku_displacement,
    )?;
    Ok(IndicatorReading::directional(
        ichimoku.conversion,
        ichimoku.base,
    ))
}
