//! Williams %R, on its native -100..0 scale

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars, require_period};
use crate::models::indicators::{IndicatorReading, WilliamsRIndicator};
use crate::models::PriceSeries;

pub fn calculate_williams_r(
    series: &PriceSeries,
    period: usize,
) -> Result<WilliamsRIndicator, IndicatorError> {
    require_period("williams %r", period)?;
    require_bars(series.len(), period)?;

    let n = series.len();
    let insufficient = || IndicatorError::InsufficientData {
        required: period,
        got: n,
    };
    let highest = math::highest(&series.high()[n - period..]).ok_or_else(insufficient)?;
    let lowest = math::lowest(&series.low()[n - period..]).ok_or_else(insufficient)?;
    let close = series.close()[n - 1];

    let range = highest - lowest;
    let value = if range == 0.0 {
        -50.0
    } else {
        -100.0 * (highest - close) / range
    };

    Ok(WilliamsRIndicator {
        value: finite("williams %r", value)?,
        period,
    })
}

pub fn williams_r_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let williams = calculate_williams_r(series, params.williams_period)?;
    Ok(IndicatorReading::banded(williams.value))
}
