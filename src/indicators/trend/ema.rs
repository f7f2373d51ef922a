//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, last_close, require_bars, require_period};
use crate::models::indicators::{EmaIndicator, IndicatorReading};
use crate::models::PriceSeries;

/// Calculate EMA for a specific period
pub fn calculate_ema(series: &PriceSeries, period: usize) -> Result<EmaIndicator, IndicatorError> {
    require_period("ema", period)?;
    require_bars(series.len(), period)?;

    let value = math::ema(series.close(), period).ok_or(IndicatorError::InsufficientData {
        required: period,
        got: series.len(),
    })?;

    Ok(EmaIndicator {
        value: finite("ema", value)?,
        period,
    })
}

/// Calculate multiple EMAs at once, skipping periods the series cannot cover
pub fn calculate_emas(series: &PriceSeries, periods: &[usize]) -> Vec<EmaIndicator> {
    periods
        .iter()
        .filter_map(|&period| calculate_ema(series, period).ok())
        .collect()
}

/// Last close against the EMA
pub fn ema_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let ema = calculate_ema(series, params.ema_period)?;
    Ok(IndicatorReading::directional(last_close(series)?, ema.value))
}
