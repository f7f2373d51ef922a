//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, last_close, require_bars, require_period};
use crate::models::indicators::{IndicatorReading, SmaIndicator};
use crate::models::PriceSeries;

/// Calculate the SMA of closes over the last `period` bars
pub fn calculate_sma(series: &PriceSeries, period: usize) -> Result<SmaIndicator, IndicatorError> {
    require_period("sma", period)?;
    require_bars(series.len(), period)?;

    let value = math::sma(series.close(), period).ok_or(IndicatorError::InsufficientData {
        required: period,
        got: series.len(),
    })?;

    Ok(SmaIndicator {
        value: finite("sma", value)?,
        period,
    })
}

/// Last close against the SMA
pub fn sma_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let sma = calculate_sma(series, params.sma_period)?;
    let close = last_close(series)?;
    Ok(IndicatorReading::directional(close, sma.value))
}
