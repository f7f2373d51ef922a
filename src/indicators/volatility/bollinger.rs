//! Bollinger Bands indicator

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, last_close, require_bars, require_period};
use crate::models::indicators::{BollingerBandsIndicator, IndicatorReading};
use crate::models::PriceSeries;

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (std_dev * population standard deviation)
/// Lower Band = Middle - (std_dev * population standard deviation)
pub fn calculate_bollinger_bands(
    series: &PriceSeries,
    period: usize,
    std_dev: f64,
) -> Result<BollingerBandsIndicator, IndicatorError> {
    require_period("bollinger", period)?;
    require_bars(series.len(), period)?;

    let insufficient = || IndicatorError::InsufficientData {
        required: period,
        got: series.len(),
    };
    let middle = math::sma(series.close(), period).ok_or_else(insufficient)?;
    let std = math::standard_deviation(series.close(), period).ok_or_else(insufficient)?;

    Ok(BollingerBandsIndicator {
        upper: finite("bollinger upper", middle + std_dev * std)?,
        middle: finite("bollinger middle", middle)?,
        lower: finite("bollinger lower", middle - std_dev * std)?,
        period,
        std_dev,
    })
}

/// Last close against the bands
pub fn bollinger_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let bands =
        calculate_bollinger_bands(series, params.bollinger_period, params.bollinger_std_dev)?;
    Ok(IndicatorReading::channel(
        last_close(series)?,
        bands.lower,
        bands.upper,
    ))
}
