//! CCI (Commodity Channel Index)

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars, require_period};
use crate::models::indicators::{CciIndicator, IndicatorReading};
use crate::models::PriceSeries;

const LAMBERT_CONSTANT: f64 = 0.015;

/// CCI = (TP - SMA(TP)) / (0.015 * mean deviation), TP = (H + L + C) / 3
pub fn calculate_cci(series: &PriceSeries, period: usize) -> Result<CciIndicator, IndicatorError> {
    require_period("cci", period)?;
    require_bars(series.len(), period)?;

    let typical = series.typical_prices();
    let window = &typical[typical.len() - period..];
    let mean = window.iter().sum::<f64>() / period as f64;
    let mean_deviation = window.iter().map(|tp| (tp - mean).abs()).sum::<f64>() / period as f64;

    let value = if mean_deviation == 0.0 {
        0.0
    } else {
        (window[period - 1] - mean) / (LAMBERT_CONSTANT * mean_deviation)
    };

    Ok(CciIndicator {
        value: finite("cci", value)?,
        period,
    })
}

pub fn cci_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let cci = calculate_cci(series, params.cci_period)?;
    Ok(IndicatorReading::banded(cci.value))
}
