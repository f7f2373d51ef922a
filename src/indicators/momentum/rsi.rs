//! RSI (Relative Strength Index) indicator

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars, require_period};
use crate::models::indicators::{IndicatorReading, RsiIndicator};
use crate::models::PriceSeries;

/// Calculate RSI indicator with Wilder's smoothing
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss
pub fn calculate_rsi(series: &PriceSeries, period: usize) -> Result<RsiIndicator, IndicatorError> {
    require_period("rsi", period)?;
    require_bars(series.len(), period + 1)?;

    let closes = series.close();
    let changes: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();

    let period_f = period as f64;
    let mut avg_gain = changes[..period].iter().map(|c| c.max(0.0)).sum::<f64>() / period_f;
    let mut avg_loss = changes[..period].iter().map(|c| (-c).max(0.0)).sum::<f64>() / period_f;

    for &change in &changes[period..] {
        avg_gain = (avg_gain * (period_f - 1.0) + change.max(0.0)) / period_f;
        avg_loss = (avg_loss * (period_f - 1.0) + (-change).max(0.0)) / period_f;
    }

    let value = if avg_loss == 0.0 {
        // No losses: saturated, unless the series never moved at all
        if avg_gain == 0.0 {
            50.0
        } else {
            100.0
        }
    } else {
        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    };

    Ok(RsiIndicator {
        value: finite("rsi", value)?,
        period,
    })
}

pub fn rsi_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let rsi = calculate_rsi(series, params.rsi_period)?;
    Ok(IndicatorReading::banded(rsi.value))
}
