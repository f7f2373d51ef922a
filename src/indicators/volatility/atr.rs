//! ATR (Average True Range) indicator

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars, require_period};
use crate::models::indicators::{AtrIndicator, IndicatorReading};
use crate::models::PriceSeries;

/// Bars needed for the current and the previous ATR value
pub fn atr_lookback(period: usize) -> usize {
    period + 2
}

/// Calculate ATR with Wilder's smoothing over the true ranges
pub fn calculate_atr(series: &PriceSeries, period: usize) -> Result<AtrIndicator, IndicatorError> {
    require_period("atr", period)?;
    require_bars(series.len(), atr_lookback(period))?;

    let tr_values = math::true_ranges(series.high(), series.low(), series.close());
    let atr_values = math::wilder_series(&tr_values, period);
    if atr_values.len() < 2 {
        return Err(IndicatorError::InsufficientData {
            required: atr_lookback(period),
            got: series.len(),
        });
    }

    Ok(AtrIndicator {
        value: finite("atr", atr_values[atr_values.len() - 1])?,
        previous: finite("atr", atr_values[atr_values.len() - 2])?,
        period,
    })
}

/// Expanding ATR gates a vote on the direction of the last close
pub fn atr_trend_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let atr = calculate_atr(series, params.atr_period)?;
    let close = series.close();
    let n = close.len();
    Ok(IndicatorReading::gated(
        atr.value - atr.previous,
        close[n - 1],
        close[n - 2],
    ))
}
