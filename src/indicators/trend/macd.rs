//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, last, require_bars, require_period};
use crate::models::indicators::{IndicatorReading, MacdIndicator};
use crate::models::PriceSeries;

/// Bars needed before the first signal-line value exists
pub fn macd_lookback(slow_period: usize, signal_period: usize) -> usize {
    slow_period + signal_period - 1
}

/// Calculate MACD indicator
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Histogram = MACD - Signal
pub fn calculate_macd(
    series: &PriceSeries,
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Result<MacdIndicator, IndicatorError> {
    require_period("macd fast", fast_period)?;
    require_period("macd slow", slow_period)?;
    require_period("macd signal", signal_period)?;
    if fast_period >= slow_period {
        return Err(IndicatorError::InvalidParameter(format!(
            "macd fast period {} must be shorter than slow period {}",
            fast_period, slow_period
        )));
    }
    require_bars(series.len(), macd_lookback(slow_period, signal_period))?;

    let closes = series.close();
    let fast = math::ema_series(closes, fast_period);
    let slow = math::ema_series(closes, slow_period);

    // Align both series on the first bar where the slow EMA exists
    let offset = slow_period - fast_period;
    let macd_values: Vec<f64> = slow
        .iter()
        .enumerate()
        .map(|(i, slow_value)| fast[i + offset] - slow_value)
        .collect();

    let signal_values = math::ema_series(&macd_values, signal_period);
    let macd_line = last("macd", &macd_values)?;
    let signal_line = last("macd signal", &signal_values)?;

    Ok(MacdIndicator {
        macd: macd_line,
        signal: signal_line,
        histogram: finite("macd histogram", macd_line - signal_line)?,
        period: (fast_period, slow_period, signal_period),
    })
}

/// MACD line against its signal line
pub fn macd_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let macd = calculate_macd(series, params.macd_fast, params.macd_slow, params.macd_signal)?;
    Ok(IndicatorReading::directional(macd.macd, macd.signal))
}
