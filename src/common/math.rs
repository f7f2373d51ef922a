//! Numeric primitives shared by the indicator calculations
//!
//! Series helpers return only the valid portion of the output: an `n`-value
//! input with lookback `period` yields `n - period + 1` values, the first one
//! aligned with input index `period - 1`.

/// Simple moving average over the last `period` values
pub fn sma(values: &[f64], period: usize) -> Option<f64> {
    if period == 0 || values.len() < period {
        return None;
    }
    let window = &values[values.len() - period..];
    Some(window.iter().sum::<f64>() / period as f64)
}

/// Rolling simple moving average
pub fn sma_series(values: &[f64], period: usize) -> Vec<f64> {
    if period == 0 || values.len() < period {
        return Vec::new();
    }
    values
        .windows(period)
        .map(|window| window.iter().sum::<f64>() / period as f64)
        .collect()
}

/// Next EMA value given the previous one
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let alpha = 2.0 / (period as f64 + 1.0);
    alpha * value + (1.0 - alpha) * previous
}

/// Exponential moving average series seeded with the SMA of the first `period` values
pub fn ema_series(values: &[f64], period: usize) -> Vec<f64> {
    let Some(seed) = sma(&values[..period.min(values.len())], period) else {
        return Vec::new();
    };

    let mut result = Vec::with_capacity(values.len() - period + 1);
    result.push(seed);
    let mut previous = seed;
    for &value in &values[period..] {
        previous = ema_from_previous(value, previous, period);
        result.push(previous);
    }
    result
}

/// Latest EMA value
pub fn ema(values: &[f64], period: usize) -> Option<f64> {
    ema_series(values, period).last().copied()
}

/// Wilder's smoothing (RMA), seeded with the SMA of the first `period` values
pub fn wilder_series(values: &[f64], period: usize) -> Vec<f64> {
    let Some(seed) = sma(&values[..period.min(values.len())], period) else {
        return Vec::new();
    };

    let period_f = period as f64;
    let mut result = Vec::with_capacity(values.len() - period + 1);
    result.push(seed);
    let mut previous = seed;
    for &value in &values[period..] {
        previous = (previous * (period_f - 1.0) + value) / period_f;
        result.push(previous);
    }
    result
}

/// Population standard deviation over the last `period` values
pub fn standard_deviation(values: &[f64], period: usize) -> Option<f64> {
    let mean = sma(values, period)?;
    let window = &values[values.len() - period..];
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / period as f64;
    Some(variance.sqrt())
}

/// True range of a bar given the previous close
pub fn true_range(high: f64, low: f64, prev_close: f64) -> f64 {
    (high - low)
        .max((high - prev_close).abs())
        .max((low - prev_close).abs())
}

/// True range for every bar after the first
pub fn true_ranges(high: &[f64], low: &[f64], close: &[f64]) -> Vec<f64> {
    (1..close.len())
        .map(|i| true_range(high[i], low[i], close[i - 1]))
        .collect()
}

pub fn highest(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

pub fn lowest(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Midpoint of the highest high and lowest low over the last `period` bars
pub fn midpoint(high: &[f64], low: &[f64], period: usize) -> Option<f64> {
    if period == 0 || high.len() < period || low.len() < period {
        return None;
    }
    let hh = highest(&high[high.len() - period..])?;
    let ll = lowest(&low[low.len() - period..])?;
    Some((hh + ll) / 2.0)
}
