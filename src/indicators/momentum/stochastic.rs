//! Stochastic oscillator (%K / %D)

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars, require_period};
use crate::models::indicators::{IndicatorReading, StochasticIndicator};
use crate::models::PriceSeries;

pub fn stochastic_lookback(k_period: usize, d_period: usize) -> usize {
    k_period + d_period - 1
}

/// %K compares the close with the `k_period` high/low range; %D is the SMA
/// of the last `d_period` %K values
pub fn calculate_stochastic(
    series: &PriceSeries,
    k_period: usize,
    d_period: usize,
) -> Result<StochasticIndicator, IndicatorError> {
    require_period("stochastic %k", k_period)?;
    require_period("stochastic %d", d_period)?;
    require_bars(series.len(), stochastic_lookback(k_period, d_period))?;

    let high = series.high();
    let low = series.low();
    let close = series.close();
    let n = series.len();

    let k_values: Vec<f64> = (n - d_period..n)
        .map(|i| {
            let start = i + 1 - k_period;
            let highest = math::highest(&high[start..=i]).unwrap_or(high[i]);
            let lowest = math::lowest(&low[start..=i]).unwrap_or(low[i]);
            let range = highest - lowest;
            if range == 0.0 {
                50.0
            } else {
                100.0 * (close[i] - lowest) / range
            }
        })
        .collect();

    let k = k_values[k_values.len() - 1];
    let d = k_values.iter().sum::<f64>() / d_period as f64;

    Ok(StochasticIndicator {
        k: finite("stochastic %k", k)?,
        d: finite("stochastic %d", d)?,
        k_period,
        d_period,
    })
}

/// Votes on %K
pub fn stochastic_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let stochastic = calculate_stochastic(series, params.stochastic_k, params.stochastic_d)?;
    Ok(IndicatorReading::banded(stochastic.k))
}
