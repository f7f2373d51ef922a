//! Donchian channel over the bars preceding the last one, for breakout checks

use crate::common::math;
use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, last_close, require_bars, require_period};
use crate::models::indicators::{DonchianIndicator, IndicatorReading};
use crate::models::PriceSeries;

pub fn donchian_lookback(period: usize) -> usize {
    period + 1
}

/// Highest high / lowest low of the `period` bars before the last bar
pub fn calculate_donchian(
    series: &PriceSeries,
    period: usize,
) -> Result<DonchianIndicator, IndicatorError> {
    require_period("donchian", period)?;
    require_bars(series.len(), donchian_lookback(period))?;

    let n = series.len();
    let window = n - 1 - period..n - 1;
    let insufficient = || IndicatorError::InsufficientData {
        required: donchian_lookback(period),
        got: n,
    };
    let upper = math::highest(&series.high()[window.clone()]).ok_or_else(insufficient)?;
    let lower = math::lowest(&series.low()[window]).ok_or_else(insufficient)?;

    Ok(DonchianIndicator {
        upper: finite("donchian upper", upper)?,
        middle: (upper + lower) / 2.0,
        lower: finite("donchian lower", lower)?,
        period,
    })
}

/// Last close against the prior channel
pub fn donchian_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let channel = calculate_donchian(series, params.donchian_period)?;
    Ok(IndicatorReading::channel(
        last_close(series)?,
        channel.lower,
        channel.upper,
    ))
}
