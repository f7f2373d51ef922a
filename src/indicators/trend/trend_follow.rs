//! ATR trend-follow check: did the last close clear the previous close by
//! at least `multiplier` ATRs?

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::volatility::atr::{atr_lookback, calculate_atr};
use crate::models::indicators::{IndicatorReading, TrendFollowIndicator};
use crate::models::PriceSeries;

pub fn calculate_trend_follow(
    series: &PriceSeries,
    atr_period: usize,
    multiplier: f64,
) -> Result<TrendFollowIndicator, IndicatorError> {
    let atr = calculate_atr(series, atr_period)?;
    let close = series.close();
    let n = close.len();

    Ok(TrendFollowIndicator {
        close: close[n - 1],
        previous_close: close[n - 2],
        atr: atr.value,
        multiplier,
    })
}

pub fn trend_follow_lookback(atr_period: usize) -> usize {
    atr_lookback(atr_period)
}

/// Last close against previous close plus ATR
pub fn trend_follow_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let check = calculate_trend_follow(
        series,
        params.atr_period,
        params.trend_follow_atr_multiplier,
    )?;
    Ok(IndicatorReading::directional(check.close, check.hurdle()))
}
