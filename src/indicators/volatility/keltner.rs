//! Keltner channel approximation: EMA midline with ATR bands

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::trend::ema::calculate_ema;
use crate::indicators::validation::last_close;
use crate::indicators::volatility::atr::{atr_lookback, calculate_atr};
use crate::models::indicators::{IndicatorReading, KeltnerIndicator};
use crate::models::PriceSeries;

pub fn keltner_lookback(ema_period: usize, atr_period: usize) -> usize {
    ema_period.max(atr_lookback(atr_period))
}

pub fn calculate_keltner(
    series: &PriceSeries,
    ema_period: usize,
    atr_period: usize,
    multiplier: f64,
) -> Result<KeltnerIndicator, IndicatorError> {
    let middle = calculate_ema(series, ema_period)?.value;
    let atr = calculate_atr(series, atr_period)?.value;

    Ok(KeltnerIndicator {
        upper: middle + multiplier * atr,
        middle,
        lower: middle - multiplier * atr,
    })
}

/// Votes with the EMA midline direction
pub fn keltner_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let channel = calculate_keltner(
        series,
        params.ema_period,
        params.atr_period,
        params.keltner_atr_multiplier,
    )?;
    Ok(IndicatorReading::directional(
        last_close(series)?,
        channel.middle,
    ))
}
