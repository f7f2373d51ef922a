//! Short-horizon accumulation check: close[t] against close[t - lookback]

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{require_bars, require_period};
use crate::models::indicators::{AccumulationIndicator, IndicatorReading};
use crate::models::PriceSeries;

pub fn calculate_accumulation(
    series: &PriceSeries,
    lookback: usize,
) -> Result<AccumulationIndicator, IndicatorError> {
    require_period("accumulation", lookback)?;
    require_bars(series.len(), lookback + 1)?;

    let close = series.close();
    let n = close.len();
    Ok(AccumulationIndicator {
        close: close[n - 1],
        reference_close: close[n - 1 - lookback],
        lookback,
    })
}

pub fn accumulation_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let check = calculate_accumulation(series, params.accumulation_lookback)?;
    Ok(IndicatorReading::directional(
        check.close,
        check.reference_close,
    ))
}
