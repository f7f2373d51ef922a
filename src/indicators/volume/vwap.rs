//! VWAP anchored at the first bar of the series

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, last_close, require_bars};
use crate::models::indicators::{IndicatorReading, VwapIndicator};
use crate::models::PriceSeries;

/// Cumulative sum(TP * volume) / sum(volume)
pub fn calculate_vwap(series: &PriceSeries) -> Result<VwapIndicator, IndicatorError> {
    require_bars(series.len(), 1)?;

    let (weighted, total_volume) = series
        .typical_prices()
        .iter()
        .zip(series.volume())
        .fold((0.0, 0.0), |(weighted, total), (tp, volume)| {
            (weighted + tp * volume, total + volume)
        });

    if total_volume == 0.0 {
        return Err(IndicatorError::ZeroDivisor {
            indicator: "vwap".to_string(),
        });
    }

    Ok(VwapIndicator {
        value: finite("vwap", weighted / total_volume)?,
    })
}

pub fn vwap_reading(
    series: &PriceSeries,
    _params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let vwap = calculate_vwap(series)?;
    Ok(IndicatorReading::directional(last_close(series)?, vwap.value))
}
