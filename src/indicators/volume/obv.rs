//! OBV (On-Balance Volume)

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars};
use crate::models::indicators::{IndicatorReading, ObvIndicator};
use crate::models::PriceSeries;

/// Running OBV at the last and the previous bar
pub fn calculate_obv(series: &PriceSeries) -> Result<ObvIndicator, IndicatorError> {
    require_bars(series.len(), 2)?;

    let close = series.close();
    let volume = series.volume();

    let mut obv = 0.0;
    let mut previous = 0.0;
    for i in 1..close.len() {
        previous = obv;
        if close[i] > close[i - 1] {
            obv += volume[i];
        } else if close[i] < close[i - 1] {
            obv -= volume[i];
        }
    }

    Ok(ObvIndicator {
        value: finite("obv", obv)?,
        previous: finite("obv", previous)?,
    })
}

/// OBV delta: last value against the previous one
pub fn obv_reading(
    series: &PriceSeries,
    _params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let obv = calculate_obv(series)?;
    Ok(IndicatorReading::directional(obv.value, obv.previous))
}
