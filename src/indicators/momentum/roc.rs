//! ROC (Rate of Change), in percent

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars, require_period};
use crate::models::indicators::{IndicatorReading, RocIndicator};
use crate::models::PriceSeries;

pub fn calculate_roc(series: &PriceSeries, period: usize) -> Result<RocIndicator, IndicatorError> {
    require_period("roc", period)?;
    require_bars(series.len(), period + 1)?;

    let close = series.close();
    let n = close.len();
    let reference = close[n - 1 - period];
    if reference == 0.0 {
        return Err(IndicatorError::ZeroDivisor {
            indicator: "roc".to_string(),
        });
    }

    Ok(RocIndicator {
        value: finite("roc", 100.0 * (close[n - 1] - reference) / reference)?,
        period,
    })
}

/// Positive rate of change against zero
pub fn roc_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let roc = calculate_roc(series, params.roc_period)?;
    Ok(IndicatorReading::directional(roc.value, 0.0))
}
