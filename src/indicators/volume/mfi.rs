//! MFI (Money Flow Index), a volume-weighted RSI on a 0..100 scale

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars, require_period};
use crate::models::indicators::{IndicatorReading, MfiIndicator};
use crate::models::PriceSeries;

pub fn calculate_mfi(series: &PriceSeries, period: usize) -> Result<MfiIndicator, IndicatorError> {
    require_period("mfi", period)?;
    require_bars(series.len(), period + 1)?;

    let typical = series.typical_prices();
    let volume = series.volume();
    let n = typical.len();

    let mut positive_flow = 0.0;
    let mut negative_flow = 0.0;
    for i in n - period..n {
        let money_flow = typical[i] * volume[i];
        if typical[i] > typical[i - 1] {
            positive_flow += money_flow;
        } else if typical[i] < typical[i - 1] {
            negative_flow += money_flow;
        }
    }

    let value = if negative_flow == 0.0 {
        if positive_flow == 0.0 {
            50.0
        } else {
            100.0
        }
    } else {
        100.0 - 100.0 / (1.0 + positive_flow / negative_flow)
    };

    Ok(MfiIndicator {
        value: finite("mfi", value)?,
        period,
    })
}

pub fn mfi_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let mfi = calculate_mfi(series, params.mfi_period)?;
    Ok(IndicatorReading::banded(mfi.value))
}
