//! Parabolic SAR (Stop and Reverse)
//!
//! Walks the whole series once; the acceleration factor grows by `step`
//! each time the extreme point advances, capped at `max`.

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, last_close, require_bars};
use crate::models::indicators::{IndicatorReading, ParabolicSarIndicator};
use crate::models::PriceSeries;

pub fn calculate_parabolic_sar(
    series: &PriceSeries,
    step: f64,
    max: f64,
) -> Result<ParabolicSarIndicator, IndicatorError> {
    if step <= 0.0 || max < step {
        return Err(IndicatorError::InvalidParameter(format!(
            "parabolic sar step {} / max {}",
            step, max
        )));
    }
    require_bars(series.len(), 2)?;

    let high = series.high();
    let low = series.low();

    let mut is_bullish = high[1] > high[0];
    let mut af = step;
    let mut ep = if is_bullish { high[0] } else { low[0] };
    let mut sar = if is_bullish { low[0] } else { high[0] };

    for i in 1..series.len() {
        sar += af * (ep - sar);

        if is_bullish {
            // SAR cannot sit above the prior two lows
            sar = sar.min(low[i - 1]);
            if i >= 2 {
                sar = sar.min(low[i - 2]);
            }

            if low[i] < sar {
                is_bullish = false;
                sar = ep;
                ep = low[i];
                af = step;
            } else if high[i] > ep {
                ep = high[i];
                af = (af + step).min(max);
            }
        } else {
            // SAR cannot sit below the prior two highs
            sar = sar.max(high[i - 1]);
            if i >= 2 {
                sar = sar.max(high[i - 2]);
            }

            if high[i] > sar {
                is_bullish = true;
                sar = ep;
                ep = high[i];
                af = step;
            } else if low[i] < ep {
                ep = low[i];
                af = (af + step).min(max);
            }
        }
    }

    Ok(ParabolicSarIndicator {
        value: finite("parabolic sar", sar)?,
        trend: if is_bullish { 1 } else { -1 },
    })
}

/// Last close against the SAR
pub fn parabolic_sar_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let sar = calculate_parabolic_sar(series, params.sar_step, params.sar_max)?;
    Ok(IndicatorReading::directional(last_close(series)?, sar.value))
}
