//! ADX (Average Directional Index) indicator
//!
//! ADX measures trend strength regardless of direction. +DI and -DI carry
//! the direction and are reported alongside it.

use crate::config::IndicatorParams;
use crate::indicators::error::IndicatorError;
use crate::indicators::validation::{finite, require_bars, require_period};
use crate::models::indicators::{AdxIndicator, IndicatorReading};
use crate::models::PriceSeries;

/// Bars needed for one ADX value: `period` transitions to seed the
/// smoothed DM/TR and another `period` DX values to seed the ADX
pub fn adx_lookback(period: usize) -> usize {
    2 * period
}

/// Calculate ADX with Wilder's smoothing
pub fn calculate_adx(series: &PriceSeries, period: usize) -> Result<AdxIndicator, IndicatorError> {
    require_period("adx", period)?;
    require_bars(series.len(), adx_lookback(period))?;

    let high = series.high();
    let low = series.low();
    let close = series.close();
    let bar_count = series.len() - 1;

    let mut plus_dm = Vec::with_capacity(bar_count);
    let mut minus_dm = Vec::with_capacity(bar_count);
    let mut tr_values = Vec::with_capacity(bar_count);

    for i in 1..series.len() {
        let up_move = high[i] - high[i - 1];
        let down_move = low[i - 1] - low[i];

        plus_dm.push(if up_move > down_move && up_move > 0.0 {
            up_move
        } else {
            0.0
        });
        minus_dm.push(if down_move > up_move && down_move > 0.0 {
            down_move
        } else {
            0.0
        });
        tr_values.push(crate::common::math::true_range(
            high[i],
            low[i],
            close[i - 1],
        ));
    }

    let period_f = period as f64;
    let mut smooth_plus_dm: f64 = plus_dm[..period].iter().sum();
    let mut smooth_minus_dm: f64 = minus_dm[..period].iter().sum();
    let mut smooth_tr: f64 = tr_values[..period].iter().sum();

    let mut dx_values = Vec::with_capacity(bar_count - period + 1);
    let (mut plus_di, mut minus_di) = directional_indices(smooth_plus_dm, smooth_minus_dm, smooth_tr);
    dx_values.push(dx(plus_di, minus_di));

    for i in period..bar_count {
        smooth_plus_dm = smooth_plus_dm - smooth_plus_dm / period_f + plus_dm[i];
        smooth_minus_dm = smooth_minus_dm - smooth_minus_dm / period_f + minus_dm[i];
        smooth_tr = smooth_tr - smooth_tr / period_f + tr_values[i];

        (plus_di, minus_di) = directional_indices(smooth_plus_dm, smooth_minus_dm, smooth_tr);
        dx_values.push(dx(plus_di, minus_di));
    }

    if dx_values.len() < period {
        return Err(IndicatorError::InsufficientData {
            required: adx_lookback(period),
            got: series.len(),
        });
    }

    let mut adx = dx_values[..period].iter().sum::<f64>() / period_f;
    for &value in &dx_values[period..] {
        adx = (adx * (period_f - 1.0) + value) / period_f;
    }

    Ok(AdxIndicator {
        value: finite("adx", adx)?,
        plus_di: finite("adx +di", plus_di)?,
        minus_di: finite("adx -di", minus_di)?,
        period,
    })
}

/// +DI / -DI from smoothed values; a range-less market has no directional movement
fn directional_indices(smooth_plus_dm: f64, smooth_minus_dm: f64, smooth_tr: f64) -> (f64, f64) {
    if smooth_tr == 0.0 {
        return (0.0, 0.0);
    }
    (
        100.0 * smooth_plus_dm / smooth_tr,
        100.0 * smooth_minus_dm / smooth_tr,
    )
}

fn dx(plus_di: f64, minus_di: f64) -> f64 {
    let di_sum = plus_di + minus_di;
    if di_sum == 0.0 {
        0.0
    } else {
        100.0 * (plus_di - minus_di).abs() / di_sum
    }
}

/// ADX strength gating +DI (bullish) against -DI (bearish)
pub fn adx_reading(
    series: &PriceSeries,
    params: &IndicatorParams,
) -> Result<IndicatorReading, IndicatorError> {
    let adx = calculate_adx(series, params.adx_period)?;
    Ok(IndicatorReading::gated(adx.value, adx.plus_di, adx.minus_di))
}
