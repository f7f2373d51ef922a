use crate::indicators::error::IndicatorError;
use crate::models::PriceSeries;

/// Fail with `InsufficientData` when fewer than `required` bars are available
pub fn require_bars(available: usize, required: usize) -> Result<(), IndicatorError> {
    if available < required {
        return Err(IndicatorError::InsufficientData {
            required,
            got: available,
        });
    }
    Ok(())
}

pub fn require_period(name: &str, period: usize) -> Result<(), IndicatorError> {
    if period == 0 {
        return Err(IndicatorError::InvalidParameter(format!(
            "{} period must be greater than zero",
            name
        )));
    }
    Ok(())
}

/// Pass `value` through, or fail with `NonFinite` naming the indicator
pub fn finite(indicator: &str, value: f64) -> Result<f64, IndicatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IndicatorError::NonFinite {
            indicator: indicator.to_string(),
        })
    }
}

/// Last element of a computed series
pub fn last(indicator: &str, values: &[f64]) -> Result<f64, IndicatorError> {
    let value = values.last().copied().ok_or(IndicatorError::InsufficientData {
        required: 1,
        got: 0,
    })?;
    finite(indicator, value)
}

pub fn last_close(series: &PriceSeries) -> Result<f64, IndicatorError> {
    series
        .last_close()
        .ok_or(IndicatorError::InsufficientData { required: 1, got: 0 })
}
