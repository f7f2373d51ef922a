//! Validated OHLCV input series

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::indicators::Candle;

/// Malformed caller input, rejected before any indicator runs
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error(
        "series lengths differ: open={open}, high={high}, low={low}, close={close}, volume={volume}"
    )]
    LengthMismatch {
        open: usize,
        high: usize,
        low: usize,
        close: usize,
        volume: usize,
    },

    #[error("non-finite {field} value at index {index}")]
    NonFinite { field: &'static str, index: usize },
}

/// Wire shape of a series before validation
#[derive(Debug, Clone, Deserialize)]
pub struct RawSeries {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub volume: Vec<f64>,
}

/// Oldest-first OHLCV bars. All five columns have equal length and hold only
/// finite values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct PriceSeries {
    open: Vec<f64>,
    high: Vec<f64>,
    low: Vec<f64>,
    close: Vec<f64>,
    volume: Vec<f64>,
}

impl PriceSeries {
    pub fn new(
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Result<Self, SeriesError> {
        let len = close.len();
        if [open.len(), high.len(), low.len(), volume.len()]
            .iter()
            .any(|&l| l != len)
        {
            return Err(SeriesError::LengthMismatch {
                open: open.len(),
                high: high.len(),
                low: low.len(),
                close: close.len(),
                volume: volume.len(),
            });
        }

        for (field, column) in [
            ("open", &open),
            ("high", &high),
            ("low", &low),
            ("close", &close),
            ("volume", &volume),
        ] {
            if let Some(index) = column.iter().position(|v| !v.is_finite()) {
                return Err(SeriesError::NonFinite { field, index });
            }
        }

        Ok(Self {
            open,
            high,
            low,
            close,
            volume,
        })
    }

    pub fn from_candles(candles: &[Candle]) -> Result<Self, SeriesError> {
        Self::new(
            candles.iter().map(|c| c.open).collect(),
            candles.iter().map(|c| c.high).collect(),
            candles.iter().map(|c| c.low).collect(),
            candles.iter().map(|c| c.close).collect(),
            candles.iter().map(|c| c.volume).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.close.len()
    }

    pub fn is_empty(&self) -> bool {
        self.close.is_empty()
    }

    pub fn open(&self) -> &[f64] {
        &self.open
    }

    pub fn high(&self) -> &[f64] {
        &self.high
    }

    pub fn low(&self) -> &[f64] {
        &self.low
    }

    pub fn close(&self) -> &[f64] {
        &self.close
    }

    pub fn volume(&self) -> &[f64] {
        &self.volume
    }

    pub fn last_close(&self) -> Option<f64> {
        self.close.last().copied()
    }

    /// (high + low + close) / 3 per bar
    pub fn typical_prices(&self) -> Vec<f64> {
        self.high
            .iter()
            .zip(&self.low)
            .zip(&self.close)
            .map(|((h, l), c)| (h + l + c) / 3.0)
            .collect()
    }
}

impl TryFrom<RawSeries> for PriceSeries {
    type Error = SeriesError;

    fn try_from(raw: RawSeries) -> Result<Self, Self::Error> {
        Self::new(raw.open, raw.high, raw.low, raw.close, raw.volume)
    }
}
