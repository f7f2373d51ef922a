use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One OHLCV bar as delivered by a market-data collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmaIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmaIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacdIndicator {
    pub macd: f64,
    pub signal: f64,
    pub histogram: f64,
    pub period: (usize, usize, usize),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdxIndicator {
    pub value: f64,
    pub plus_di: f64,
    pub minus_di: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParabolicSarIndicator {
    pub value: f64,
    /// 1 while the SAR sits below price, -1 while above
    pub trend: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IchimokuIndicator {
    pub conversion: f64,
    pub base: f64,
    pub span_a: f64,
    /// Absent until the series covers the span B period
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span_b: Option<f64>,
    pub displacement: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtrIndicator {
    pub value: f64,
    /// ATR one bar earlier
    pub previous: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendFollowIndicator {
    pub close: f64,
    pub previous_close: f64,
    pub atr: f64,
    pub multiplier: f64,
}

impl TrendFollowIndicator {
    /// Level the last close must clear to count as trend continuation
    pub fn hurdle(&self) -> f64 {
        self.previous_close + self.multiplier * self.atr
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StochasticIndicator {
    pub k: f64,
    pub d: f64,
    pub k_period: usize,
    pub d_period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CciIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WilliamsRIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RocIndicator {
    /// Percent change over the period
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BollingerBandsIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
    pub period: usize,
    pub std_dev: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonchianIndicator {
    /// Highest high of the window preceding the last bar
    pub upper: f64,
    pub middle: f64,
    /// Lowest low of the window preceding the last bar
    pub lower: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeltnerIndicator {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObvIndicator {
    pub value: f64,
    pub previous: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MfiIndicator {
    pub value: f64,
    pub period: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VwapIndicator {
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccumulationIndicator {
    pub close: f64,
    pub reference_close: f64,
    pub lookback: usize,
}

/// Normalized shape of an indicator output, ready for voting
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndicatorReading {
    /// A probe (usually the last close) against a reference level
    Directional { probe: f64, reference: f64 },
    /// An oscillator value on its native scale
    Banded { value: f64 },
    /// Price against a lower/upper channel
    Channel { price: f64, lower: f64, upper: f64 },
    /// Trend strength plus the bullish/bearish components it gates
    Gated {
        strength: f64,
        bullish: f64,
        bearish: f64,
    },
}

impl IndicatorReading {
    pub fn directional(probe: f64, reference: f64) -> Self {
        Self::Directional { probe, reference }
    }

    pub fn banded(value: f64) -> Self {
        Self::Banded { value }
    }

    pub fn channel(price: f64, lower: f64, upper: f64) -> Self {
        Self::Channel {
            price,
            lower,
            upper,
        }
    }

    pub fn gated(strength: f64, bullish: f64, bearish: f64) -> Self {
        Self::Gated {
            strength,
            bullish,
            bearish,
        }
    }

    pub fn is_finite(&self) -> bool {
        match *self {
            Self::Directional { probe, reference } => probe.is_finite() && reference.is_finite(),
            Self::Banded { value } => value.is_finite(),
            Self::Channel {
                price,
                lower,
                upper,
            } => price.is_finite() && lower.is_finite() && upper.is_finite(),
            Self::Gated {
                strength,
                bullish,
                bearish,
            } => strength.is_finite() && bullish.is_finite() && bearish.is_finite(),
        }
    }
}
