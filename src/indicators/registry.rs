//! Ordered indicator table: name, category, lookback, computation and vote rule

use serde::{Deserialize, Serialize};

use crate::config::{IndicatorParams, VoteThresholds};
use crate::indicators::error::IndicatorError;
use crate::indicators::{momentum, trend, volatility, volume};
use crate::models::{IndicatorReading, PriceSeries};
use crate::signals::normalizer::VoteRule;

/// Indicator category, in presentation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
}

impl IndicatorCategory {
    /// Get all categories
    pub fn all() -> [IndicatorCategory; 4] {
        [
            IndicatorCategory::Trend,
            IndicatorCategory::Momentum,
            IndicatorCategory::Volatility,
            IndicatorCategory::Volume,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorCategory::Trend => "trend",
            IndicatorCategory::Momentum => "momentum",
            IndicatorCategory::Volatility => "volatility",
            IndicatorCategory::Volume => "volume",
        }
    }
}

/// Pure indicator computation over a series
pub type ComputeFn = fn(&PriceSeries, &IndicatorParams) -> Result<IndicatorReading, IndicatorError>;

/// One row of the indicator table
#[derive(Debug, Clone)]
pub struct IndicatorSpec {
    pub name: String,
    pub category: IndicatorCategory,
    /// Bars needed before the computation can produce a value
    pub lookback: usize,
    pub compute: ComputeFn,
    pub rule: VoteRule,
}

impl IndicatorSpec {
    pub fn new(
        name: impl Into<String>,
        category: IndicatorCategory,
        lookback: usize,
        compute: ComputeFn,
        rule: VoteRule,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            lookback,
            compute,
            rule,
        }
    }
}

/// Category-ordered indicator table driving the pipeline
#[derive(Debug, Clone)]
pub struct IndicatorRegistry {
    specs: Vec<IndicatorSpec>,
}

impl IndicatorRegistry {
    /// The reference battery of 20 indicators: trend, momentum, volatility, volume
    pub fn standard(params: &IndicatorParams, thresholds: &VoteThresholds) -> Self {
        use IndicatorCategory::*;

        let p = params;
        let specs = vec![
            IndicatorSpec::new(
                format!("SMA ({})", p.sma_period),
                Trend,
                p.sma_period,
                trend::sma_reading,
                VoteRule::Directional,
            ),
            IndicatorSpec::new(
                format!("EMA ({})", p.ema_period),
                Trend,
                p.ema_period,
                trend::ema_reading,
                VoteRule::Directional,
            ),
            IndicatorSpec::new(
                format!("MACD ({},{},{})", p.macd_fast, p.macd_slow, p.macd_signal),
                Trend,
                trend::macd_lookback(p.macd_slow, p.macd_signal),
                trend::macd_reading,
                VoteRule::Directional,
            ),
            IndicatorSpec::new(
                format!("ADX ({})", p.adx_period),
                Trend,
                trend::adx_lookback(p.adx_period),
                trend::adx_reading,
                VoteRule::StrengthGated {
                    threshold: thresholds.adx_trend_strength,
                },
            ),
            IndicatorSpec::new(
                "Parabolic SAR",
                Trend,
                2,
                trend::parabolic_sar_reading,
                VoteRule::Directional,
            ),
            IndicatorSpec::new(
                format!("Ichimoku ({},{})", p.ichimoku_conversion, p.ichimoku_base),
                Trend,
                p.ichimoku_conversion.max(p.ichimoku_base),
                trend::ichimoku_reading,
                VoteRule::Directional,
            ),
            IndicatorSpec::new(
                format!("ATR Trend Follow ({})", p.atr_period),
                Trend,
                trend::trend_follow_lookback(p.atr_period),
                trend::trend_follow_reading,
                VoteRule::Directional,
            ),
            IndicatorSpec::new(
                format!("RSI ({})", p.rsi_period),
                Momentum,
                p.rsi_period + 1,
                momentum::rsi_reading,
                VoteRule::banded(thresholds.rsi),
            ),
            IndicatorSpec::new(
                format!("Stochastic ({},{})", p.stochastic_k, p.stochastic_d),
                Momentum,
                momentum::stochastic_lookback(p.stochastic_k, p.stochastic_d),
                momentum::stochastic_reading,
                VoteRule::banded(thresholds.stochastic),
            ),
            IndicatorSpec::new(
                format!("CCI ({})", p.cci_period),
                Momentum,
                p.cci_period,
                momentum::cci_reading,
                VoteRule::banded(thresholds.cci),
            ),
            IndicatorSpec::new(
                format!("Williams %R ({})", p.williams_period),
                Momentum,
                p.williams_period,
                momentum::williams_r_reading,
                VoteRule::banded(thresholds.williams_r),
            ),
            IndicatorSpec::new(
                format!("ROC ({})", p.roc_period),
                Momentum,
                p.roc_period + 1,
                momentum::roc_reading,
                VoteRule::Directional,
            ),
            IndicatorSpec::new(
                format!(
                    "Bollinger Bands ({},{})",
                    p.bollinger_period, p.bollinger_std_dev
                ),
                Volatility,
                p.bollinger_period,
                volatility::bollinger_reading,
                VoteRule::MeanReversion,
            ),
            IndicatorSpec::new(
                format!("ATR Trend ({})", p.atr_period),
                Volatility,
                volatility::atr_lookback(p.atr_period),
                volatility::atr_trend_reading,
                VoteRule::StrengthGated {
                    threshold: thresholds.atr_expansion,
                },
            ),
            IndicatorSpec::new(
                format!("Donchian Breakout ({})", p.donchian_period),
                Volatility,
                volatility::donchian_lookback(p.donchian_period),
                volatility::donchian_reading,
                VoteRule::Breakout,
            ),
            IndicatorSpec::new(
                format!("Keltner ({})", p.ema_period),
                Volatility,
                volatility::keltner_lookback(p.ema_period, p.atr_period),
                volatility::keltner_reading,
                VoteRule::Directional,
            ),
            IndicatorSpec::new("OBV", Volume, 2, volume::obv_reading, VoteRule::Directional),
            IndicatorSpec::new(
                format!("MFI ({})", p.mfi_period),
                Volume,
                p.mfi_period + 1,
                volume::mfi_reading,
                VoteRule::banded(thresholds.mfi),
            ),
            IndicatorSpec::new("VWAP", Volume, 1, volume::vwap_reading, VoteRule::Directional),
            IndicatorSpec::new(
                format!("Accumulation ({})", p.accumulation_lookback),
                Volume,
                p.accumulation_lookback + 1,
                volume::accumulation_reading,
                VoteRule::Directional,
            ),
        ];

        Self { specs }
    }

    /// Custom table; rows are stably re-sorted into category order
    pub fn with_specs(mut specs: Vec<IndicatorSpec>) -> Self {
        specs.sort_by_key(|spec| spec.category);
        Self { specs }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, IndicatorSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Minimum history for a full run: the longest lookback in the table
    pub fn min_bars(&self) -> usize {
        self.specs.iter().map(|spec| spec.lookback).max().unwrap_or(0)
    }

    pub fn names(&self) -> Vec<&str> {
        self.specs.iter().map(|spec| spec.name.as_str()).collect()
    }
}

impl Default for IndicatorRegistry {
    fn default() -> Self {
        Self::standard(&IndicatorParams::default(), &VoteThresholds::default())
    }
}

impl<'a> IntoIterator for &'a IndicatorRegistry {
    type Item = &'a IndicatorSpec;
    type IntoIter = std::slice::Iter<'a, IndicatorSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
