//! Process configuration: indicator parameters, vote thresholds, aggregation
//! and server settings.
//!
//! `Config::default()` is the reference configuration. `Config::from_env()`
//! applies environment overrides on top of it.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("{0}")]
    Invalid(String),
}

/// Deployment environment (`APP_ENV`), defaults to `sandbox`
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Periods and multipliers of the indicator battery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorParams {
    pub sma_period: usize,
    pub ema_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub adx_period: usize,
    pub sar_step: f64,
    pub sar_max: f64,
    pub ichimoku_conversion: usize,
    pub ichimoku_base: usize,
    pub ichimoku_span_b: usize,
    pub ichimoku_displacement: usize,
    pub atr_period: usize,
    /// Multiple of ATR added to the previous close in the trend-follow check
    pub trend_follow_atr_multiplier: f64,
    pub rsi_period: usize,
    pub stochastic_k: usize,
    pub stochastic_d: usize,
    pub cci_period: usize,
    pub williams_period: usize,
    pub roc_period: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub donchian_period: usize,
    pub keltner_atr_multiplier: f64,
    pub mfi_period: usize,
    pub accumulation_lookback: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_period: 50,
            ema_period: 20,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            adx_period: 14,
            sar_step: 0.02,
            sar_max: 0.2,
            ichimoku_conversion: 9,
            ichimoku_base: 26,
            ichimoku_span_b: 52,
            ichimoku_displacement: 26,
            atr_period: 14,
            trend_follow_atr_multiplier: 1.0,
            rsi_period: 14,
            stochastic_k: 14,
            stochastic_d: 3,
            cci_period: 20,
            williams_period: 14,
            roc_period: 12,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            donchian_period: 20,
            keltner_atr_multiplier: 2.0,
            mfi_period: 14,
            accumulation_lookback: 5,
        }
    }
}

/// Lower/upper pair for banded votes: below `lower` is BUY, above `upper` is SELL
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lower: f64,
    pub upper: f64,
}

impl Band {
    pub const fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }
}

/// Thresholds applied by the vote normalizer, on each indicator's native scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteThresholds {
    pub rsi: Band,
    pub stochastic: Band,
    pub cci: Band,
    pub williams_r: Band,
    pub mfi: Band,
    /// ADX above this marks a trending regime
    pub adx_trend_strength: f64,
    /// ATR change above this counts as expanding volatility
    pub atr_expansion: f64,
}

impl Default for VoteThresholds {
    fn default() -> Self {
        Self {
            rsi: Band::new(30.0, 70.0),
            stochastic: Band::new(20.0, 80.0),
            cci: Band::new(-100.0, 100.0),
            williams_r: Band::new(-80.0, -20.0),
            mfi: Band::new(20.0, 80.0),
            adx_trend_strength: 25.0,
            atr_expansion: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregationSettings {
    /// Upper bound on a concurrent fan-out before it degrades to LOADING
    pub timeout_ms: u64,
    /// Fan indicators out across blocking tasks instead of computing inline
    pub concurrent: bool,
}

impl Default for AggregationSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 3_000,
            concurrent: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 8080 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub indicators: IndicatorParams,
    pub thresholds: VoteThresholds,
    pub aggregation: AggregationSettings,
    pub server: ServerSettings,
}

impl Config {
    /// Reference configuration with environment overrides applied.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = env_parse("PORT")? {
            config.server.port = port;
        }
        if let Some(timeout_ms) = env_parse("AGGREGATION_TIMEOUT_MS")? {
            config.aggregation.timeout_ms = timeout_ms;
        }
        if let Some(concurrent) = env_parse("AGGREGATION_CONCURRENT")? {
            config.aggregation.concurrent = concurrent;
        }
        if let Some(period) = env_parse("SMA_PERIOD")? {
            config.indicators.sma_period = period;
        }
        if let Some(period) = env_parse("EMA_PERIOD")? {
            config.indicators.ema_period = period;
        }
        if let Some(period) = env_parse("RSI_PERIOD")? {
            config.indicators.rsi_period = period;
        }
        if let Some(threshold) = env_parse("ADX_TREND_THRESHOLD")? {
            config.thresholds.adx_trend_strength = threshold;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject parameter combinations no indicator can run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.indicators;
        let periods = [
            ("sma_period", p.sma_period),
            ("ema_period", p.ema_period),
            ("macd_fast", p.macd_fast),
            ("macd_signal", p.macd_signal),
            ("adx_period", p.adx_period),
            ("ichimoku_conversion", p.ichimoku_conversion),
            ("ichimoku_base", p.ichimoku_base),
            ("ichimoku_span_b", p.ichimoku_span_b),
            ("atr_period", p.atr_period),
            ("rsi_period", p.rsi_period),
            ("stochastic_k", p.stochastic_k),
            ("stochastic_d", p.stochastic_d),
            ("cci_period", p.cci_period),
            ("williams_period", p.williams_period),
            ("roc_period", p.roc_period),
            ("bollinger_period", p.bollinger_period),
            ("donchian_period", p.donchian_period),
            ("mfi_period", p.mfi_period),
            ("accumulation_lookback", p.accumulation_lookback),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, period)| *period == 0) {
            return Err(ConfigError::Invalid(format!("{} must be greater than zero", name)));
        }
        if p.macd_fast >= p.macd_slow {
            return Err(ConfigError::Invalid(format!(
                "macd_fast ({}) must be shorter than macd_slow ({})",
                p.macd_fast, p.macd_slow
            )));
        }
        if p.sar_step <= 0.0 || p.sar_max < p.sar_step {
            return Err(ConfigError::Invalid(
                "sar_step must be positive and not exceed sar_max".to_string(),
            ));
        }

        let t = &self.thresholds;
        for (name, band) in [
            ("rsi", t.rsi),
            ("stochastic", t.stochastic),
            ("cci", t.cci),
            ("williams_r", t.williams_r),
            ("mfi", t.mfi),
        ] {
            if band.lower > band.upper {
                return Err(ConfigError::Invalid(format!(
                    "{} band lower ({}) exceeds upper ({})",
                    name, band.lower, band.upper
                )));
            }
        }

        Ok(())
    }
}

fn env_parse<T: FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}
