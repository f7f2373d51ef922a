//! Aggregation pipeline: indicators → votes → tally → verdict.

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::join_all;
use tracing::{debug, info, warn};

use crate::config::{AggregationSettings, Config, IndicatorParams};
use crate::indicators::error::IndicatorError;
use crate::indicators::registry::{IndicatorRegistry, IndicatorSpec};
use crate::models::{
    AggregationResult, IndicatorReading, IndicatorVote, PriceSeries, SeriesError,
};
use crate::signals::aggregation::VerdictBands;
use crate::signals::assembler::assemble;
use crate::signals::normalizer::normalize;

/// Minimum history of the reference configuration (the SMA(50) period)
pub const MIN_CANDLES: usize = 50;

/// Stateless multi-indicator aggregator.
///
/// Holds only immutable configuration; every call is a pure function of the
/// input series. A call either votes with every indicator or returns the
/// LOADING sentinel.
#[derive(Debug, Clone)]
pub struct SignalAggregator {
    registry: IndicatorRegistry,
    params: Arc<IndicatorParams>,
    bands: VerdictBands,
    settings: AggregationSettings,
}

impl SignalAggregator {
    pub fn new(config: &Config) -> Self {
        let registry = IndicatorRegistry::standard(&config.indicators, &config.thresholds);
        Self::with_registry(config, registry)
    }

    /// Aggregator over a substituted indicator table; verdict bands are
    /// re-derived for the table size
    pub fn with_registry(config: &Config, registry: IndicatorRegistry) -> Self {
        let bands = VerdictBands::for_indicator_count(registry.len());
        Self {
            registry,
            params: Arc::new(config.indicators.clone()),
            bands,
            settings: config.aggregation.clone(),
        }
    }

    pub fn with_bands(mut self, bands: VerdictBands) -> Self {
        self.bands = bands;
        self
    }

    pub fn registry(&self) -> &IndicatorRegistry {
        &self.registry
    }

    pub fn bands(&self) -> &VerdictBands {
        &self.bands
    }

    pub fn settings(&self) -> &AggregationSettings {
        &self.settings
    }

    pub fn min_bars(&self) -> usize {
        self.registry.min_bars()
    }

    /// Validate raw columns, then aggregate. Malformed input is the only
    /// error surfaced to callers.
    pub fn aggregate_raw(
        &self,
        open: Vec<f64>,
        high: Vec<f64>,
        low: Vec<f64>,
        close: Vec<f64>,
        volume: Vec<f64>,
    ) -> Result<AggregationResult, SeriesError> {
        let series = PriceSeries::new(open, high, low, close, volume)?;
        Ok(self.aggregate(&series))
    }

    /// Compute every indicator inline, in table order
    pub fn aggregate(&self, series: &PriceSeries) -> AggregationResult {
        if !self.has_enough_history(series) {
            return AggregationResult::loading();
        }

        let outcomes = self
            .registry
            .iter()
            .map(|spec| (spec.compute)(series, &self.params))
            .collect();

        self.finish(outcomes)
    }

    /// Fan indicators out as blocking tasks and join them all before voting.
    ///
    /// A failed or panicked task, or the fan-out exceeding the configured
    /// timeout, degrades the whole call to LOADING.
    pub async fn aggregate_concurrent(&self, series: Arc<PriceSeries>) -> AggregationResult {
        if !self.has_enough_history(&series) {
            return AggregationResult::loading();
        }

        let tasks = self.registry.iter().map(|spec| {
            let series = Arc::clone(&series);
            let params = Arc::clone(&self.params);
            let compute = spec.compute;
            tokio::task::spawn_blocking(move || compute(&series, &params))
        });

        let timeout = Duration::from_millis(self.settings.timeout_ms);
        let joined = match tokio::time::timeout(timeout, join_all(tasks)).await {
            Ok(joined) => joined,
            Err(_) => {
                warn!(
                    timeout_ms = self.settings.timeout_ms,
                    "Indicator fan-out timed out, returning LOADING"
                );
                return AggregationResult::loading();
            }
        };

        let mut outcomes = Vec::with_capacity(joined.len());
        for (spec, task) in self.registry.iter().zip(joined) {
            match task {
                Ok(outcome) => outcomes.push(outcome),
                Err(e) => {
                    warn!(
                        indicator = %spec.name,
                        error = %e,
                        "Indicator task aborted, returning LOADING"
                    );
                    return AggregationResult::loading();
                }
            }
        }

        self.finish(outcomes)
    }

    /// Aggregate using the configured execution mode
    pub async fn run(&self, series: PriceSeries) -> AggregationResult {
        if self.settings.concurrent {
            self.aggregate_concurrent(Arc::new(series)).await
        } else {
            self.aggregate(&series)
        }
    }

    fn has_enough_history(&self, series: &PriceSeries) -> bool {
        let required = self.min_bars();
        if series.len() < required {
            info!(
                bars = series.len(),
                required = required,
                "Insufficient history, returning LOADING"
            );
            return false;
        }
        true
    }

    /// Normalize outcomes in table order; any failure voids the whole call
    fn finish(&self, outcomes: Vec<Result<IndicatorReading, IndicatorError>>) -> AggregationResult {
        let mut details = Vec::with_capacity(outcomes.len());

        for (spec, outcome) in self.registry.iter().zip(outcomes) {
            match cast_vote(spec, outcome) {
                Ok(vote) => details.push(vote),
                Err(e) => {
                    warn!(
                        indicator = %spec.name,
                        error = %e,
                        "Indicator computation failed, returning LOADING"
                    );
                    return AggregationResult::loading();
                }
            }
        }

        let result = assemble(details, &self.bands);
        debug!(
            verdict = %result.verdict,
            score = result.score,
            buy = result.summary.buy,
            sell = result.summary.sell,
            neutral = result.summary.neutral,
            "Aggregation complete"
        );
        result
    }
}

impl Default for SignalAggregator {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

fn cast_vote(
    spec: &IndicatorSpec,
    outcome: Result<IndicatorReading, IndicatorError>,
) -> Result<IndicatorVote, IndicatorError> {
    let reading = outcome?;
    if !reading.is_finite() {
        return Err(IndicatorError::NonFinite {
            indicator: spec.name.clone(),
        });
    }
    let signal = normalize(&reading, &spec.rule)?;

    Ok(IndicatorVote {
        name: spec.name.clone(),
        category: Some(spec.category),
        signal,
    })
}
