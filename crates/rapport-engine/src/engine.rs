//! The score engine - stateful ingestion and scoring

use crate::report::HealthReport;
use crate::{EngineConfig, EngineError, Result};
use rapport_domain::{scoring, Anchor, EngineState, ScoreBreakdown, ScoreParams, TrustSample};
use tracing::debug;

/// Owns all mutable session state and exposes the scoring operations.
///
/// State only ever grows: there is no rollback and no reset operation.
/// To reset, discard the engine and construct a fresh one.
#[derive(Debug, Clone)]
pub struct ScoreEngine {
    config: EngineConfig,
    state: EngineState,
}

impl ScoreEngine {
    /// Create a new engine with the given configuration and empty state.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            state: EngineState::new(),
        }
    }

    /// Create an engine with default configuration.
    pub fn default_config() -> Self {
        Self::new(EngineConfig::default())
    }

    /// Restore an engine from a previously captured state.
    pub fn from_snapshot(config: EngineConfig, state: EngineState) -> Self {
        Self { config, state }
    }

    /// Record one exchange's quality inputs using the configured rate.
    ///
    /// Computes the quality product of the three ratios, folds it into the
    /// trust estimate (the first sample bypasses smoothing), and appends a
    /// [`TrustSample`] to the history. Returns the new smoothed trust.
    ///
    /// # Errors
    ///
    /// Rejects non-finite or out-of-[0, 1] ratios with
    /// [`EngineError::OutOfRange`].
    pub fn record_trust(
        &mut self,
        accuracy: f64,
        applicability: f64,
        mutual_respect: f64,
    ) -> Result<f64> {
        self.record_trust_with_rate(
            accuracy,
            applicability,
            mutual_respect,
            self.config.smoothing_rate,
        )
    }

    /// Record one exchange with a per-call smoothing rate override.
    ///
    /// # Errors
    ///
    /// Rejects out-of-range ratios, and rates outside (0, 1) with
    /// [`EngineError::InvalidRate`].
    pub fn record_trust_with_rate(
        &mut self,
        accuracy: f64,
        applicability: f64,
        mutual_respect: f64,
        rate: f64,
    ) -> Result<f64> {
        check_ratio("accuracy", accuracy)?;
        check_ratio("applicability", applicability)?;
        check_ratio("mutual_respect", mutual_respect)?;
        if !rate.is_finite() || rate <= 0.0 || rate >= 1.0 {
            return Err(EngineError::InvalidRate(rate));
        }

        let quality = accuracy * applicability * mutual_respect;
        let previous = self.state.trust_history.last().map(|s| s.trust_at_time);
        let trust = scoring::smooth_trust(previous, quality, rate);

        self.state
            .push_sample(TrustSample::new(accuracy, applicability, mutual_respect, trust));

        debug!(
            quality,
            trust,
            exchanges = self.state.exchange_count(),
            "trust sample recorded"
        );
        Ok(trust)
    }

    /// Record a tagged novelty anchor.
    ///
    /// Tags are free-form and not deduplicated: repeated tags each count
    /// separately in the novelty aggregation.
    ///
    /// # Errors
    ///
    /// Rejects non-finite or out-of-[0, 1] novelty scores.
    pub fn record_anchor(&mut self, tag: impl Into<String>, novelty: f64) -> Result<()> {
        check_ratio("novelty", novelty)?;

        let anchor = Anchor::new(tag, novelty);
        debug!(tag = %anchor.tag, novelty, "anchor recorded");
        self.state.push_anchor(anchor);
        Ok(())
    }

    /// The latest smoothed trust value, or the configured initial baseline
    /// when no samples exist.
    pub fn current_trust(&self) -> f64 {
        self.state.current_trust(self.config.initial_trust)
    }

    /// Compute the composite score with the configured parameters.
    ///
    /// Pure read of the accumulated state; an engine with no recorded
    /// trust scores a fixed neutral 1.0.
    pub fn compute_score(&self) -> f64 {
        scoring::score(&self.state, &self.config.params)
    }

    /// Compute the composite score with per-call parameter overrides.
    pub fn compute_score_with(&self, params: &ScoreParams) -> f64 {
        scoring::score(&self.state, params)
    }

    /// Factor-by-factor breakdown with the configured parameters.
    pub fn breakdown(&self) -> ScoreBreakdown {
        scoring::evaluate(&self.state, &self.config.params)
    }

    /// Factor-by-factor breakdown with per-call parameter overrides.
    pub fn breakdown_with(&self, params: &ScoreParams) -> ScoreBreakdown {
        scoring::evaluate(&self.state, params)
    }

    /// Build the structured health report for the current state.
    pub fn report(&self) -> HealthReport {
        HealthReport::from_engine(self)
    }

    /// Compute the score and render the multi-line textual report.
    pub fn summarize(&self) -> String {
        self.report().render()
    }

    /// Read-only view of the accumulated state.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Capture the current state for persistence.
    pub fn snapshot(&self) -> EngineState {
        self.state.clone()
    }

    /// Serialize the current state to JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    /// Restore an engine from a JSON snapshot.
    pub fn from_json(config: EngineConfig, json: &str) -> Result<Self> {
        let state: EngineState = serde_json::from_str(json)?;
        Ok(Self::from_snapshot(config, state))
    }
}

impl Default for ScoreEngine {
    fn default() -> Self {
        Self::default_config()
    }
}

fn check_ratio(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(EngineError::OutOfRange { field, value });
    }
    Ok(())
}
