//! Score computation module
//!
//! Implements the deterministic composite-score formula: smoothed trust
//! (T), recency-weighted anchor novelty (N), continuity decay (C), and the
//! empathy bonus ramp (E), composed as S = T × N × C × E and rounded to
//! three decimal places.
//!
//! All functions here are total for finite inputs: the anchor-weighting
//! path divides only by a sum of positive weights, and the empty-anchor
//! branch bypasses division entirely. Range enforcement for caller inputs
//! is the engine's job, not this module's.

use crate::{Anchor, EngineState, HealthStatus};
use serde::{Deserialize, Serialize};

/// Default geometric decay per recorded exchange (near-neutral on purpose)
pub const DEFAULT_CONTINUITY_DECAY: f64 = 0.98;

/// Default maximum empathy multiplier at mutual_respect = 1.0
pub const DEFAULT_EMPATHY_CEILING: f64 = 1.15;

/// Default respect level at which the empathy bonus starts to ramp
pub const DEFAULT_EMPATHY_THRESHOLD: f64 = 0.75;

/// Default geometric base for anchor recency weights
pub const DEFAULT_ANCHOR_DECAY_BASE: f64 = 0.85;

/// Default novelty factor when no anchors have been recorded
pub const DEFAULT_NOVELTY_BASELINE: f64 = 0.6;

/// Tunable parameters for score composition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreParams {
    /// Geometric decay applied per recorded exchange, in (0, 1)
    pub continuity_decay: f64,

    /// Maximum empathy multiplier, reached at mutual_respect = 1.0
    pub empathy_ceiling: f64,

    /// Respect level below which the empathy factor is exactly 1.0
    pub empathy_threshold: f64,

    /// Geometric base for anchor recency weights, in (0, 1):
    /// the newest anchor gets weight 1.0, older ones decay by this base
    pub anchor_decay_base: f64,

    /// Novelty factor used when no anchors exist
    pub novelty_baseline: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            continuity_decay: DEFAULT_CONTINUITY_DECAY,
            empathy_ceiling: DEFAULT_EMPATHY_CEILING,
            empathy_threshold: DEFAULT_EMPATHY_THRESHOLD,
            anchor_decay_base: DEFAULT_ANCHOR_DECAY_BASE,
            novelty_baseline: DEFAULT_NOVELTY_BASELINE,
        }
    }
}

/// Factor-by-factor decomposition of a composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// T: latest smoothed trust
    pub trust: f64,

    /// N: recency-weighted anchor novelty
    pub novelty: f64,

    /// C: continuity decay over the exchange count
    pub continuity: f64,

    /// E: empathy bonus from the most recent respect signal
    pub empathy: f64,

    /// S = T × N × C × E, rounded to 3 decimal places
    pub score: f64,

    /// Qualitative band of the composite score
    pub status: HealthStatus,
}

/// Apply one quality observation to the trust estimate.
///
/// The first sample bypasses smoothing and becomes the trust value
/// directly. After that this is a standard exponential moving average:
/// a higher `rate` makes the estimate more reactive to the newest sample,
/// a lower one makes it more inertial.
pub fn smooth_trust(previous: Option<f64>, quality: f64, rate: f64) -> f64 {
    match previous {
        Some(prev) => rate * quality + (1.0 - rate) * prev,
        None => quality,
    }
}

/// N: recency-weighted mean of anchor novelty, capped at 1.0.
///
/// Anchor i (0-indexed, oldest first, n total) is weighted by
/// `decay_base^(n - 1 - i)`, so the newest anchor gets full weight 1.0 and
/// older ones decay geometrically. With no anchors the factor falls back
/// to `baseline`.
pub fn novelty_factor(anchors: &[Anchor], decay_base: f64, baseline: f64) -> f64 {
    if anchors.is_empty() {
        return baseline;
    }

    let n = anchors.len();
    let mut weighted_sum = 0.0;
    let mut weight_sum = 0.0;
    for (i, anchor) in anchors.iter().enumerate() {
        let weight = decay_base.powi((n - 1 - i) as i32);
        weighted_sum += anchor.novelty * weight;
        weight_sum += weight;
    }

    (weighted_sum / weight_sum).min(1.0)
}

/// C: geometric decay keyed on the number of recorded exchanges.
pub fn continuity_factor(exchanges: usize, decay: f64) -> f64 {
    decay.powi(exchanges as i32)
}

/// E: piecewise-linear bonus ramp driven by the latest respect signal.
///
/// Below `threshold` the factor is exactly 1.0 (no penalty, no bonus);
/// above it the factor ramps linearly and saturates at `ceiling` when
/// respect reaches 1.0.
pub fn empathy_factor(recent_respect: f64, ceiling: f64, threshold: f64) -> f64 {
    let ramp = ((recent_respect - threshold) / (1.0 - threshold)).max(0.0);
    1.0 + (ceiling - 1.0) * ramp
}

/// Compose the four factors into the final score, rounded to 3 decimals.
pub fn compose(trust: f64, novelty: f64, continuity: f64, empathy: f64) -> f64 {
    round3(trust * novelty * continuity * empathy)
}

/// Evaluate the full breakdown for a state under the given parameters.
///
/// A state with no recorded trust samples scores a fixed neutral 1.0 with
/// all factors reported as 1.0.
pub fn evaluate(state: &EngineState, params: &ScoreParams) -> ScoreBreakdown {
    let Some(last) = state.trust_history.last() else {
        return ScoreBreakdown {
            trust: 1.0,
            novelty: 1.0,
            continuity: 1.0,
            empathy: 1.0,
            score: 1.0,
            status: HealthStatus::classify(1.0),
        };
    };

    let trust = last.trust_at_time;
    let novelty = novelty_factor(
        &state.anchors,
        params.anchor_decay_base,
        params.novelty_baseline,
    );
    let continuity = continuity_factor(state.exchange_count(), params.continuity_decay);
    let empathy = empathy_factor(
        last.mutual_respect,
        params.empathy_ceiling,
        params.empathy_threshold,
    );
    let score = compose(trust, novelty, continuity, empathy);

    ScoreBreakdown {
        trust,
        novelty,
        continuity,
        empathy,
        score,
        status: HealthStatus::classify(score),
    }
}

/// Composite score only (see [`evaluate`]).
pub fn score(state: &EngineState, params: &ScoreParams) -> f64 {
    evaluate(state, params).score
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
