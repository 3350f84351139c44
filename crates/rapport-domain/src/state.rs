//! Engine state module - the two append-only event sequences

use crate::{Anchor, TrustSample};
use serde::{Deserialize, Serialize};

/// Accumulated session state: the trust history and the anchor list.
///
/// Both sequences are append-only and never reorder, so insertion order is
/// the recency order the score math depends on. The current trust value is
/// not stored separately: it is always the `trust_at_time` of the most
/// recent sample, or the caller's baseline when the history is empty. The
/// two sequences therefore capture the state completely, which is what
/// makes snapshots trivially round-trippable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineState {
    /// Recorded trust samples, oldest first
    pub trust_history: Vec<TrustSample>,

    /// Recorded anchors, oldest first
    pub anchors: Vec<Anchor>,
}

impl EngineState {
    /// Create empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a trust sample.
    pub fn push_sample(&mut self, sample: TrustSample) {
        self.trust_history.push(sample);
    }

    /// Append an anchor.
    pub fn push_anchor(&mut self, anchor: Anchor) {
        self.anchors.push(anchor);
    }

    /// The latest smoothed trust value, or `baseline` when no samples exist.
    pub fn current_trust(&self, baseline: f64) -> f64 {
        self.trust_history
            .last()
            .map(|s| s.trust_at_time)
            .unwrap_or(baseline)
    }

    /// The most recent mutual-respect input, if any sample exists.
    pub fn recent_respect(&self) -> Option<f64> {
        self.trust_history.last().map(|s| s.mutual_respect)
    }

    /// Number of recorded exchanges (trust samples).
    pub fn exchange_count(&self) -> usize {
        self.trust_history.len()
    }

    /// Number of recorded anchors.
    pub fn anchor_count(&self) -> usize {
        self.anchors.len()
    }

    /// True when no trust samples have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.trust_history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_uses_baseline() {
        let state = EngineState::new();
        assert!(state.is_empty());
        assert_eq!(state.current_trust(1.0), 1.0);
        assert_eq!(state.current_trust(0.4), 0.4);
        assert_eq!(state.recent_respect(), None);
    }

    #[test]
    fn test_current_trust_tracks_last_sample() {
        let mut state = EngineState::new();
        state.push_sample(TrustSample::new(0.9, 0.9, 0.9, 0.729));
        state.push_sample(TrustSample::new(0.8, 0.8, 0.8, 0.620));
        assert_eq!(state.current_trust(1.0), 0.620);
        assert_eq!(state.recent_respect(), Some(0.8));
        assert_eq!(state.exchange_count(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut state = EngineState::new();
        state.push_sample(TrustSample::new(0.96, 0.97, 0.99, 0.921888));
        state.push_anchor(Anchor::new("brazier_glow", 0.85));

        let json = serde_json::to_string(&state).unwrap();
        let back: EngineState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
