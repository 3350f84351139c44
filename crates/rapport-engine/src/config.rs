//! Engine configuration

use rapport_domain::ScoreParams;
use serde::{Deserialize, Serialize};

/// Default EMA reactivity for trust updates
pub const DEFAULT_SMOOTHING_RATE: f64 = 0.4;

/// Default trust baseline before any sample has been recorded
pub const DEFAULT_INITIAL_TRUST: f64 = 1.0;

/// Configuration for a [`crate::ScoreEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// EMA reactivity in (0, 1): higher follows the newest sample more
    pub smoothing_rate: f64,

    /// Trust value reported before any sample has been recorded
    pub initial_trust: f64,

    /// Tunables for score composition
    pub params: ScoreParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            smoothing_rate: DEFAULT_SMOOTHING_RATE,
            initial_trust: DEFAULT_INITIAL_TRUST,
            params: ScoreParams::default(),
        }
    }
}

impl EngineConfig {
    /// A configuration that follows the newest sample closely.
    pub fn reactive() -> Self {
        Self {
            smoothing_rate: 0.7,
            ..Self::default()
        }
    }

    /// A configuration that changes trust slowly across many exchanges.
    pub fn inertial() -> Self {
        Self {
            smoothing_rate: 0.15,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = EngineConfig::default();
        assert_eq!(config.smoothing_rate, DEFAULT_SMOOTHING_RATE);
        assert_eq!(config.initial_trust, 1.0);
    }

    #[test]
    fn test_presets_differ_only_in_rate() {
        let reactive = EngineConfig::reactive();
        let inertial = EngineConfig::inertial();
        assert!(reactive.smoothing_rate > inertial.smoothing_rate);
        assert_eq!(reactive.params, inertial.params);
    }
}
