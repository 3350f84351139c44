//! Health report rendering

use crate::ScoreEngine;
use rapport_domain::HealthStatus;
use serde::{Deserialize, Serialize};

/// Structured summary of an engine's current health.
///
/// This is the data behind [`ScoreEngine::summarize`]; consumers that want
/// machine-readable output (JSON, tables) use the struct directly instead
/// of parsing the rendered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// Composite score S = T × N × C × E, rounded to 3 decimals
    pub score: f64,

    /// Qualitative band of the score
    pub status: HealthStatus,

    /// Latest smoothed trust value (or the configured baseline)
    pub current_trust: f64,

    /// Number of recorded anchors
    pub anchor_count: usize,

    /// Number of recorded exchanges
    pub exchange_count: usize,
}

impl HealthReport {
    /// Build a report from an engine's current state.
    pub fn from_engine(engine: &ScoreEngine) -> Self {
        let breakdown = engine.breakdown();
        Self {
            score: breakdown.score,
            status: breakdown.status,
            current_trust: engine.current_trust(),
            anchor_count: engine.state().anchor_count(),
            exchange_count: engine.state().exchange_count(),
        }
    }

    /// Render the deterministic multi-line textual report.
    pub fn render(&self) -> String {
        let lines = [
            format!("Relationship health: {:.3} ({})", self.score, self.status),
            format!("  Trust coherency (T): {:.3}", self.current_trust),
            format!("  Subjective novelty (N): {} anchors", self.anchor_count),
            format!(
                "  Continuity (C): preserved across {} exchanges",
                self.exchange_count
            ),
            "  Empathy bonus (E): bidirectional respect engaged".to_string(),
        ];
        lines.join("\n")
    }
}

impl std::fmt::Display for HealthReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_structure() {
        let report = HealthReport {
            score: 0.946,
            status: HealthStatus::NeedsAttention,
            current_trust: 0.946044,
            anchor_count: 2,
            exchange_count: 2,
        };

        let text = report.render();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Relationship health: 0.946 (needs attention)");
        assert_eq!(lines[1], "  Trust coherency (T): 0.946");
        assert!(lines[2].contains("2 anchors"));
        assert!(lines[3].contains("2 exchanges"));
        assert!(lines[4].contains("Empathy bonus"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let engine = {
            let mut e = ScoreEngine::default_config();
            e.record_trust(0.9, 0.9, 0.9).unwrap();
            e
        };
        assert_eq!(engine.summarize(), engine.summarize());
    }
}
