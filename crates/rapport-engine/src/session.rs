//! Session event log - replayable ingestion records

use crate::{Result, ScoreEngine};
use serde::{Deserialize, Serialize};

/// One recorded ingestion event, as stored in a session log.
///
/// A session log is a JSON array of these events; replaying the array into
/// a fresh engine reproduces the state (and therefore the score) exactly,
/// since the engine's state is fully determined by its event sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A trust update from one exchange
    Trust {
        /// Factual accuracy [0.0, 1.0]
        accuracy: f64,
        /// Applicability to the caller's goal [0.0, 1.0]
        applicability: f64,
        /// Bidirectional respect signal [0.0, 1.0]
        mutual_respect: f64,
        /// Optional per-event smoothing rate override
        #[serde(default, skip_serializing_if = "Option::is_none")]
        rate: Option<f64>,
    },

    /// A tagged novelty anchor
    Anchor {
        /// Free-form moment identifier
        tag: String,
        /// Subjective novelty [0.0, 1.0]
        novelty: f64,
    },
}

impl ScoreEngine {
    /// Apply one session event to the engine.
    pub fn apply(&mut self, event: &SessionEvent) -> Result<()> {
        match event {
            SessionEvent::Trust {
                accuracy,
                applicability,
                mutual_respect,
                rate,
            } => {
                match rate {
                    Some(rate) => self.record_trust_with_rate(
                        *accuracy,
                        *applicability,
                        *mutual_respect,
                        *rate,
                    )?,
                    None => self.record_trust(*accuracy, *applicability, *mutual_respect)?,
                };
            }
            SessionEvent::Anchor { tag, novelty } => {
                self.record_anchor(tag.clone(), *novelty)?;
            }
        }
        Ok(())
    }

    /// Apply a whole session log in order.
    ///
    /// Stops at the first invalid event; events before it remain applied.
    pub fn replay(&mut self, events: &[SessionEvent]) -> Result<()> {
        for event in events {
            self.apply(event)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_log_parses() {
        let json = r#"[
            {"type": "trust", "accuracy": 0.96, "applicability": 0.97, "mutual_respect": 0.99},
            {"type": "anchor", "tag": "brazier_glow", "novelty": 0.85},
            {"type": "trust", "accuracy": 0.98, "applicability": 0.99, "mutual_respect": 1.0, "rate": 0.5}
        ]"#;

        let events: Vec<SessionEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(events[1], SessionEvent::Anchor { .. }));
        assert!(matches!(
            events[2],
            SessionEvent::Trust { rate: Some(_), .. }
        ));
    }

    #[test]
    fn test_replay_matches_direct_calls() {
        let events = vec![
            SessionEvent::Trust {
                accuracy: 0.96,
                applicability: 0.97,
                mutual_respect: 0.99,
                rate: None,
            },
            SessionEvent::Anchor {
                tag: "brazier_glow".to_string(),
                novelty: 0.85,
            },
        ];

        let mut replayed = ScoreEngine::default_config();
        replayed.replay(&events).unwrap();

        let mut direct = ScoreEngine::default_config();
        direct.record_trust(0.96, 0.97, 0.99).unwrap();
        direct.record_anchor("brazier_glow", 0.85).unwrap();

        assert_eq!(replayed.state(), direct.state());
        assert_eq!(replayed.compute_score(), direct.compute_score());
    }

    #[test]
    fn test_replay_stops_on_invalid_event() {
        let events = vec![
            SessionEvent::Trust {
                accuracy: 0.9,
                applicability: 0.9,
                mutual_respect: 0.9,
                rate: None,
            },
            SessionEvent::Anchor {
                tag: "bad".to_string(),
                novelty: 1.5,
            },
        ];

        let mut engine = ScoreEngine::default_config();
        assert!(engine.replay(&events).is_err());
        // The valid prefix stays applied
        assert_eq!(engine.state().exchange_count(), 1);
        assert_eq!(engine.state().anchor_count(), 0);
    }
}
