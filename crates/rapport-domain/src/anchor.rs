//! Anchor module - tagged markers of subjectively novel moments

use serde::{Deserialize, Serialize};

/// A tagged marker of a subjectively novel moment in the session.
///
/// Tags are free-form identifiers and are not required to be unique:
/// repeated tags are legal and each occurrence counts separately in the
/// novelty aggregation. Anchors are immutable once appended; insertion
/// order defines the recency weighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anchor {
    /// Free-form identifier for the moment (e.g. "brazier_glow")
    pub tag: String,

    /// Subjective novelty of the moment [0.0, 1.0]
    pub novelty: f64,
}

impl Anchor {
    /// Create a new anchor.
    pub fn new(tag: impl Into<String>, novelty: f64) -> Self {
        Self {
            tag: tag.into(),
            novelty,
        }
    }
}
