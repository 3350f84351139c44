//! Trust sample module - one recorded interaction's quality inputs

use serde::{Deserialize, Serialize};

/// One recorded interaction's quality inputs.
///
/// The three ratios are caller-supplied values intended to lie in [0, 1].
/// `trust_at_time` is derived at ingestion: it is the smoothed trust value
/// immediately after this sample was applied, so the history also serves
/// as an audit trail of the trust trajectory.
///
/// Samples are immutable once appended; insertion order defines recency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrustSample {
    /// Factual accuracy of the exchange [0.0, 1.0]
    pub accuracy: f64,

    /// How applicable the exchange was to the caller's goal [0.0, 1.0]
    pub applicability: f64,

    /// Bidirectional respect signal [0.0, 1.0]
    pub mutual_respect: f64,

    /// Smoothed trust value immediately after this sample was applied
    pub trust_at_time: f64,
}

impl TrustSample {
    /// Create a new trust sample.
    pub fn new(accuracy: f64, applicability: f64, mutual_respect: f64, trust_at_time: f64) -> Self {
        Self {
            accuracy,
            applicability,
            mutual_respect,
            trust_at_time,
        }
    }

    /// The quality product of the three input ratios.
    ///
    /// This is the raw (unsmoothed) quality of the exchange that was fed
    /// into the trust EMA.
    pub fn quality(&self) -> f64 {
        self.accuracy * self.applicability * self.mutual_respect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_product() {
        let sample = TrustSample::new(0.5, 0.5, 0.5, 0.125);
        assert_eq!(sample.quality(), 0.125);
    }

    #[test]
    fn test_serde_round_trip() {
        let sample = TrustSample::new(0.96, 0.97, 0.99, 0.921888);
        let json = serde_json::to_string(&sample).unwrap();
        let back: TrustSample = serde_json::from_str(&json).unwrap();
        assert_eq!(sample, back);
    }
}
