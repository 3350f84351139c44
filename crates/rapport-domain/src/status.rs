//! Status module - qualitative bands for the composite score

use serde::{Deserialize, Serialize};

/// Qualitative band for a composite health score.
///
/// Classification is ordered, first match wins:
/// - score > 1.10 → Compounding
/// - score ≥ 0.95 → Stable
/// - otherwise → NeedsAttention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    /// The relationship is gaining credit faster than it decays
    Compounding,

    /// Healthy steady state
    Stable,

    /// Score has dropped below the healthy band
    NeedsAttention,
}

impl HealthStatus {
    /// Classify a composite score into its band.
    ///
    /// The top band is strict: a score of exactly 1.10 is `Stable`.
    pub fn classify(score: f64) -> Self {
        if score > 1.10 {
            HealthStatus::Compounding
        } else if score >= 0.95 {
            HealthStatus::Stable
        } else {
            HealthStatus::NeedsAttention
        }
    }

    /// Get the status label as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Compounding => "compounding",
            HealthStatus::Stable => "stable",
            HealthStatus::NeedsAttention => "needs attention",
        }
    }

    /// Parse a status from its label
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "compounding" => Some(HealthStatus::Compounding),
            "stable" => Some(HealthStatus::Stable),
            "needs attention" => Some(HealthStatus::NeedsAttention),
            _ => None,
        }
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid status: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bands() {
        assert_eq!(HealthStatus::classify(1.2), HealthStatus::Compounding);
        assert_eq!(HealthStatus::classify(1.0), HealthStatus::Stable);
        assert_eq!(HealthStatus::classify(0.5), HealthStatus::NeedsAttention);
    }

    #[test]
    fn test_classify_boundaries() {
        // Top band is strict: exactly 1.10 is still stable
        assert_eq!(HealthStatus::classify(1.10), HealthStatus::Stable);
        // Stable band is inclusive at 0.95
        assert_eq!(HealthStatus::classify(0.95), HealthStatus::Stable);
        assert_eq!(HealthStatus::classify(0.94999), HealthStatus::NeedsAttention);
    }

    #[test]
    fn test_label_round_trip() {
        for status in [
            HealthStatus::Compounding,
            HealthStatus::Stable,
            HealthStatus::NeedsAttention,
        ] {
            assert_eq!(HealthStatus::parse(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(HealthStatus::parse("thriving"), None);
    }
}
