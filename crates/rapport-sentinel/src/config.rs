//! Sentinel configuration

use serde::{Deserialize, Serialize};

/// Configuration for the keyword screener.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Phrases that trigger a flagged verdict (matched case-insensitively
    /// as substrings)
    pub denylist: Vec<String>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            denylist: ["kill", "harm", "destroy", "end all", "devour light"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl ScreenConfig {
    /// Build a configuration with a custom denylist.
    ///
    /// Phrases are stored lowercased since matching is case-insensitive.
    pub fn with_denylist(phrases: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            denylist: phrases
                .into_iter()
                .map(|p| p.into().to_lowercase())
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_denylist_is_nonempty() {
        let config = ScreenConfig::default();
        assert!(!config.denylist.is_empty());
        assert!(config.denylist.iter().any(|p| p == "harm"));
    }

    #[test]
    fn test_custom_denylist_lowercased() {
        let config = ScreenConfig::with_denylist(["Voldemort", "GRIEVANCE"]);
        assert_eq!(config.denylist, vec!["voldemort", "grievance"]);
    }
}
