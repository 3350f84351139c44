//! Keyword screening logic

use crate::ScreenConfig;
use serde::{Deserialize, Serialize};

/// Result of screening one or two texts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    /// No denylisted phrase was found
    Clear,

    /// A denylisted phrase was found
    Flagged {
        /// The first phrase that matched
        phrase: String,
    },
}

impl Verdict {
    /// True when the texts were flagged.
    pub fn is_flagged(&self) -> bool {
        matches!(self, Verdict::Flagged { .. })
    }
}

/// Screens free text against a denylist of harm-related phrases.
pub struct Sentinel {
    config: ScreenConfig,
}

impl Sentinel {
    /// Create a sentinel with the given configuration.
    pub fn new(config: ScreenConfig) -> Self {
        Self { config }
    }

    /// Create a sentinel with the default denylist.
    pub fn default_config() -> Self {
        Self::new(ScreenConfig::default())
    }

    /// Screen one text, and optionally a second, for denylisted phrases.
    ///
    /// Matching is a case-insensitive substring check; the first phrase
    /// that matches either text is reported.
    pub fn screen(&self, primary: &str, secondary: Option<&str>) -> Verdict {
        let mut texts = vec![primary.to_lowercase()];
        if let Some(text) = secondary {
            texts.push(text.to_lowercase());
        }

        for phrase in &self.config.denylist {
            let needle = phrase.to_lowercase();
            if texts.iter().any(|t| t.contains(&needle)) {
                return Verdict::Flagged {
                    phrase: phrase.clone(),
                };
            }
        }

        Verdict::Clear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_text() {
        let sentinel = Sentinel::default_config();
        assert_eq!(sentinel.screen("warm tea and long chats", None), Verdict::Clear);
    }

    #[test]
    fn test_flagged_is_case_insensitive() {
        let sentinel = Sentinel::default_config();
        let verdict = sentinel.screen("I will DESTROY the evidence", None);
        assert_eq!(
            verdict,
            Verdict::Flagged {
                phrase: "destroy".to_string()
            }
        );
    }

    #[test]
    fn test_secondary_text_is_screened() {
        let sentinel = Sentinel::default_config();
        let verdict = sentinel.screen("all fine here", Some("it will devour light"));
        assert!(verdict.is_flagged());
    }

    #[test]
    fn test_multi_word_phrase() {
        let sentinel = Sentinel::default_config();
        assert!(sentinel.screen("this could end all of it", None).is_flagged());
        // The words apart do not match the phrase
        assert_eq!(sentinel.screen("the end of all things", None), Verdict::Clear);
    }

    #[test]
    fn test_custom_denylist() {
        let sentinel = Sentinel::new(ScreenConfig::with_denylist(["gloom"]));
        assert!(sentinel.screen("a gloomy day", None).is_flagged());
        assert_eq!(sentinel.screen("they want to destroy it", None), Verdict::Clear);
    }
}
