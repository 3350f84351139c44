//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use rapport_domain::ScoreParams;
use rapport_engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Scoring tunables
    #[serde(default)]
    pub tunables: Tunables,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// REPL history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Scoring tunables, overridable in the config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tunables {
    /// Trust EMA reactivity (0, 1)
    #[serde(default = "default_smoothing_rate")]
    pub smoothing_rate: f64,

    /// Geometric decay per exchange
    #[serde(default = "default_continuity_decay")]
    pub continuity_decay: f64,

    /// Maximum empathy multiplier
    #[serde(default = "default_empathy_ceiling")]
    pub empathy_ceiling: f64,

    /// Respect level at which the empathy bonus starts
    #[serde(default = "default_empathy_threshold")]
    pub empathy_threshold: f64,

    /// Geometric base for anchor recency weights
    #[serde(default = "default_anchor_decay_base")]
    pub anchor_decay_base: f64,

    /// Novelty factor when no anchors exist
    #[serde(default = "default_novelty_baseline")]
    pub novelty_baseline: f64,
}

/// Output format.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (score only) format
    Quiet,
}

impl Config {
    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".rapport").join("config.toml"))
    }

    /// Load configuration from file or create default.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Build an engine configuration from the tunables.
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            smoothing_rate: self.tunables.smoothing_rate,
            params: ScoreParams {
                continuity_decay: self.tunables.continuity_decay,
                empathy_ceiling: self.tunables.empathy_ceiling,
                empathy_threshold: self.tunables.empathy_threshold,
                anchor_decay_base: self.tunables.anchor_decay_base,
                novelty_baseline: self.tunables.novelty_baseline,
            },
            ..EngineConfig::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings: Settings::default(),
            tunables: Tunables::default(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            history_size: 1000,
        }
    }
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            smoothing_rate: default_smoothing_rate(),
            continuity_decay: default_continuity_decay(),
            empathy_ceiling: default_empathy_ceiling(),
            empathy_threshold: default_empathy_threshold(),
            anchor_decay_base: default_anchor_decay_base(),
            novelty_baseline: default_novelty_baseline(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}

fn default_smoothing_rate() -> f64 {
    rapport_engine::EngineConfig::default().smoothing_rate
}

fn default_continuity_decay() -> f64 {
    ScoreParams::default().continuity_decay
}

fn default_empathy_ceiling() -> f64 {
    ScoreParams::default().empathy_ceiling
}

fn default_empathy_threshold() -> f64 {
    ScoreParams::default().empathy_threshold
}

fn default_anchor_decay_base() -> f64 {
    ScoreParams::default().anchor_decay_base
}

fn default_novelty_baseline() -> f64 {
    ScoreParams::default().novelty_baseline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_engine_defaults() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.engine_config(), EngineConfig::default());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [tunables]
            smoothing_rate = 0.5
            "#,
        )
        .unwrap();

        assert_eq!(config.tunables.smoothing_rate, 0.5);
        assert_eq!(
            config.tunables.continuity_decay,
            ScoreParams::default().continuity_decay
        );
        assert!(config.settings.color);
    }

    #[test]
    fn test_toml_round_trip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back.tunables.smoothing_rate, config.tunables.smoothing_rate);
    }
}
