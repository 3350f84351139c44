//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rapport CLI - Score relationship health from interaction events.
#[derive(Debug, Parser)]
#[command(name = "rapport")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (score only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the scripted two-exchange demo session
    Demo,

    /// Replay a session event log and report the health score
    Score(ScoreArgs),

    /// Screen free text against the harm-phrase denylist
    Screen(ScreenArgs),

    /// Enter interactive REPL mode
    Repl,
}

/// Arguments for the score command.
#[derive(Debug, Parser)]
pub struct ScoreArgs {
    /// JSON file containing the session event log
    #[arg(short = 'F', long)]
    pub file: Option<PathBuf>,

    /// Read the event log as JSON from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Load engine state from a snapshot file before replaying
    #[arg(long)]
    pub load: Option<PathBuf>,

    /// Save engine state to a snapshot file after replaying
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Smoothing rate override for trust events without their own rate
    #[arg(short, long)]
    pub rate: Option<f64>,
}

/// Arguments for the screen command.
#[derive(Debug, Parser)]
pub struct ScreenArgs {
    /// Text to screen
    pub text: String,

    /// Optional second text to screen alongside the first
    pub secondary: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_command() {
        let cli = Cli::parse_from(["rapport", "demo"]);
        assert!(matches!(cli.command, Some(Command::Demo)));
    }

    #[test]
    fn test_score_command_with_file() {
        let cli = Cli::parse_from(["rapport", "score", "--file", "session.json"]);
        match cli.command {
            Some(Command::Score(args)) => {
                assert_eq!(args.file.unwrap(), PathBuf::from("session.json"));
                assert!(!args.stdin);
            }
            _ => panic!("Expected Score command"),
        }
    }

    #[test]
    fn test_screen_command() {
        let cli = Cli::parse_from(["rapport", "screen", "some text", "other text"]);
        match cli.command {
            Some(Command::Screen(args)) => {
                assert_eq!(args.text, "some text");
                assert_eq!(args.secondary.as_deref(), Some("other text"));
            }
            _ => panic!("Expected Screen command"),
        }
    }

    #[test]
    fn test_no_command_defaults_to_repl() {
        let cli = Cli::parse_from(["rapport"]);
        assert!(cli.command.is_none());
    }
}
