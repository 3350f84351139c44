//! Rapport CLI - Command-line interface for the relationship health scorer.

use clap::Parser;
use rapport_cli::commands;
use rapport_cli::repl;
use rapport_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    // Log to stderr so formatted output stays clean on stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> rapport_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        None | Some(Command::Repl) => {
            repl::run_repl(&config, &formatter)?;
        }
        Some(Command::Demo) => {
            commands::execute_demo(&config, &formatter)?;
        }
        Some(Command::Score(args)) => {
            commands::execute_score(args, &config, &formatter)?;
        }
        Some(Command::Screen(args)) => {
            commands::execute_screen(args, &formatter)?;
        }
    }

    Ok(())
}
