//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rapport_engine::ScoreEngine;
use rapport_sentinel::Sentinel;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
///
/// The REPL owns one engine for its whole lifetime: every `trust` and
/// `anchor` command grows the same session, and `score`/`report` read it.
pub fn run_repl(config: &Config, formatter: &Formatter) -> Result<()> {
    println!(
        "{}",
        formatter.info("Rapport REPL - Type 'help' for commands, 'exit' to quit")
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut engine = ScoreEngine::new(config.engine_config());
    let sentinel = Sentinel::default_config();

    loop {
        match editor.readline("rapport> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match line {
                    "exit" | "quit" | "q" => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    "help" | "?" => print_help(formatter),
                    _ => {
                        if let Err(e) = execute_line(line, &mut engine, &sentinel, formatter) {
                            eprintln!("{}", formatter.error(&e.to_string()));
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

/// Execute one REPL line against the session engine.
fn execute_line(
    line: &str,
    engine: &mut ScoreEngine,
    sentinel: &Sentinel,
    formatter: &Formatter,
) -> Result<()> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts[0] {
        "trust" => {
            let (accuracy, applicability, respect) = match parts[1..] {
                [a, b, c] | [a, b, c, _] => {
                    (parse_number(a)?, parse_number(b)?, parse_number(c)?)
                }
                _ => {
                    return Err(CliError::InvalidInput(
                        "Usage: trust <accuracy> <applicability> <respect> [rate]".to_string(),
                    ))
                }
            };

            let trust = match parts.get(4).copied() {
                Some(rate) => engine.record_trust_with_rate(
                    accuracy,
                    applicability,
                    respect,
                    parse_number(rate)?,
                )?,
                None => engine.record_trust(accuracy, applicability, respect)?,
            };
            println!("{}", formatter.success(&format!("trust -> {:.3}", trust)));
        }
        "anchor" => match parts[1..] {
            [tag, novelty] => {
                engine.record_anchor(tag, parse_number(novelty)?)?;
                println!("{}", formatter.success(&format!("anchor '{}' recorded", tag)));
            }
            _ => {
                return Err(CliError::InvalidInput(
                    "Usage: anchor <tag> <novelty>".to_string(),
                ))
            }
        },
        "score" => {
            println!("{:.3}", engine.compute_score());
        }
        "report" => {
            println!("{}", formatter.format_report(&engine.report())?);
        }
        "screen" => {
            if parts.len() < 2 {
                return Err(CliError::InvalidInput(
                    "Usage: screen <text...>".to_string(),
                ));
            }
            let text = parts[1..].join(" ");
            let verdict = sentinel.screen(&text, None);
            println!("{}", formatter.format_verdict(&verdict)?);
        }
        other => {
            return Err(CliError::InvalidInput(format!(
                "Unknown command: {}. Type 'help' for available commands.",
                other
            )));
        }
    }

    Ok(())
}

/// Parse a float argument.
fn parse_number(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .map_err(|_| CliError::InvalidInput(format!("Not a number: {}", s)))
}

/// Print REPL help.
fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!("  trust <accuracy> <applicability> <respect> [rate]");
    println!("      Record one exchange's quality inputs (each in 0..1)");
    println!("  anchor <tag> <novelty>");
    println!("      Record a tagged novelty anchor");
    println!("  score");
    println!("      Print the composite health score");
    println!("  report");
    println!("      Print the full health report");
    println!("  screen <text...>");
    println!("      Screen text against the harm-phrase denylist");
    println!("  help, ?     Show this help");
    println!("  exit, quit  Leave the REPL");
}

/// Get the REPL history file path.
fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let dir = home.join(".rapport");
    std::fs::create_dir_all(&dir)?;
    Ok(dir.join("history"))
}
