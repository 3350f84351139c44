//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use rapport_engine::{read_snapshot, write_snapshot, ScoreEngine, SessionEvent};
use std::fs;
use std::io::Read;

/// Execute the score command: replay a session event log and report.
pub fn execute_score(args: ScoreArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut engine_config = config.engine_config();
    if let Some(rate) = args.rate {
        engine_config.smoothing_rate = rate;
    }

    let mut engine = match &args.load {
        Some(path) => ScoreEngine::from_snapshot(engine_config, read_snapshot(path)?),
        None => ScoreEngine::new(engine_config),
    };

    let events = read_events(&args)?;
    engine.replay(&events)?;

    println!("{}", formatter.format_report(&engine.report())?);

    if let Some(path) = &args.save {
        write_snapshot(path, &engine.snapshot())?;
        println!(
            "{}",
            formatter.success(&format!("Snapshot saved to {}", path.display()))
        );
    }

    Ok(())
}

/// Read the event log from the file or stdin source.
fn read_events(args: &ScoreArgs) -> Result<Vec<SessionEvent>> {
    let contents = match (&args.file, args.stdin) {
        (Some(path), false) => fs::read_to_string(path)?,
        (None, true) => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        (Some(_), true) => {
            return Err(CliError::InvalidInput(
                "Specify either --file or --stdin, not both".to_string(),
            ))
        }
        (None, false) => {
            // Replaying nothing is legal when loading a snapshot
            if args.load.is_some() {
                return Ok(Vec::new());
            }
            return Err(CliError::InvalidInput(
                "No event source. Use --file, --stdin, or --load".to_string(),
            ));
        }
    };

    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_events_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"type": "trust", "accuracy": 0.9, "applicability": 0.9, "mutual_respect": 0.9}}]"#
        )
        .unwrap();

        let args = ScoreArgs {
            file: Some(file.path().to_path_buf()),
            stdin: false,
            load: None,
            save: None,
            rate: None,
        };

        let events = read_events(&args).unwrap();
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_conflicting_sources_rejected() {
        let args = ScoreArgs {
            file: Some("whatever.json".into()),
            stdin: true,
            load: None,
            save: None,
            rate: None,
        };
        assert!(matches!(
            read_events(&args),
            Err(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_no_source_without_snapshot_rejected() {
        let args = ScoreArgs {
            file: None,
            stdin: false,
            load: None,
            save: None,
            rate: None,
        };
        assert!(read_events(&args).is_err());
    }

    #[test]
    fn test_snapshot_only_is_allowed() {
        let args = ScoreArgs {
            file: None,
            stdin: false,
            load: Some("state.json".into()),
            save: None,
            rate: None,
        };
        assert!(read_events(&args).unwrap().is_empty());
    }
}
