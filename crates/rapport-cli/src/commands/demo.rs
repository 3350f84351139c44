//! Demo command implementation.

use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use rapport_engine::ScoreEngine;

/// Execute the demo command: a scripted two-exchange session.
pub fn execute_demo(config: &Config, formatter: &Formatter) -> Result<()> {
    let mut engine = ScoreEngine::new(config.engine_config());

    engine.record_trust(0.96, 0.97, 0.99)?;
    engine.record_anchor("brazier_glow", 0.85)?;
    engine.record_trust(0.98, 0.99, 1.00)?;
    engine.record_anchor("plasma_envy", 0.92)?;

    println!("{}", formatter.info("Demo session: 2 exchanges, 2 anchors"));
    println!("{}", formatter.format_report(&engine.report())?);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_demo_runs_clean() {
        let config = Config::default();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_demo(&config, &formatter).is_ok());
    }
}
