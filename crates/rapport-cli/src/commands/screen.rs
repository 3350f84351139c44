//! Screen command implementation.

use crate::cli::ScreenArgs;
use crate::error::Result;
use crate::output::Formatter;
use rapport_sentinel::Sentinel;

/// Execute the screen command: run the sentinel over one or two texts.
pub fn execute_screen(args: ScreenArgs, formatter: &Formatter) -> Result<()> {
    let sentinel = Sentinel::default_config();
    let verdict = sentinel.screen(&args.text, args.secondary.as_deref());
    println!("{}", formatter.format_verdict(&verdict)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_screen_runs_clean() {
        let args = ScreenArgs {
            text: "a pleasant chat".to_string(),
            secondary: None,
        };
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert!(execute_screen(args, &formatter).is_ok());
    }
}
