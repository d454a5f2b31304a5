use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::registry::StrategyRegistry;

use super::PatternArgs;

/// Redact the input and write it to stdout, or print the full report as JSON.
pub fn run(args: &PatternArgs, json: bool, config: &Config, registry: &StrategyRegistry) -> Result<()> {
    let redactor = args.redactor(config, registry)?;
    let input = args.read_input()?;

    let mut stdout = std::io::stdout().lock();
    if json {
        let report = redactor.report(&input);
        serde_json::to_writer_pretty(&mut stdout, &report)?;
        writeln!(stdout)?;
    } else {
        stdout.write_all(redactor.redact(&input).as_bytes())?;
    }
    stdout.flush()?;
    Ok(())
}
