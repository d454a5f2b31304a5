use std::io::Write;

use crate::config::Config;
use crate::error::Result;
use crate::registry::StrategyRegistry;

use super::PatternArgs;

/// List every match as `start<TAB>end<TAB>pattern`, or as JSON.
pub fn run(args: &PatternArgs, json: bool, config: &Config, registry: &StrategyRegistry) -> Result<()> {
    let redactor = args.redactor(config, registry)?;
    let input = args.read_input()?;
    let report = redactor.report(&input);

    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, &report.matches)?;
        writeln!(stdout)?;
    } else {
        for m in &report.matches {
            writeln!(stdout, "{}\t{}\t{}", m.start, m.end, m.pattern)?;
        }
    }

    eprintln!(
        "wordmask: {} match(es), {} character(s) masked",
        report.match_count, report.redacted_chars
    );
    Ok(())
}
