use std::io::Write;

use crate::error::Result;
use crate::registry::StrategyRegistry;

/// Print the registered strategies. The default is marked with `*`.
pub fn run(json: bool, registry: &StrategyRegistry) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut stdout, registry.list())?;
        writeln!(stdout)?;
        return Ok(());
    }
    for entry in registry.list() {
        let marker = if entry.kind == registry.default_strategy() {
            '*'
        } else {
            ' '
        };
        writeln!(stdout, "{} {:<12} {}", marker, entry.id, entry.name)?;
    }
    Ok(())
}
