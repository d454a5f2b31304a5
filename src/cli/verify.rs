use crate::config::Config;
use crate::error::Result;
use crate::redact::merge_spans;
use crate::registry::StrategyRegistry;
use crate::strategy::StrategyKind;

use super::PatternArgs;

/// Run every registered strategy over the input and compare the merged
/// spans with the brute-force reference. Exits 1 on any disagreement.
pub fn run(args: &PatternArgs, config: &Config, registry: &StrategyRegistry) -> Result<()> {
    let patterns = args.patterns(config)?;
    let input = args.read_input()?;

    let reference = merge_spans(&StrategyKind::BruteForce.find_matches(&input, &patterns)?);
    eprintln!(
        "wordmask: verifying {} strategies against {} reference span(s)...",
        registry.list().len(),
        reference.len()
    );

    let mut failures = 0;
    for kind in registry.kinds() {
        let spans = merge_spans(&kind.find_matches(&input, &patterns)?);
        if spans == reference {
            println!("{:<12} ok", kind.id());
        } else {
            failures += 1;
            tracing::warn!(
                strategy = %kind,
                expected = reference.len(),
                actual = spans.len(),
                "strategy disagrees with reference"
            );
            println!("{:<12} MISMATCH", kind.id());
        }
    }

    if failures > 0 {
        eprintln!("\nwordmask: {} strategy(ies) disagree. Aborting.", failures);
        std::process::exit(1);
    }
    eprintln!("wordmask: all strategies agree.");
    Ok(())
}
