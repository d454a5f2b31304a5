pub mod automaton;
pub mod brute;
pub mod library;
pub mod regex_alt;
pub mod trie;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WordmaskError};
use crate::pattern::{Match, PatternSet};

/// A pattern set compiled by one strategy.
pub trait Matcher: Send + Sync {
    /// Report every occurrence of every pattern in `text`, overlapping and
    /// nested ones included, ordered by ascending end offset.
    fn find_matches(&self, text: &str) -> Vec<Match>;

    /// Strategy id (for logging/debugging).
    fn name(&self) -> &str;
}

/// The interchangeable ways of finding matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Handwritten goto/fail/output automaton. The default.
    #[default]
    Automaton,
    /// The `aho-corasick` crate in overlapping mode.
    Library,
    /// Trie walk restarted at every offset.
    Trie,
    /// Every pattern compared at every offset. Reference scanner.
    BruteForce,
    /// Escaped regex alternation.
    Regex,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Automaton,
        StrategyKind::Library,
        StrategyKind::Trie,
        StrategyKind::BruteForce,
        StrategyKind::Regex,
    ];

    pub fn id(self) -> &'static str {
        match self {
            StrategyKind::Automaton => "automaton",
            StrategyKind::Library => "library",
            StrategyKind::Trie => "trie",
            StrategyKind::BruteForce => "brute_force",
            StrategyKind::Regex => "regex",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            StrategyKind::Automaton => "Automaton (goto/fail/output, handwritten)",
            StrategyKind::Library => "Aho-Corasick (aho-corasick crate)",
            StrategyKind::Trie => "Trie walk",
            StrategyKind::BruteForce => "Brute force (every pattern at every offset)",
            StrategyKind::Regex => "Regular expression alternation",
        }
    }

    /// Compile `patterns` once for repeated use.
    pub fn compile(self, patterns: &PatternSet) -> Result<Box<dyn Matcher>> {
        Ok(match self {
            StrategyKind::Automaton => Box::new(automaton::AutomatonMatcher::new(patterns.clone())),
            StrategyKind::Library => Box::new(library::LibraryMatcher::new(patterns.clone())?),
            StrategyKind::Trie => Box::new(trie::TrieMatcher::new(patterns.clone())),
            StrategyKind::BruteForce => Box::new(brute::BruteForceMatcher::new(patterns.clone())),
            StrategyKind::Regex => Box::new(regex_alt::RegexMatcher::new(patterns.clone())?),
        })
    }

    /// Compile and run in one step.
    pub fn find_matches(self, text: &str, patterns: &PatternSet) -> Result<Vec<Match>> {
        Ok(self.compile(patterns)?.find_matches(text))
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for StrategyKind {
    type Err = WordmaskError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.id() == normalized)
            .ok_or_else(|| WordmaskError::UnknownStrategy { id: s.to_string() })
    }
}
