use aho_corasick::{AhoCorasick, MatchKind};

use crate::error::{Result, WordmaskError};
use crate::pattern::{sort_scan_order, CharIndex, Match, PatternSet};

use super::Matcher;

/// Aho-Corasick via the `aho-corasick` crate, run in overlapping mode so
/// nested and overlapping occurrences are all reported.
pub struct LibraryMatcher {
    automaton: Option<AhoCorasick>,
}

impl LibraryMatcher {
    pub fn new(patterns: PatternSet) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self { automaton: None });
        }
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(patterns.as_slice())
            .map_err(|e| WordmaskError::StrategyBuild {
                strategy: "library".into(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            automaton: Some(automaton),
        })
    }
}

impl Matcher for LibraryMatcher {
    fn find_matches(&self, text: &str) -> Vec<Match> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let index = CharIndex::new(text);
        let mut matches: Vec<Match> = automaton
            .find_overlapping_iter(text)
            .map(|mat| index.to_match(mat.start(), mat.end(), mat.pattern().as_usize()))
            .collect();
        sort_scan_order(&mut matches);
        matches
    }

    fn name(&self) -> &str {
        "library"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_matches_reported() {
        let matcher = LibraryMatcher::new(PatternSet::new(["he", "she", "his", "hers"]).unwrap()).unwrap();
        let found: Vec<(usize, usize, usize)> = matcher
            .find_matches("ushers")
            .into_iter()
            .map(|m| (m.start, m.end, m.pattern))
            .collect();
        assert_eq!(found, vec![(1, 3, 1), (2, 3, 0), (2, 5, 3)]);
    }

    #[test]
    fn test_empty_patterns() {
        let matcher = LibraryMatcher::new(PatternSet::default()).unwrap();
        assert!(matcher.find_matches("anything").is_empty());
    }

    #[test]
    fn test_multibyte_offsets() {
        let matcher = LibraryMatcher::new(PatternSet::new(["快乐"]).unwrap()).unwrap();
        let found = matcher.find_matches("祝你快乐");
        assert_eq!((found[0].start, found[0].end), (2, 3));
    }
}
