use regex::{Regex, RegexSet};

use crate::error::{Result, WordmaskError};
use crate::pattern::{sort_scan_order, CharIndex, Match, PatternSet};

use super::Matcher;

/// Escaped pattern alternation via `RegexSet`, with one `Regex` per pattern
/// to locate occurrences.
pub struct RegexMatcher {
    regex_set: RegexSet,
    patterns: Vec<Regex>,
}

impl RegexMatcher {
    pub fn new(patterns: PatternSet) -> Result<Self> {
        let escaped: Vec<String> = patterns.iter().map(|(_, p)| regex::escape(p)).collect();
        let regex_set = RegexSet::new(&escaped).map_err(build_error)?;
        let compiled = escaped
            .iter()
            .map(|p| Regex::new(p).map_err(build_error))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            regex_set,
            patterns: compiled,
        })
    }
}

fn build_error(e: regex::Error) -> WordmaskError {
    WordmaskError::StrategyBuild {
        strategy: "regex".into(),
        reason: e.to_string(),
    }
}

impl Matcher for RegexMatcher {
    fn find_matches(&self, text: &str) -> Vec<Match> {
        // The set tells us which patterns occur at all; only those are located.
        let matching: Vec<usize> = self.regex_set.matches(text).into_iter().collect();
        if matching.is_empty() {
            return Vec::new();
        }

        let index = CharIndex::new(text);
        let mut matches = Vec::new();
        for idx in matching {
            let re = &self.patterns[idx];
            let mut from = 0;
            // find_iter skips overlapping occurrences, so restart one char
            // past each match start instead.
            while let Some(found) = re.find_at(text, from) {
                matches.push(index.to_match(found.start(), found.end(), idx));
                let step = text[found.start()..]
                    .chars()
                    .next()
                    .map_or(1, char::len_utf8);
                from = found.start() + step;
            }
        }

        sort_scan_order(&mut matches);
        matches
    }

    fn name(&self) -> &str {
        "regex"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metacharacters_are_literal() {
        let matcher = RegexMatcher::new(PatternSet::new(["a.b", "(x)"]).unwrap()).unwrap();
        assert!(matcher.find_matches("aXb x").is_empty());
        let found = matcher.find_matches("a.b (x)");
        assert_eq!(found.len(), 2);
        assert_eq!((found[0].start, found[0].end), (0, 2));
        assert_eq!((found[1].start, found[1].end), (4, 6));
    }

    #[test]
    fn test_overlapping_occurrences_of_one_pattern() {
        let matcher = RegexMatcher::new(PatternSet::new(["aba"]).unwrap()).unwrap();
        let found: Vec<(usize, usize)> = matcher
            .find_matches("ababa")
            .into_iter()
            .map(|m| (m.start, m.end))
            .collect();
        assert_eq!(found, vec![(0, 2), (2, 4)]);
    }

    #[test]
    fn test_no_match() {
        let matcher = RegexMatcher::new(PatternSet::new(["cat"]).unwrap()).unwrap();
        assert!(matcher.find_matches("the dog sat").is_empty());
    }

    #[test]
    fn test_empty_patterns() {
        let matcher = RegexMatcher::new(PatternSet::default()).unwrap();
        assert!(matcher.find_matches("hello").is_empty());
    }
}
