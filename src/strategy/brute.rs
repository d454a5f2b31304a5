use crate::pattern::{sort_scan_order, Match, PatternSet};

use super::Matcher;

/// Compares every pattern against every offset of the text. Slow, but
/// trivially correct, which makes it the reference for differential checks.
pub struct BruteForceMatcher {
    patterns: Vec<Vec<char>>,
}

impl BruteForceMatcher {
    pub fn new(patterns: PatternSet) -> Self {
        Self {
            patterns: patterns.iter().map(|(_, p)| p.chars().collect()).collect(),
        }
    }
}

impl Matcher for BruteForceMatcher {
    fn find_matches(&self, text: &str) -> Vec<Match> {
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();

        for (pattern, needle) in self.patterns.iter().enumerate() {
            if needle.len() > chars.len() {
                continue;
            }
            for start in 0..=chars.len() - needle.len() {
                if chars[start..start + needle.len()] == needle[..] {
                    matches.push(Match {
                        start,
                        end: start + needle.len() - 1,
                        pattern,
                    });
                }
            }
        }

        sort_scan_order(&mut matches);
        matches
    }

    fn name(&self) -> &str {
        "brute_force"
    }
}
