use crate::automaton::Automaton;
use crate::pattern::{Match, PatternSet};
use crate::scan;

use super::Matcher;

/// Default strategy: the handwritten automaton.
pub struct AutomatonMatcher {
    automaton: Automaton,
}

impl AutomatonMatcher {
    pub fn new(patterns: PatternSet) -> Self {
        Self {
            automaton: Automaton::build(patterns),
        }
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }
}

impl Matcher for AutomatonMatcher {
    fn find_matches(&self, text: &str) -> Vec<Match> {
        scan::scan(&self.automaton, text)
    }

    fn name(&self) -> &str {
        "automaton"
    }
}
