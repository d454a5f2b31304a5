use std::str::Chars;

use crate::automaton::{Automaton, StateId, ROOT};
use crate::pattern::{Match, PatternId};

/// Run `automaton` over `text` and collect every match in scan order.
pub fn scan(automaton: &Automaton, text: &str) -> Vec<Match> {
    automaton.find_iter(text).collect()
}

/// Lazy iterator over every occurrence of every pattern, overlapping and
/// nested occurrences included.
///
/// Matches are yielded by ascending end offset; at a shared end, longer
/// patterns come first. Each iterator owns its own scan state, so any number
/// of them may run against one automaton at once.
pub struct Matches<'a> {
    automaton: &'a Automaton,
    chars: Chars<'a>,
    state: StateId,
    consumed: usize,
    pending: std::slice::Iter<'a, PatternId>,
}

impl<'a> Matches<'a> {
    pub(crate) fn new(automaton: &'a Automaton, text: &'a str) -> Self {
        Self {
            automaton,
            chars: text.chars(),
            state: ROOT,
            consumed: 0,
            pending: Default::default(),
        }
    }
}

impl Iterator for Matches<'_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(&pattern) = self.pending.next() {
                let end = self.consumed - 1;
                let len = self.automaton.patterns().char_len(pattern);
                return Some(Match {
                    start: end + 1 - len,
                    end,
                    pattern,
                });
            }

            let c = self.chars.next()?;
            self.consumed += 1;
            self.state = self.automaton.next_state(self.state, c);
            self.pending = self.automaton.outputs(self.state).iter();
        }
    }
}
