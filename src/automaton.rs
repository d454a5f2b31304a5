//! Goto/fail/output automaton over the characters of a [`PatternSet`].
//!
//! Construction runs in two phases: a trie over every pattern, then a
//! breadth-first pass that fills in failure links and folds each state's
//! failure-chain outputs into its own output list. After construction the
//! automaton is immutable and can be shared across threads.

use std::collections::{BTreeMap, VecDeque};

use crate::error::Result;
use crate::pattern::{PatternId, PatternSet};
use crate::scan::Matches;

pub type StateId = usize;

/// The initial state, also the state reached on total mismatch.
pub const ROOT: StateId = 0;

#[derive(Debug, Clone, Default)]
struct State {
    transitions: BTreeMap<char, StateId>,
    fail: StateId,
    /// Every pattern that is a suffix of this state's string, longest first.
    outputs: Vec<PatternId>,
    depth: usize,
}

/// A compiled multi-pattern automaton.
#[derive(Debug, Clone)]
pub struct Automaton {
    states: Vec<State>,
    patterns: PatternSet,
}

impl Automaton {
    /// Validate `patterns` and compile them. Fails with
    /// [`InvalidPattern`](crate::error::WordmaskError::InvalidPattern) if any
    /// pattern is empty.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self::build(PatternSet::new(patterns)?))
    }

    /// Compile an already validated pattern set.
    pub fn build(patterns: PatternSet) -> Self {
        let mut automaton = Self {
            states: vec![State::default()],
            patterns,
        };
        automaton.insert_patterns();
        automaton.link_failures();
        tracing::debug!(
            patterns = automaton.patterns.len(),
            states = automaton.states.len(),
            "built automaton"
        );
        automaton
    }

    fn insert_patterns(&mut self) {
        for id in 0..self.patterns.len() {
            let mut current = ROOT;
            let Some(pattern) = self.patterns.get(id) else {
                continue;
            };
            let chars: Vec<char> = pattern.chars().collect();
            for c in chars {
                current = match self.states[current].transitions.get(&c) {
                    Some(&next) => next,
                    None => {
                        let next = self.states.len();
                        let depth = self.states[current].depth + 1;
                        self.states.push(State {
                            depth,
                            ..State::default()
                        });
                        self.states[current].transitions.insert(c, next);
                        next
                    }
                };
            }
            // PatternSet already removed duplicates, so a terminal state
            // receives at most one pattern of its own.
            self.states[current].outputs.push(id);
        }
    }

    fn link_failures(&mut self) {
        let mut queue = VecDeque::new();

        let first_level: Vec<StateId> = self.states[ROOT].transitions.values().copied().collect();
        for state in first_level {
            self.states[state].fail = ROOT;
            queue.push_back(state);
        }

        while let Some(r) = queue.pop_front() {
            let edges: Vec<(char, StateId)> = self.states[r]
                .transitions
                .iter()
                .map(|(&c, &s)| (c, s))
                .collect();

            for (c, s) in edges {
                let mut f = self.states[r].fail;
                let fail = loop {
                    if let Some(target) = self.goto(f, c) {
                        break target;
                    }
                    if f == ROOT {
                        break ROOT;
                    }
                    f = self.states[f].fail;
                };
                self.states[s].fail = fail;

                let inherited = self.states[fail].outputs.clone();
                self.states[s].outputs.extend(inherited);

                queue.push_back(s);
            }
        }
    }

    /// Direct trie transition, if one was created during insertion.
    pub fn goto(&self, state: StateId, c: char) -> Option<StateId> {
        self.states[state].transitions.get(&c).copied()
    }

    pub fn fail(&self, state: StateId) -> StateId {
        self.states[state].fail
    }

    /// Patterns ending at `state`, including those inherited along the
    /// failure chain.
    pub fn outputs(&self, state: StateId) -> &[PatternId] {
        &self.states[state].outputs
    }

    /// Length of the string spelled from the root to `state`.
    pub fn depth(&self, state: StateId) -> usize {
        self.states[state].depth
    }

    /// Resolve the transition out of `state` on `c`, following failure links
    /// until a goto edge exists or the root is reached.
    pub fn next_state(&self, mut state: StateId, c: char) -> StateId {
        loop {
            if let Some(next) = self.goto(state, c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.states[state].fail;
        }
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Lazily iterate every occurrence of every pattern in `text`.
    pub fn find_iter<'a>(&'a self, text: &'a str) -> Matches<'a> {
        Matches::new(self, text)
    }
}
