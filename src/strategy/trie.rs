use std::collections::HashMap;

use crate::pattern::{sort_scan_order, Match, PatternId, PatternSet};

use super::Matcher;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    terminal: Option<PatternId>,
}

/// Plain trie, walked from every starting offset. No failure links, so the
/// cost is O(text length x longest pattern).
pub struct TrieMatcher {
    root: TrieNode,
    patterns: PatternSet,
}

impl TrieMatcher {
    pub fn new(patterns: PatternSet) -> Self {
        let mut root = TrieNode::default();
        for (id, pattern) in patterns.iter() {
            let node = pattern
                .chars()
                .fold(&mut root, |node, c| node.children.entry(c).or_default());
            node.terminal.get_or_insert(id);
        }
        Self { root, patterns }
    }

    /// Exact lookup of a whole pattern.
    pub fn contains(&self, word: &str) -> bool {
        let mut node = &self.root;
        for c in word.chars() {
            match node.children.get(&c) {
                Some(next) => node = next,
                None => return false,
            }
        }
        node.terminal.is_some()
    }
}

impl Matcher for TrieMatcher {
    fn find_matches(&self, text: &str) -> Vec<Match> {
        if self.patterns.is_empty() {
            return Vec::new();
        }
        let chars: Vec<char> = text.chars().collect();
        let mut matches = Vec::new();

        for start in 0..chars.len() {
            let mut node = &self.root;
            for (end, c) in chars.iter().enumerate().skip(start) {
                let Some(next) = node.children.get(c) else {
                    break;
                };
                node = next;
                if let Some(pattern) = node.terminal {
                    matches.push(Match {
                        start,
                        end,
                        pattern,
                    });
                }
            }
        }

        sort_scan_order(&mut matches);
        matches
    }

    fn name(&self) -> &str {
        "trie"
    }
}
