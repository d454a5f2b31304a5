use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::pattern::{Match, PatternSet};
use crate::redact::{self, DEFAULT_MASK};
use crate::strategy::{Matcher, StrategyKind};

/// A pattern set compiled with one strategy, plus the mask to apply.
pub struct Redactor {
    kind: StrategyKind,
    patterns: PatternSet,
    matcher: Box<dyn Matcher>,
    mask: char,
}

impl std::fmt::Debug for Redactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Redactor")
            .field("strategy", &self.kind)
            .field("patterns", &self.patterns.len())
            .field("mask", &self.mask)
            .finish()
    }
}

impl Redactor {
    pub fn new(kind: StrategyKind, patterns: PatternSet, mask: char) -> Result<Self> {
        let matcher = kind.compile(&patterns)?;
        Ok(Self {
            kind,
            patterns,
            matcher,
            mask,
        })
    }

    /// Automaton strategy with the default `*` mask.
    pub fn with_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(StrategyKind::Automaton, PatternSet::new(patterns)?, DEFAULT_MASK)
    }

    pub fn strategy(&self) -> StrategyKind {
        self.kind
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    pub fn mask(&self) -> char {
        self.mask
    }

    pub fn scan(&self, text: &str) -> Vec<Match> {
        self.matcher.find_matches(text)
    }

    pub fn redact(&self, text: &str) -> String {
        redact::redact(text, &self.scan(text), self.mask)
    }

    /// Redact `text` and describe what was found.
    pub fn report(&self, text: &str) -> RedactionReport {
        let matches = self.scan(text);
        let redacted_text = redact::redact(text, &matches, self.mask);

        let mut pattern_counts = BTreeMap::new();
        let found: Vec<FoundMatch> = matches
            .iter()
            .map(|m| {
                let pattern = self.patterns.get(m.pattern).unwrap_or_default().to_string();
                *pattern_counts.entry(pattern.clone()).or_insert(0) += 1;
                FoundMatch {
                    start: m.start,
                    end: m.end,
                    pattern,
                }
            })
            .collect();

        RedactionReport {
            strategy: self.kind.id().to_string(),
            char_count: text.chars().count(),
            original_text: text.to_string(),
            redacted_text,
            match_count: found.len(),
            redacted_chars: redact::merge_spans(&matches)
                .iter()
                .map(|s| s.end - s.start + 1)
                .sum(),
            matches: found,
            pattern_counts,
            timestamp: Utc::now(),
        }
    }
}

/// A match resolved to the text of its pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundMatch {
    pub start: usize,
    pub end: usize,
    pub pattern: String,
}

/// Outcome of one redaction call.
#[derive(Debug, Clone, Serialize)]
pub struct RedactionReport {
    pub strategy: String,
    pub original_text: String,
    pub redacted_text: String,
    pub char_count: usize,
    pub match_count: usize,
    /// Number of characters replaced with the mask.
    pub redacted_chars: usize,
    pub matches: Vec<FoundMatch>,
    /// Occurrences per pattern, overlapping occurrences included.
    pub pattern_counts: BTreeMap<String, usize>,
    pub timestamp: DateTime<Utc>,
}

/// A redactor that can be swapped while other threads are using it.
///
/// Readers take an `Arc` snapshot and keep it for the whole call, so a
/// concurrent `replace` never affects a scan already in progress.
pub struct SharedRedactor {
    current: RwLock<Arc<Redactor>>,
}

impl SharedRedactor {
    pub fn new(redactor: Redactor) -> Self {
        Self {
            current: RwLock::new(Arc::new(redactor)),
        }
    }

    pub fn current(&self) -> Arc<Redactor> {
        let guard = self.current.read().unwrap_or_else(|e| e.into_inner());
        Arc::clone(&guard)
    }

    /// Publish `redactor`, returning the one it replaced.
    pub fn replace(&self, redactor: Redactor) -> Arc<Redactor> {
        tracing::debug!(
            strategy = %redactor.strategy(),
            patterns = redactor.patterns().len(),
            "publishing new redactor"
        );
        let mut guard = self.current.write().unwrap_or_else(|e| e.into_inner());
        std::mem::replace(&mut *guard, Arc::new(redactor))
    }

    pub fn redact(&self, text: &str) -> String {
        self.current().redact(text)
    }
}
