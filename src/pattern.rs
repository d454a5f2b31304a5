use serde::Serialize;

use crate::error::{Result, WordmaskError};

/// Index of a pattern inside a [`PatternSet`].
pub type PatternId = usize;

/// An ordered, validated collection of non-empty patterns.
///
/// Duplicates collapse onto their first occurrence, so every id refers to a
/// distinct pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<String>,
    char_lens: Vec<usize>,
}

impl PatternSet {
    /// Build a pattern set, failing on the first empty pattern. Nothing is
    /// returned on failure.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for (index, pattern) in patterns.into_iter().enumerate() {
            let pattern = pattern.into();
            if pattern.is_empty() {
                return Err(WordmaskError::InvalidPattern { index });
            }
            if set.patterns.contains(&pattern) {
                continue;
            }
            set.char_lens.push(pattern.chars().count());
            set.patterns.push(pattern);
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn get(&self, id: PatternId) -> Option<&str> {
        self.patterns.get(id).map(String::as_str)
    }

    /// Length of pattern `id` in characters.
    pub fn char_len(&self, id: PatternId) -> usize {
        self.char_lens[id]
    }

    /// Iterate `(id, pattern)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (PatternId, &str)> {
        self.patterns.iter().map(String::as_str).enumerate()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.patterns
    }

    /// Total number of characters across all patterns.
    pub fn total_chars(&self) -> usize {
        self.char_lens.iter().sum()
    }
}

/// One occurrence of a pattern in a text.
///
/// `start` and `end` are character indices into the scanned text; `end` is
/// inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Match {
    pub start: usize,
    pub end: usize,
    pub pattern: PatternId,
}

impl Match {
    /// Number of characters covered.
    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }

    pub fn span(&self) -> Span {
        Span {
            start: self.start,
            end: self.end,
        }
    }
}

/// An inclusive character range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Sort matches into scan order: ascending end, longer patterns first at a
/// shared end.
pub(crate) fn sort_scan_order(matches: &mut [Match]) {
    matches.sort_by(|a, b| a.end.cmp(&b.end).then(a.start.cmp(&b.start)));
}

/// Byte-offset to character-index translation for strategies that work on
/// UTF-8 bytes.
pub(crate) struct CharIndex {
    starts: Vec<usize>,
}

impl CharIndex {
    pub(crate) fn new(text: &str) -> Self {
        Self {
            starts: text.char_indices().map(|(b, _)| b).collect(),
        }
    }

    /// Character index of the char beginning at byte `offset`. `offset` must
    /// lie on a char boundary.
    pub(crate) fn char_at(&self, offset: usize) -> usize {
        self.starts.partition_point(|&b| b < offset)
    }

    /// Convert a half-open byte range into a match record.
    pub(crate) fn to_match(&self, start: usize, end: usize, pattern: PatternId) -> Match {
        let first = self.char_at(start);
        let past = self.char_at(end);
        Match {
            start: first,
            end: past - 1,
            pattern,
        }
    }
}
