use crate::pattern::{Match, Span};

/// Default mask character.
pub const DEFAULT_MASK: char = '*';

/// Collect match spans and coalesce overlapping or adjacent ones into
/// maximal runs, ordered by start.
pub fn merge_spans(matches: &[Match]) -> Vec<Span> {
    let mut spans: Vec<Span> = matches.iter().map(Match::span).collect();
    spans.sort();
    merge_ranges(&spans)
}

/// Merge sorted inclusive ranges that overlap or touch.
fn merge_ranges(ranges: &[Span]) -> Vec<Span> {
    let Some((&first, rest)) = ranges.split_first() else {
        return Vec::new();
    };
    let mut merged = vec![first];
    for &span in rest {
        match merged.last_mut() {
            Some(last) if span.start <= last.end + 1 => {
                last.end = last.end.max(span.end);
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Replace every character covered by `matches` with `mask`.
///
/// The output has exactly as many characters as `text`. Spans are merged
/// first and applied in a single pass over the input, so overlapping and
/// nested matches are handled once.
pub fn redact(text: &str, matches: &[Match], mask: char) -> String {
    if matches.is_empty() {
        return text.to_string();
    }
    let merged = merge_spans(matches);
    let mut spans = merged.iter().peekable();
    let mut result = String::with_capacity(text.len());

    for (i, c) in text.chars().enumerate() {
        while spans.peek().is_some_and(|s| s.end < i) {
            spans.next();
        }
        match spans.peek() {
            Some(s) if s.start <= i => result.push(mask),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(start: usize, end: usize) -> Match {
        Match {
            start,
            end,
            pattern: 0,
        }
    }

    #[test]
    fn test_merge_overlapping_and_adjacent() {
        let merged = merge_spans(&[m(4, 5), m(0, 1), m(1, 2), m(3, 3), m(8, 9)]);
        assert_eq!(
            merged,
            vec![Span { start: 0, end: 5 }, Span { start: 8, end: 9 }]
        );
    }

    #[test]
    fn test_merge_nested() {
        let merged = merge_spans(&[m(1, 3), m(2, 3), m(2, 5)]);
        assert_eq!(merged, vec![Span { start: 1, end: 5 }]);
    }

    #[test]
    fn test_redact_preserves_length() {
        let text = "ushers";
        let out = redact(text, &[m(1, 3), m(2, 3), m(2, 5)], '*');
        assert_eq!(out, "u*****");
        assert_eq!(out.chars().count(), text.chars().count());
    }

    #[test]
    fn test_redact_multibyte() {
        let out = redact("我很开心啊", &[m(2, 3)], '*');
        assert_eq!(out, "我很**啊");
    }

    #[test]
    fn test_redact_custom_mask() {
        assert_eq!(redact("secret", &[m(0, 5)], '#'), "######");
    }

    #[test]
    fn test_redact_no_matches() {
        assert_eq!(redact("hello", &[], '*'), "hello");
        assert_eq!(redact("", &[], '*'), "");
    }
}
