//! Scenario and property tests for the automaton, scanner and redaction.

use wordmask::automaton::Automaton;
use wordmask::pattern::PatternSet;
use wordmask::redact::{merge_spans, redact};
use wordmask::scan::scan;
use wordmask::{Redactor, WordmaskError};

fn spans_of(patterns: &[&str], text: &str) -> Vec<(usize, usize, String)> {
    let automaton = Automaton::from_patterns(patterns.iter().copied()).unwrap();
    scan(&automaton, text)
        .into_iter()
        .map(|m| {
            let word = automaton.patterns().get(m.pattern).unwrap().to_string();
            (m.start, m.end, word)
        })
        .collect()
}

fn redact_with(patterns: &[&str], text: &str) -> String {
    Redactor::with_patterns(patterns.iter().copied())
        .unwrap()
        .redact(text)
}

// ---------------------------------------------------------------------------
// Concrete scenarios
// ---------------------------------------------------------------------------

#[test]
fn ushers_reports_she_he_hers() {
    let found = spans_of(&["he", "she", "his", "hers"], "ushers");
    assert_eq!(
        found,
        vec![
            (1, 3, "she".to_string()),
            (2, 3, "he".to_string()),
            (2, 5, "hers".to_string()),
        ]
    );
    assert_eq!(redact_with(&["he", "she", "his", "hers"], "ushers"), "u*****");
}

#[test]
fn nested_prefix_patterns_both_reported() {
    let found = spans_of(&["ab", "abc"], "xabcx");
    assert_eq!(
        found,
        vec![(1, 2, "ab".to_string()), (1, 3, "abc".to_string())]
    );
    assert_eq!(redact_with(&["ab", "abc"], "xabcx"), "x***x");
}

#[test]
fn empty_pattern_set_is_identity() {
    assert!(spans_of(&[], "hello").is_empty());
    assert_eq!(redact_with(&[], "hello"), "hello");
}

#[test]
fn single_char_pattern_repeated() {
    let found = spans_of(&["a"], "aaa");
    let positions: Vec<(usize, usize)> = found.iter().map(|(s, e, _)| (*s, *e)).collect();
    assert_eq!(positions, vec![(0, 0), (1, 1), (2, 2)]);
    assert_eq!(redact_with(&["a"], "aaa"), "***");
}

#[test]
fn absent_pattern_leaves_text_alone() {
    assert!(spans_of(&["cat"], "the dog sat").is_empty());
    assert_eq!(redact_with(&["cat"], "the dog sat"), "the dog sat");
}

#[test]
fn empty_pattern_fails_construction() {
    let err = Automaton::from_patterns(["cat", ""]).unwrap_err();
    assert!(matches!(err, WordmaskError::InvalidPattern { index: 1 }));
    assert!(Redactor::with_patterns(["", "cat"]).is_err());
}

// ---------------------------------------------------------------------------
// Edge cases
// ---------------------------------------------------------------------------

#[test]
fn empty_text() {
    assert!(spans_of(&["a", "b"], "").is_empty());
    assert_eq!(redact_with(&["a"], ""), "");
}

#[test]
fn pattern_equal_to_text() {
    assert_eq!(spans_of(&["whole"], "whole"), vec![(0, 4, "whole".to_string())]);
}

#[test]
fn duplicate_patterns_do_not_duplicate_matches() {
    assert_eq!(spans_of(&["dup", "dup"], "a dup"), spans_of(&["dup"], "a dup"));
    assert_eq!(redact_with(&["dup", "dup"], "a dup"), "a ***");
}

#[test]
fn characters_outside_every_pattern() {
    assert!(spans_of(&["abc"], "zzzzzzzz").is_empty());
}

#[test]
fn chinese_text_masks_by_character() {
    assert_eq!(
        redact_with(&["小狼", "开心", "快乐"], "小狼今天很开心也很快乐"),
        "**今天很**也很**"
    );
}

#[test]
fn phrases_with_spaces() {
    assert_eq!(
        redact_with(&["credit card", "card number"], "my credit card number is"),
        "my ****************** is"
    );
}

#[test]
fn adjacent_matches_merge() {
    let automaton = Automaton::from_patterns(["ab", "cd"]).unwrap();
    let matches = scan(&automaton, "abcd");
    let merged = merge_spans(&matches);
    assert_eq!(merged.len(), 1);
    assert_eq!((merged[0].start, merged[0].end), (0, 3));
}

#[test]
fn automaton_is_reusable_across_texts() {
    let automaton = Automaton::from_patterns(["foo"]).unwrap();
    assert_eq!(scan(&automaton, "foo").len(), 1);
    assert_eq!(scan(&automaton, "foofoo").len(), 2);
    assert_eq!(scan(&automaton, "bar").len(), 0);
}

#[test]
fn concurrent_scans_share_one_automaton() {
    let automaton = std::sync::Arc::new(Automaton::from_patterns(["he", "she"]).unwrap());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let automaton = std::sync::Arc::clone(&automaton);
            std::thread::spawn(move || {
                let text = "she said hello ".repeat(i + 1);
                scan(&automaton, &text).len()
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        // "she" + "he" in "she", "he" in "hello"
        assert_eq!(handle.join().unwrap(), 3 * (i + 1));
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

const TEXTS: &[&str] = &[
    "",
    "ushers",
    "she sells sea shells by the sea shore",
    "aaaaabaaaab",
    "abababab",
    "the cat sat on the catalogue",
];

const PATTERN_SETS: &[&[&str]] = &[
    &["he", "she", "his", "hers"],
    &["a", "aa", "aaa", "b"],
    &["aba", "bab"],
    &["cat", "catalogue", "on the"],
    &["sea", "sea shore", "ells", "s"],
];

#[test]
fn redaction_preserves_length() {
    for patterns in PATTERN_SETS {
        for text in TEXTS {
            let out = redact_with(patterns, text);
            assert_eq!(out.chars().count(), text.chars().count(), "{patterns:?} on {text:?}");
        }
    }
}

#[test]
fn redaction_is_idempotent() {
    for patterns in PATTERN_SETS {
        let redactor = Redactor::with_patterns(patterns.iter().copied()).unwrap();
        for text in TEXTS {
            let once = redactor.redact(text);
            assert_eq!(redactor.redact(&once), once, "{patterns:?} on {text:?}");
        }
    }
}

#[test]
fn every_occurrence_is_covered() {
    for patterns in PATTERN_SETS {
        let automaton = Automaton::from_patterns(patterns.iter().copied()).unwrap();
        for text in TEXTS {
            let chars: Vec<char> = text.chars().collect();
            let matches = scan(&automaton, text);
            for (id, pattern) in automaton.patterns().iter() {
                let needle: Vec<char> = pattern.chars().collect();
                if needle.len() > chars.len() {
                    continue;
                }
                for i in 0..=chars.len() - needle.len() {
                    if chars[i..i + needle.len()] == needle[..] {
                        assert!(
                            matches
                                .iter()
                                .any(|m| m.pattern == id && m.start == i && m.end == i + needle.len() - 1),
                            "missing {pattern:?} at {i} in {text:?}"
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn no_false_positives() {
    for patterns in PATTERN_SETS {
        let automaton = Automaton::from_patterns(patterns.iter().copied()).unwrap();
        for text in TEXTS {
            let chars: Vec<char> = text.chars().collect();
            for m in scan(&automaton, text) {
                let slice: String = chars[m.start..=m.end].iter().collect();
                assert_eq!(Some(slice.as_str()), automaton.patterns().get(m.pattern));
            }
        }
    }
}

#[test]
fn matches_ordered_by_end() {
    for patterns in PATTERN_SETS {
        let automaton = Automaton::from_patterns(patterns.iter().copied()).unwrap();
        for text in TEXTS {
            let ends: Vec<usize> = scan(&automaton, text).iter().map(|m| m.end).collect();
            assert!(ends.windows(2).all(|w| w[0] <= w[1]), "{patterns:?} on {text:?}");
        }
    }
}

#[test]
fn pattern_set_rejects_before_building_anything() {
    let result = PatternSet::new(vec!["ok".to_string(), String::new(), "also ok".to_string()]);
    assert!(matches!(result, Err(WordmaskError::InvalidPattern { index: 1 })));
}

#[test]
fn redact_free_function_matches_redactor() {
    let automaton = Automaton::from_patterns(["sea"]).unwrap();
    let text = "sea shore";
    let matches = scan(&automaton, text);
    assert_eq!(redact(text, &matches, '#'), "### shore");
}
