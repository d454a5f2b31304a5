//! Multi-pattern text redaction.
//!
//! Patterns are compiled once into a [`Redactor`](redactor::Redactor) (or
//! any [`Matcher`](strategy::Matcher)) and can then mask any number of texts.
//! Every occurrence is found in one left-to-right pass, overlapping and
//! nested ones included, and replaced with a mask character of the same
//! width.

pub mod automaton;
pub mod cli;
pub mod config;
pub mod error;
pub mod pattern;
pub mod redact;
pub mod redactor;
pub mod registry;
pub mod scan;
pub mod strategy;

pub use automaton::Automaton;
pub use error::{Result, WordmaskError};
pub use pattern::{Match, PatternId, PatternSet, Span};
pub use redact::{merge_spans, redact, DEFAULT_MASK};
pub use redactor::{RedactionReport, Redactor, SharedRedactor};
pub use registry::StrategyRegistry;
pub use strategy::{Matcher, StrategyKind};
