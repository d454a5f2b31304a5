use serde::Serialize;

use crate::error::{Result, WordmaskError};
use crate::strategy::StrategyKind;

/// A registered strategy with its public id and display name.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyEntry {
    pub id: String,
    pub name: String,
    #[serde(skip)]
    pub kind: StrategyKind,
}

/// The strategies a host application offers. Built once at startup and
/// passed to whatever needs to resolve a strategy id.
#[derive(Debug, Clone)]
pub struct StrategyRegistry {
    entries: Vec<StrategyEntry>,
    default: StrategyKind,
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl StrategyRegistry {
    /// An empty registry whose default is the automaton strategy.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            default: StrategyKind::Automaton,
        }
    }

    /// All built-in strategies.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for kind in StrategyKind::ALL {
            registry.register(kind);
        }
        registry
    }

    /// Register `kind` under its id. Registering twice is a no-op.
    pub fn register(&mut self, kind: StrategyKind) {
        if self.entries.iter().any(|e| e.kind == kind) {
            return;
        }
        self.entries.push(StrategyEntry {
            id: kind.id().to_string(),
            name: kind.display_name().to_string(),
            kind,
        });
    }

    /// Resolve a strategy id, accepting `-` or `_` and any case.
    pub fn get(&self, id: &str) -> Result<StrategyKind> {
        let kind: StrategyKind = id.parse()?;
        if self.entries.iter().any(|e| e.kind == kind) {
            tracing::debug!(strategy = %kind, "resolved strategy");
            Ok(kind)
        } else {
            Err(WordmaskError::UnknownStrategy { id: id.to_string() })
        }
    }

    pub fn list(&self) -> &[StrategyEntry] {
        &self.entries
    }

    pub fn kinds(&self) -> impl Iterator<Item = StrategyKind> + '_ {
        self.entries.iter().map(|e| e.kind)
    }

    pub fn default_strategy(&self) -> StrategyKind {
        self.default
    }

    /// Change the default. The strategy is registered if it wasn't already.
    pub fn set_default(&mut self, kind: StrategyKind) {
        self.register(kind);
        self.default = kind;
    }
}
