pub mod redact;
pub mod scan;
pub mod strategies;
pub mod verify;

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::{load_words_file, parse_mask, parse_word_list, Config};
use crate::error::Result;
use crate::pattern::PatternSet;
use crate::redactor::Redactor;
use crate::registry::StrategyRegistry;
use crate::strategy::StrategyKind;

/// Pattern and input options shared by the commands that scan text.
#[derive(Debug, Clone, Default, Args)]
pub struct PatternArgs {
    /// Words to redact, comma- or whitespace-separated.
    #[arg(long, short = 'w')]
    pub words: Option<String>,

    /// File with one word or phrase per line.
    #[arg(long)]
    pub words_file: Option<PathBuf>,

    /// Matching strategy id (see `wordmask strategies`).
    #[arg(long, short = 's')]
    pub strategy: Option<String>,

    /// Mask character.
    #[arg(long, short = 'm')]
    pub mask: Option<String>,

    /// Input file. Reads stdin when omitted.
    pub input: Option<PathBuf>,
}

impl PatternArgs {
    /// Patterns from the command line, falling back to the config file when
    /// neither `--words` nor `--words-file` is given.
    pub fn patterns(&self, config: &Config) -> Result<PatternSet> {
        if self.words.is_none() && self.words_file.is_none() {
            return PatternSet::new(config.collect_words()?);
        }
        let mut words = self
            .words
            .as_deref()
            .map(parse_word_list)
            .unwrap_or_default();
        if let Some(path) = &self.words_file {
            words.extend(load_words_file(path)?);
        }
        PatternSet::new(words)
    }

    pub fn strategy(&self, config: &Config, registry: &StrategyRegistry) -> Result<StrategyKind> {
        registry.get(self.strategy.as_deref().unwrap_or(config.strategy.as_str()))
    }

    pub fn mask(&self, config: &Config) -> Result<char> {
        match &self.mask {
            Some(value) => parse_mask(value),
            None => Ok(config.mask),
        }
    }

    pub fn redactor(&self, config: &Config, registry: &StrategyRegistry) -> Result<Redactor> {
        let kind = self.strategy(config, registry)?;
        let patterns = self.patterns(config)?;
        let mask = self.mask(config)?;
        tracing::debug!(strategy = %kind, patterns = patterns.len(), "building redactor");
        Redactor::new(kind, patterns, mask)
    }

    pub fn read_input(&self) -> Result<String> {
        read_input(self.input.as_deref())
    }
}

/// Read `path`, or all of stdin when `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
