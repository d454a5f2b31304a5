use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, WordmaskError};
use crate::redact::DEFAULT_MASK;

/// Redaction settings from `.wordmask/config.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Mask character written over matched text. Default: `*`.
    #[serde(default = "default_mask")]
    pub mask: char,

    /// Matching strategy id. Default: `automaton`.
    #[serde(default = "default_strategy")]
    pub strategy: String,

    /// Inline patterns.
    #[serde(default)]
    pub words: Vec<String>,

    /// File with one pattern per line, appended to `words`.
    #[serde(default)]
    pub words_file: Option<PathBuf>,
}

fn default_mask() -> char {
    DEFAULT_MASK
}
fn default_strategy() -> String {
    "automaton".into()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mask: DEFAULT_MASK,
            strategy: default_strategy(),
            words: Vec::new(),
            words_file: None,
        }
    }
}

impl Config {
    /// Load config from a YAML file. Returns default if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&contents).map_err(|e| WordmaskError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Load config from the project root. Checks `.wordmask/config.yml`.
    pub fn load_project(project_root: &Path) -> Result<Self> {
        let path = super::dirs_project(project_root).join("config.yml");
        Self::load_from(&path)
    }

    /// Inline words followed by the contents of `words_file`, if set.
    pub fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();
        if let Some(path) = &self.words_file {
            words.extend(super::load_words_file(path)?);
        }
        Ok(words)
    }
}

/// Parse a mask given on the command line. Exactly one character.
pub fn parse_mask(value: &str) -> Result<char> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(WordmaskError::InvalidMask {
            value: value.to_string(),
        }),
    }
}
