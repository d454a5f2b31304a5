use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum WordmaskError {
    #[error("invalid pattern at index {index}: patterns must be non-empty")]
    InvalidPattern { index: usize },

    #[error("unknown strategy: {id}")]
    UnknownStrategy { id: String },

    #[error("invalid mask: {value:?} (expected a single character)")]
    InvalidMask { value: String },

    #[error("failed to build {strategy} matcher: {reason}")]
    StrategyBuild { strategy: String, reason: String },

    #[error("config parse error in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WordmaskError>;
