use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheatError {
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    #[error("Entry not found: {0}")]
    NotFound(u32),

    #[error("Illegal state: {0}")]
    IllegalState(String),

    #[error("Duplicate entry id: {0}")]
    DuplicateId(u32),

    #[error("Illegal combinator: {0:?} (expected one of: all, and, any, or)")]
    IllegalCombinator(String),

    #[error("Corrupt list file {}: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl CheatError {
    /// True for the errors the list store raises when handed inconsistent data.
    pub fn is_data_error(&self) -> bool {
        matches!(
            self,
            CheatError::InvalidEntry(_) | CheatError::IllegalState(_) | CheatError::DuplicateId(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CheatError>;
