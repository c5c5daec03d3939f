use crate::validation::ValidationErrors;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TimeoffError {
    #[error("Invalid leave application: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Index {index} is out of range ({len} leave applications on record)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TimeoffError>;
