// Thu Oct 15 2026 - Alex

use crate::classes::ClassError;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed catalog: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid class data in {context}: {source}")]
    Class {
        context: String,
        #[source]
        source: ClassError,
    },
    #[error("Invalid opcode pattern in {context}: {source}")]
    Pattern {
        context: String,
        #[source]
        source: PatternError,
    },
    #[error("Duplicate signature name: {0}")]
    DuplicateSignature(String),
    #[error("Signature name must not be empty")]
    EmptySignatureName,
}
