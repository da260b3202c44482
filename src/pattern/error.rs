// Thu Oct 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("Invalid opcode token: {0}")]
    InvalidToken(String),
    #[error("Opcode out of range: {0}")]
    OutOfRange(u32),
}
