// Thu Oct 15 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClassError {
    #[error("Invalid descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("Unknown access flag: {0}")]
    UnknownAccessFlag(String),
    #[error("Unknown opcode: {0}")]
    UnknownOpcode(String),
}
