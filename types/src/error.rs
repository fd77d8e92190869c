//! Errors for parsing leaf types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypesError {
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    #[error("expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("unknown chain name: {0}")]
    UnknownChain(String),
}
