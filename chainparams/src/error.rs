//! Errors raised while building or selecting chain parameters.

use crate::prefix::{AddressType, PrefixFamily};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("unsupported chain: {0}")]
    UnsupportedChain(String),

    #[error("treasury schedule entry at {attempted} must follow the last entry at {last}")]
    TreasuryScheduleOutOfOrder { last: i64, attempted: i64 },

    #[error("treasury stake percent must be in [0, 100], got {0}")]
    InvalidTreasuryPercent(u32),

    #[error("treasury output period must be at least one block")]
    InvalidTreasuryPeriod,

    #[error("{family:?} prefix for {second:?} duplicates {first:?}")]
    AmbiguousPrefix {
        family: PrefixFamily,
        first: AddressType,
        second: AddressType,
    },

    #[error("reward percentage table must not be empty")]
    EmptyYearTable,

    #[error("invalid anon output index: {0:?}")]
    InvalidAnonIndex(String),

    #[error("config error: {0}")]
    Config(String),
}
