//! Fundamental types for the Cinder chain.
//!
//! This crate defines the leaf types shared by every other crate in the workspace:
//! monetary amounts, 256-bit hashes, chain identity, timestamps and block headers.

pub mod amount;
pub mod block;
pub mod error;
pub mod hash;
pub mod network;
pub mod time;

pub use amount::{format_amount, money_range, Amount, CENT, COIN, MAX_MONEY};
pub use block::{Block, BlockHeader, CoinbaseTx};
pub use error::TypesError;
pub use hash::{sha256d, Hash256};
pub use network::ChainType;
pub use time::{Timestamp, SECONDS_PER_YEAR};
