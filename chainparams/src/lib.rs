//! Chain parameters for the Cinder proof-of-stake network.
//!
//! A [`ChainParams`] answers the consensus questions that depend only on
//! which network a node runs: the block reward at a height or time, the
//! treasury share and where it goes, which imported coinbases and
//! checkpoints are pinned, and which address type a prefix denotes.
//!
//! Parameter sets are created with [`create_chain_params`] and handed to
//! consumers through a [`ParamsHandle`]. Regression tests that need to move
//! consensus values use [`RegtestParams`].

pub mod anon;
pub mod checkpoints;
pub mod config;
pub mod consensus;
pub mod error;
pub mod genesis;
pub mod monetary;
pub mod networks;
pub mod params;
pub mod prefix;
pub mod regtest;
pub mod reward;
pub mod seeds;
pub mod selector;
pub mod treasury;

pub use anon::{parse_anon_indices, AnonOutputPolicy};
pub use checkpoints::{ChainTxData, CheckpointData, ImportedCoinbaseTxn, TipStats};
pub use config::ChainArgs;
pub use consensus::ConsensusParams;
pub use error::ParamsError;
pub use genesis::{create_genesis_block, GenesisSpec};
pub use monetary::{BlockIndex, BlockMeta, StakeReward};
pub use params::{ChainParams, CHAIN_NO_GENESIS, CHAIN_NO_STEALTH_SPEND};
pub use prefix::{AddressType, PrefixFamily, PrefixTable};
pub use regtest::RegtestParams;
pub use reward::{YearPercentTable, DEFAULT_YEAR_PERCENTS};
pub use seeds::SeedSpec6;
pub use selector::{create_chain_params, ParamsHandle, ParamsSwapGuard};
pub use treasury::{TreasuryFundSchedule, TreasuryFundSettings};
