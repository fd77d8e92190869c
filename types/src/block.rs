//! Block header and the minimal block shape needed to pin a genesis.

use crate::amount::Amount;
use crate::hash::{sha256d, Hash256};
use serde::{Deserialize, Serialize};

/// Serialized header length in bytes.
pub const HEADER_SIZE: usize = 80;

/// A block header in the Bitcoin-family 80-byte layout.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_block: Hash256,
    pub merkle_root: Hash256,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    /// Little-endian serialization hashed for the block id.
    pub fn serialize(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[0..4].copy_from_slice(&self.version.to_le_bytes());
        out[4..36].copy_from_slice(self.prev_block.as_bytes());
        out[36..68].copy_from_slice(self.merkle_root.as_bytes());
        out[68..72].copy_from_slice(&self.time.to_le_bytes());
        out[72..76].copy_from_slice(&self.bits.to_le_bytes());
        out[76..80].copy_from_slice(&self.nonce.to_le_bytes());
        out
    }

    pub fn hash(&self) -> Hash256 {
        sha256d(&self.serialize())
    }
}

/// The single transaction of a genesis block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinbaseTx {
    /// Free-form message committed in the coinbase input.
    pub message: Vec<u8>,
    pub reward: Amount,
    pub output_script: Vec<u8>,
}

impl CoinbaseTx {
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(16 + self.message.len() + self.output_script.len());
        out.extend_from_slice(&(self.message.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.message);
        out.extend_from_slice(&self.reward.to_le_bytes());
        out.extend_from_slice(&(self.output_script.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.output_script);
        out
    }

    pub fn txid(&self) -> Hash256 {
        sha256d(&self.serialize())
    }
}

/// A block carrying only its coinbase. Enough to describe and hash a genesis.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub header: BlockHeader,
    pub coinbase: CoinbaseTx,
}

impl Block {
    pub fn hash(&self) -> Hash256 {
        self.header.hash()
    }

    /// Merkle root of a one-transaction block is that transaction's id.
    pub fn compute_merkle_root(&self) -> Hash256 {
        self.coinbase.txid()
    }

    pub fn time(&self) -> i64 {
        i64::from(self.header.time)
    }
}
