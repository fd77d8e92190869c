//! Genesis block construction.

use cinder_types::{Amount, Block, BlockHeader, CoinbaseTx, Hash256};

/// Inputs that fully determine a genesis block.
#[derive(Clone, Debug)]
pub struct GenesisSpec {
    pub message: &'static str,
    pub output_script: Vec<u8>,
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: Amount,
}

/// Build the genesis block: a single coinbase committing to `message`.
pub fn create_genesis_block(spec: &GenesisSpec) -> Block {
    let coinbase = CoinbaseTx {
        message: spec.message.as_bytes().to_vec(),
        reward: spec.reward,
        output_script: spec.output_script.clone(),
    };
    let header = BlockHeader {
        version: spec.version,
        prev_block: Hash256::ZERO,
        merkle_root: coinbase.txid(),
        time: spec.time,
        bits: spec.bits,
        nonce: spec.nonce,
    };
    Block { header, coinbase }
}
