//! Fixed trust anchors: imported coinbase pins, checkpoints and sync statistics.

use cinder_types::Hash256;
use serde::Serialize;
use std::collections::BTreeMap;

/// A height at which the coinbase must carry balances migrated from the
/// predecessor ledger, pinned by the hash of its output data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ImportedCoinbaseTxn {
    pub height: u32,
    pub hash: Hash256,
}

impl ImportedCoinbaseTxn {
    pub const fn new(height: u32, hash: Hash256) -> Self {
        Self { height, hash }
    }
}

/// Outcome of checking a candidate import payload against the pins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImportCheck {
    Verified,
    HashMismatch { expected: Hash256 },
    UnknownHeight,
    /// `height` lies past the last import height, whatever the pins say.
    BeyondImportWindow { last: u32 },
}

/// Look `height` up in `pins` and compare the payload hash.
///
/// Heights above `last_import_height` never verify.
pub fn check_import(
    pins: &[ImportedCoinbaseTxn],
    last_import_height: u32,
    height: u32,
    hash: &Hash256,
) -> ImportCheck {
    if height > last_import_height {
        return ImportCheck::BeyondImportWindow {
            last: last_import_height,
        };
    }
    match pins.iter().find(|pin| pin.height == height) {
        Some(pin) if pin.hash == *hash => ImportCheck::Verified,
        Some(pin) => ImportCheck::HashMismatch { expected: pin.hash },
        None => ImportCheck::UnknownHeight,
    }
}

/// Height → block hash anchors used during initial sync.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CheckpointData {
    checkpoints: BTreeMap<u32, Hash256>,
}

impl CheckpointData {
    pub fn new(checkpoints: impl IntoIterator<Item = (u32, Hash256)>) -> Self {
        Self {
            checkpoints: checkpoints.into_iter().collect(),
        }
    }

    /// Height of the highest checkpoint, if any.
    pub fn height(&self) -> Option<u32> {
        self.checkpoints.keys().next_back().copied()
    }

    pub fn get(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// Highest checkpoint at or below `height`.
    pub fn last_checkpoint_at_or_below(&self, height: u32) -> Option<(u32, &Hash256)> {
        self.checkpoints
            .range(..=height)
            .next_back()
            .map(|(h, hash)| (*h, hash))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash256)> + '_ {
        self.checkpoints.iter().map(|(h, hash)| (*h, hash))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }
}

/// Chain tip statistics fed into [`ChainTxData::guess_verification_progress`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TipStats {
    /// Transactions from genesis up to and including the tip.
    pub chain_tx: u64,
    /// Tip block time.
    pub time: i64,
}

/// Snapshot of transaction counts used to estimate sync progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct ChainTxData {
    /// Unix time of the last known transaction count.
    pub time: i64,
    /// Transactions between genesis and `time`.
    pub tx_count: u64,
    /// Estimated transactions per second after `time`.
    pub tx_rate: f64,
}

impl ChainTxData {
    /// Fraction of all transactions up to `now` that the tip has verified.
    pub fn guess_verification_progress(&self, tip: Option<TipStats>, now: i64) -> f64 {
        let Some(tip) = tip else {
            return 0.0;
        };
        let expected_total = if tip.chain_tx <= self.tx_count {
            self.tx_count as f64 + (now - self.time) as f64 * self.tx_rate
        } else {
            tip.chain_tx as f64 + (now - tip.time) as f64 * self.tx_rate
        };
        if expected_total <= 0.0 {
            return 0.0;
        }
        (tip.chain_tx as f64 / expected_total).min(1.0)
    }
}
