//! Consensus constants that validation reads but this crate does not interpret.
//!
//! Only the secure-message fee fields feed a derivation here
//! (`ChainParams::max_smsg_fee_rate_delta`); the rest are carried for the
//! validation pipeline.

use cinder_types::{Amount, Hash256};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConsensusParams {
    pub hash_genesis_block: Hash256,

    // ── Soft-fork activation heights ────────────────────────────────────
    pub bip34_height: u32,
    pub bip65_height: u32,
    pub bip66_height: u32,
    pub csv_height: u32,
    pub segwit_height: u32,

    // ── Feature activation times (Unix seconds) ─────────────────────────
    pub op_is_coinstake_time: i64,
    pub allow_op_is_coinstake_with_p2pkh: bool,
    pub paid_smsg_time: i64,
    pub csp2sh_time: i64,
    pub bulletproof_time: i64,
    pub rct_time: i64,
    pub stake_limit_time: i64,
    /// From this time on the smsg fee rate may always move by at least one unit.
    pub smsg_fee_rate_fix_time: i64,

    // ── Secure-message fees ─────────────────────────────────────────────
    /// Blocks between fee-rate adjustments.
    pub smsg_fee_period: u32,
    pub smsg_fee_funding_tx_per_k: Amount,
    pub smsg_fee_msg_per_day_per_k: Amount,
    /// Largest fee-rate change per adjustment, in parts per million of the previous rate.
    pub smsg_fee_max_delta_ppm: i64,
    pub smsg_min_difficulty: u32,
    pub smsg_difficulty_max_delta: u32,

    // ── Work and version bits ───────────────────────────────────────────
    pub pow_limit: Hash256,
    pub pow_target_spacing: i64,
    pub pow_no_retargeting: bool,
    pub rule_change_activation_threshold: u32,
    pub miner_confirmation_window: u32,
    pub minimum_chain_work: Hash256,
    pub default_assume_valid: Hash256,
}
