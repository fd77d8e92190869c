//! The per-network parameter set.
//!
//! A [`ChainParams`] is built once per network by [`crate::networks`] and
//! shared read-only as `Arc<ChainParams>`. It exposes no consensus
//! mutators; regression tests that need to tweak consensus values go
//! through [`crate::RegtestParams`]. The only runtime-adjustable state is
//! the anonymous-output policy, which is node policy rather than consensus.

use crate::anon::AnonOutputPolicy;
use crate::checkpoints::{check_import, ChainTxData, CheckpointData, ImportCheck, ImportedCoinbaseTxn};
use crate::consensus::ConsensusParams;
use crate::prefix::{AddressType, PrefixFamily, PrefixTable};
use crate::reward::YearPercentTable;
use crate::seeds::SeedSpec6;
use crate::treasury::TreasuryFundSchedule;
use cinder_types::{Amount, Block, ChainType, Hash256};
use parking_lot::RwLock;
use std::collections::BTreeSet;

/// Coin type used by wallets that have not opted into a chain-specific BIP-44 id.
pub const CHAIN_NO_GENESIS: u32 = 444_444;
/// Hardened derivation index reserved for stealth spend keys.
pub const CHAIN_NO_STEALTH_SPEND: u32 = 444_445;

#[derive(Debug)]
pub struct ChainParams {
    pub(crate) chain: ChainType,
    pub(crate) consensus: ConsensusParams,
    pub(crate) message_start: [u8; 4],
    pub(crate) default_port: u16,
    pub(crate) bip44_id_legacy: u32,
    pub(crate) bip44_id_current: u32,

    pub(crate) modifier_interval: u32,
    pub(crate) stake_min_confirmations: u32,
    pub(crate) target_spacing: u32,
    pub(crate) target_timespan: u32,
    pub(crate) stake_timestamp_mask: u32,

    pub(crate) block_reward: Amount,
    pub(crate) coin_year_reward: Amount,
    pub(crate) year_percents: YearPercentTable,
    pub(crate) treasury: TreasuryFundSchedule,

    pub(crate) imported_coinbase_txns: Vec<ImportedCoinbaseTxn>,
    pub(crate) last_import_height: u32,
    pub(crate) checkpoints: CheckpointData,
    pub(crate) chain_tx_data: ChainTxData,

    pub(crate) genesis: Block,
    pub(crate) dns_seeds: Vec<String>,
    pub(crate) fixed_seeds: Vec<SeedSpec6>,
    pub(crate) base58_prefixes: PrefixTable,
    pub(crate) bech32_prefixes: PrefixTable,
    pub(crate) bech32_hrp: String,

    pub(crate) prune_after_height: u64,
    pub(crate) assumed_blockchain_size: u64,
    pub(crate) assumed_chain_state_size: u64,
    pub(crate) default_consistency_checks: bool,
    pub(crate) require_standard: bool,
    pub(crate) is_test_chain: bool,
    pub(crate) is_mockable_chain: bool,

    pub(crate) anon: RwLock<AnonOutputPolicy>,
}

impl Clone for ChainParams {
    /// Copies the parameter set, snapshotting the current anon policy.
    fn clone(&self) -> Self {
        Self {
            chain: self.chain,
            consensus: self.consensus.clone(),
            message_start: self.message_start,
            default_port: self.default_port,
            bip44_id_legacy: self.bip44_id_legacy,
            bip44_id_current: self.bip44_id_current,
            modifier_interval: self.modifier_interval,
            stake_min_confirmations: self.stake_min_confirmations,
            target_spacing: self.target_spacing,
            target_timespan: self.target_timespan,
            stake_timestamp_mask: self.stake_timestamp_mask,
            block_reward: self.block_reward,
            coin_year_reward: self.coin_year_reward,
            year_percents: self.year_percents.clone(),
            treasury: self.treasury.clone(),
            imported_coinbase_txns: self.imported_coinbase_txns.clone(),
            last_import_height: self.last_import_height,
            checkpoints: self.checkpoints.clone(),
            chain_tx_data: self.chain_tx_data,
            genesis: self.genesis.clone(),
            dns_seeds: self.dns_seeds.clone(),
            fixed_seeds: self.fixed_seeds.clone(),
            base58_prefixes: self.base58_prefixes.clone(),
            bech32_prefixes: self.bech32_prefixes.clone(),
            bech32_hrp: self.bech32_hrp.clone(),
            prune_after_height: self.prune_after_height,
            assumed_blockchain_size: self.assumed_blockchain_size,
            assumed_chain_state_size: self.assumed_chain_state_size,
            default_consistency_checks: self.default_consistency_checks,
            require_standard: self.require_standard,
            is_test_chain: self.is_test_chain,
            is_mockable_chain: self.is_mockable_chain,
            anon: RwLock::new(self.anon.read().clone()),
        }
    }
}

impl ChainParams {
    // ── Identity ─────────────────────────────────────────────────────────

    pub fn chain_type(&self) -> ChainType {
        self.chain
    }

    /// Network id string: `"main"`, `"test"` or `"regtest"`.
    pub fn network_id(&self) -> &'static str {
        self.chain.as_str()
    }

    pub fn consensus(&self) -> &ConsensusParams {
        &self.consensus
    }

    pub fn message_start(&self) -> [u8; 4] {
        self.message_start
    }

    pub fn default_port(&self) -> u16 {
        self.default_port
    }

    /// BIP-44 coin type; `legacy` selects the id used by pre-migration wallets.
    pub fn bip44_id(&self, legacy: bool) -> u32 {
        if legacy {
            self.bip44_id_legacy
        } else {
            self.bip44_id_current
        }
    }

    pub fn genesis_block(&self) -> &Block {
        &self.genesis
    }

    pub fn dns_seeds(&self) -> &[String] {
        &self.dns_seeds
    }

    pub fn fixed_seeds(&self) -> &[SeedSpec6] {
        &self.fixed_seeds
    }

    // ── Timing ───────────────────────────────────────────────────────────

    /// Seconds between stake modifier recomputations.
    pub fn modifier_interval(&self) -> u32 {
        self.modifier_interval
    }

    /// Depth a staked output needs before it may stake again.
    pub fn stake_min_confirmations(&self) -> u32 {
        self.stake_min_confirmations
    }

    pub fn target_spacing(&self) -> u32 {
        self.target_spacing
    }

    pub fn target_timespan(&self) -> u32 {
        self.target_timespan
    }

    /// Kernel timestamps are masked with this value; it does not vary by height yet.
    pub fn stake_timestamp_mask(&self, _height: u32) -> u32 {
        self.stake_timestamp_mask
    }

    // ── Policy flags ─────────────────────────────────────────────────────

    pub fn default_consistency_checks(&self) -> bool {
        self.default_consistency_checks
    }

    pub fn require_standard(&self) -> bool {
        self.require_standard
    }

    pub fn is_test_chain(&self) -> bool {
        self.is_test_chain
    }

    pub fn is_mockable_chain(&self) -> bool {
        self.is_mockable_chain
    }

    pub fn prune_after_height(&self) -> u64 {
        self.prune_after_height
    }

    /// Minimum free space (GB) needed for the data directory.
    pub fn assumed_blockchain_size(&self) -> u64 {
        self.assumed_blockchain_size
    }

    /// Minimum free space (GB) needed for the chain state when pruned.
    pub fn assumed_chain_state_size(&self) -> u64 {
        self.assumed_chain_state_size
    }

    /// Blocks can be produced on demand when difficulty never retargets.
    pub fn mine_blocks_on_demand(&self) -> bool {
        self.consensus.pow_no_retargeting
    }

    // ── Reward tables ────────────────────────────────────────────────────

    pub fn year_percents(&self) -> &YearPercentTable {
        &self.year_percents
    }

    /// Reward percentage for `year`, clamped to the table.
    pub fn year_percent(&self, year: u32) -> u32 {
        self.year_percents.year_percent(year)
    }

    pub fn treasury_schedule(&self) -> &TreasuryFundSchedule {
        &self.treasury
    }

    // ── Imports and checkpoints ──────────────────────────────────────────

    pub fn imported_coinbase_txns(&self) -> &[ImportedCoinbaseTxn] {
        &self.imported_coinbase_txns
    }

    pub fn last_import_height(&self) -> u32 {
        self.last_import_height
    }

    /// Whether `hash` is the pinned import payload for `height`.
    pub fn check_import_coinbase(&self, height: u32, hash: &Hash256) -> bool {
        match check_import(
            &self.imported_coinbase_txns,
            self.last_import_height,
            height,
            hash,
        ) {
            ImportCheck::Verified => true,
            ImportCheck::HashMismatch { expected } => {
                tracing::warn!(
                    chain = %self.chain,
                    height,
                    got = %hash,
                    %expected,
                    "imported coinbase hash mismatch"
                );
                false
            }
            ImportCheck::UnknownHeight => {
                tracing::warn!(chain = %self.chain, height, "no imported coinbase at height");
                false
            }
            ImportCheck::BeyondImportWindow { last } => {
                tracing::warn!(
                    chain = %self.chain,
                    height,
                    last_import_height = last,
                    "imported coinbase past the import window"
                );
                false
            }
        }
    }

    pub fn checkpoints(&self) -> &CheckpointData {
        &self.checkpoints
    }

    /// Height of the highest checkpoint; zero when none are configured.
    pub fn checkpoint_height(&self) -> u32 {
        self.checkpoints.height().unwrap_or(0)
    }

    pub fn tx_data(&self) -> &ChainTxData {
        &self.chain_tx_data
    }

    // ── Address prefixes ─────────────────────────────────────────────────

    pub fn base58_prefix(&self, ty: AddressType) -> &[u8] {
        self.base58_prefixes.prefix_for(ty)
    }

    pub fn bech32_prefix(&self, ty: AddressType) -> &[u8] {
        self.bech32_prefixes.prefix_for(ty)
    }

    pub fn prefix_table(&self, family: PrefixFamily) -> &PrefixTable {
        match family {
            PrefixFamily::Legacy => &self.base58_prefixes,
            PrefixFamily::Bech32 => &self.bech32_prefixes,
        }
    }

    pub fn bech32_hrp(&self) -> &str {
        &self.bech32_hrp
    }

    /// Exact match against the legacy table, then the bech32 table.
    ///
    /// Each table is unambiguous on its own, so a tie can only span families.
    /// Family order breaks it: a legacy entry wins over an equal bech32 entry.
    pub fn match_prefix(&self, candidate: &[u8]) -> Option<(AddressType, PrefixFamily)> {
        [PrefixFamily::Legacy, PrefixFamily::Bech32]
            .into_iter()
            .find_map(|family| {
                self.prefix_table(family)
                    .match_prefix(candidate)
                    .map(|ty| (ty, family))
            })
    }

    pub fn is_bech32_prefix(&self, candidate: &[u8]) -> bool {
        self.bech32_prefixes.match_prefix(candidate).is_some()
    }

    pub fn match_bech32_prefix(&self, candidate: &[u8]) -> Option<AddressType> {
        self.bech32_prefixes.match_prefix(candidate)
    }

    /// Type of an encoded bech32-style string, judged by its leading bytes.
    pub fn match_bech32_leading(&self, encoded: &[u8]) -> Option<AddressType> {
        self.bech32_prefixes.match_leading(encoded)
    }

    // ── Anonymous-output policy ──────────────────────────────────────────

    pub fn anon_policy(&self) -> AnonOutputPolicy {
        self.anon.read().clone()
    }

    pub fn set_anon_restricted(&self, restricted: bool) {
        self.anon.write().restricted = restricted;
        tracing::info!(chain = %self.chain, restricted, "anon restriction updated");
    }

    pub fn is_anon_restricted(&self) -> bool {
        self.anon.read().restricted
    }

    pub fn recovery_address(&self) -> String {
        self.anon.read().recovery_address.clone()
    }

    pub fn set_recovery_address(&self, address: impl Into<String>) {
        let address = address.into();
        tracing::info!(chain = %self.chain, %address, "anon recovery address updated");
        self.anon.write().recovery_address = address;
    }

    pub fn anon_max_output_size(&self) -> u32 {
        self.anon.read().max_output_size
    }

    pub fn set_anon_max_output_size(&self, size: u32) {
        self.anon.write().max_output_size = size;
        tracing::info!(chain = %self.chain, size, "anon max output size updated");
    }

    pub fn blacklisted_anon_outputs(&self) -> BTreeSet<u64> {
        self.anon.read().blacklisted.clone()
    }

    pub fn is_blacklisted_anon_output(&self, index: u64) -> bool {
        self.anon.read().blacklisted.contains(&index)
    }

    /// Replace the whole blacklist.
    pub fn set_blacklisted_anon_outputs(&self, indices: BTreeSet<u64>) {
        let count = indices.len();
        self.anon.write().blacklisted = indices;
        tracing::info!(chain = %self.chain, count, "anon output blacklist replaced");
    }

    pub(crate) fn replace_anon_policy(&self, policy: AnonOutputPolicy) {
        *self.anon.write() = policy;
    }
}
