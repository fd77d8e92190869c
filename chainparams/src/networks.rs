//! The parameter sets shipped for each network.
//!
//! `main` is the production chain, `test` the public test network and
//! `regtest` a local chain with trivial difficulty for integration tests.
//! Genesis hashes are derived from the genesis block rather than written
//! down, and every network checkpoints its genesis at height 0.

use crate::anon::AnonOutputPolicy;
use crate::checkpoints::{ChainTxData, CheckpointData, ImportedCoinbaseTxn};
use crate::consensus::ConsensusParams;
use crate::error::ParamsError;
use crate::genesis::{create_genesis_block, GenesisSpec};
use crate::params::ChainParams;
use crate::prefix::{AddressType, PrefixFamily, PrefixTable};
use crate::reward::{YearPercentTable, DEFAULT_YEAR_PERCENTS};
use crate::seeds::SeedSpec6;
use crate::treasury::{TreasuryFundSchedule, TreasuryFundSettings};
use cinder_types::{ChainType, Hash256, CENT, COIN};
use parking_lot::RwLock;

const GENESIS_MESSAGE: &str = "Cinder 2021-07-01: proof of stake, proof of patience";
const GENESIS_OUTPUT_SCRIPT: [u8; 2] = [0x51, 0x87];

const MAIN_GENESIS_TIME: u32 = 1_625_097_600;
const TEST_GENESIS_TIME: u32 = 1_625_097_700;
const REGTEST_GENESIS_TIME: u32 = 1_625_097_800;

const DEFAULT_STAKE_TIMESTAMP_MASK: u32 = (1 << 4) - 1;

const MAIN_POW_LIMIT: Hash256 =
    Hash256::from_hex_const("000000000000bfffffffffffffffffffffffffffffffffffffffffffffffffff");
const TEST_POW_LIMIT: Hash256 =
    Hash256::from_hex_const("000000000005ffffffffffffffffffffffffffffffffffffffffffffffffffff");
const REGTEST_POW_LIMIT: Hash256 =
    Hash256::from_hex_const("7fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");

const MAIN_MINIMUM_CHAIN_WORK: Hash256 =
    Hash256::from_hex_const("00000000000000000000000000000000000000000000000000c4e2f1a8b35d70");
const MAIN_ASSUME_VALID: Hash256 =
    Hash256::from_hex_const("3be1d7c5b07aa9e2c2f1d45a0f7fd1c6a2b8e4f3c9d0a1b2c3d4e5f60718293a");

/// Payload hashes of the balances migrated in the first main-net coinbases.
const MAIN_IMPORTS: [ImportedCoinbaseTxn; 3] = [
    ImportedCoinbaseTxn::new(
        1,
        Hash256::from_hex_const("5d2a7c0e8b4f3a91c6e0d7f2b18a3c4e9f0d1b2a3c4d5e6f708192a3b4c5d6e7"),
    ),
    ImportedCoinbaseTxn::new(
        2,
        Hash256::from_hex_const("a17f3e9c2d6b5a4830f1e2d3c4b5a69788796a5b4c3d2e1f0a9b8c7d6e5f4a3b"),
    ),
    ImportedCoinbaseTxn::new(
        3,
        Hash256::from_hex_const("0c9e8d7f6a5b4c3d2e1f00a1b2c3d4e5f60718293a4b5c6d7e8f90a1b2c3d4e5"),
    ),
];

const MAIN_CHECKPOINTS: [(u32, Hash256); 2] = [
    (
        5_000,
        Hash256::from_hex_const("9a3b7c1d5e2f4a6b8c0d1e3f5a7b9c2d4e6f8a0b1c3d5e7f9a2b4c6d8e0f1a3b"),
    ),
    (
        50_000,
        Hash256::from_hex_const("3be1d7c5b07aa9e2c2f1d45a0f7fd1c6a2b8e4f3c9d0a1b2c3d4e5f60718293a"),
    ),
];

/// Parameters for `chain` with default anon policy and no overrides.
pub fn params_for(chain: ChainType) -> Result<ChainParams, ParamsError> {
    match chain {
        ChainType::Main => main_params(),
        ChainType::Test => test_params(),
        ChainType::Regtest => regtest_params(),
    }
}

pub fn main_params() -> Result<ChainParams, ParamsError> {
    let genesis = create_genesis_block(&GenesisSpec {
        message: GENESIS_MESSAGE,
        output_script: GENESIS_OUTPUT_SCRIPT.to_vec(),
        time: MAIN_GENESIS_TIME,
        nonce: 0x0003_8f2e,
        bits: 0x1f00_ffff,
        version: 1,
        reward: 0,
    });
    let genesis_hash = genesis.hash();
    let genesis_time = genesis.time();

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        bip34_height: 0,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 0,
        segwit_height: 0,
        op_is_coinstake_time: 1_625_097_600,
        allow_op_is_coinstake_with_p2pkh: false,
        paid_smsg_time: 1_627_776_000,
        csp2sh_time: 1_627_776_000,
        bulletproof_time: 1_630_454_400,
        rct_time: 1_630_454_400,
        stake_limit_time: 1_633_046_400,
        smsg_fee_rate_fix_time: 1_656_633_600,
        smsg_fee_period: 5_040,
        smsg_fee_funding_tx_per_k: 200_000,
        smsg_fee_msg_per_day_per_k: 50_000,
        smsg_fee_max_delta_ppm: 43_000,
        smsg_min_difficulty: 0x1eff_ffff,
        smsg_difficulty_max_delta: 0x000d_c6c0,
        pow_limit: MAIN_POW_LIMIT,
        pow_target_spacing: 120,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1_916,
        miner_confirmation_window: 2_016,
        minimum_chain_work: MAIN_MINIMUM_CHAIN_WORK,
        default_assume_valid: MAIN_ASSUME_VALID,
    };

    let mut treasury = TreasuryFundSchedule::new();
    treasury.push(
        genesis_time,
        TreasuryFundSettings::new("CcrRq7UwdjYn3TKvbGRn5Ps9HK37wCvcTs", 33, 5_040)?,
    )?;
    treasury.push(
        1_656_633_600,
        TreasuryFundSettings::new("CRdmoTvTp9kjqnRBMkX6sWMGtBVsvE3g6a", 25, 5_040)?,
    )?;

    let base58_prefixes = PrefixTable::builder(PrefixFamily::Legacy)
        .set(AddressType::PubkeyAddress, [0x26])
        .set(AddressType::ScriptAddress, [0x61])
        .set(AddressType::SecretKey, [0xa6])
        .set(AddressType::ExtPublicKey, [0x69, 0x6e, 0x82, 0xd1])
        .set(AddressType::ExtSecretKey, [0x8f, 0x1d, 0xae, 0xb8])
        .set(AddressType::StealthAddress, [0x14])
        .set(AddressType::ExtKeyHash, [0x4b])
        .set(AddressType::ExtAccHash, [0x17])
        .set(AddressType::ExtPublicKeyBtc, [0x04, 0x88, 0xb2, 0x1e])
        .set(AddressType::ExtSecretKeyBtc, [0x04, 0x88, 0xad, 0xe4])
        .set(AddressType::PubkeyAddress256, [0x39])
        .set(AddressType::ScriptAddress256, [0x3d])
        .set(AddressType::StakeOnlyPkAddr, [0x2e])
        .build()?;

    Ok(ChainParams {
        chain: ChainType::Main,
        consensus,
        message_start: [0xc7, 0xa3, 0x52, 0x1e],
        default_port: 51_728,
        bip44_id_legacy: 0x8000_002c,
        bip44_id_current: 0x8000_0213,
        modifier_interval: 10 * 60,
        stake_min_confirmations: 225,
        target_spacing: 120,
        target_timespan: 24 * 60 * 60,
        stake_timestamp_mask: DEFAULT_STAKE_TIMESTAMP_MASK,
        block_reward: 6 * COIN,
        coin_year_reward: 2 * CENT,
        year_percents: YearPercentTable::new(DEFAULT_YEAR_PERCENTS.to_vec())?,
        treasury,
        imported_coinbase_txns: MAIN_IMPORTS.to_vec(),
        last_import_height: 3,
        checkpoints: CheckpointData::new(
            std::iter::once((0, genesis_hash)).chain(MAIN_CHECKPOINTS),
        ),
        chain_tx_data: ChainTxData {
            time: 1_656_633_600,
            tx_count: 1_412_908,
            tx_rate: 0.0091,
        },
        genesis,
        dns_seeds: vec![
            "mainnet-seed.cinder.network".into(),
            "dnsseed-mainnet.cinder.network".into(),
        ],
        fixed_seeds: vec![
            SeedSpec6::ipv4([192, 0, 2, 17], 51_728),
            SeedSpec6::ipv4([198, 51, 100, 42], 51_728),
            SeedSpec6::ipv4([203, 0, 113, 9], 51_728),
        ],
        base58_prefixes,
        bech32_prefixes: bech32_prefixes("c")?,
        bech32_hrp: "cn".into(),
        prune_after_height: 100_000,
        assumed_blockchain_size: 2,
        assumed_chain_state_size: 1,
        default_consistency_checks: false,
        require_standard: true,
        is_test_chain: false,
        is_mockable_chain: false,
        anon: RwLock::new(AnonOutputPolicy::default()),
    })
}

pub fn test_params() -> Result<ChainParams, ParamsError> {
    let genesis = create_genesis_block(&GenesisSpec {
        message: GENESIS_MESSAGE,
        output_script: GENESIS_OUTPUT_SCRIPT.to_vec(),
        time: TEST_GENESIS_TIME,
        nonce: 0x0001_7a03,
        bits: 0x1f00_ffff,
        version: 1,
        reward: 0,
    });
    let genesis_hash = genesis.hash();

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        bip34_height: 0,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 0,
        segwit_height: 0,
        op_is_coinstake_time: 0,
        allow_op_is_coinstake_with_p2pkh: true,
        paid_smsg_time: 0,
        csp2sh_time: 0,
        bulletproof_time: 0,
        rct_time: 0,
        stake_limit_time: 1_627_776_000,
        smsg_fee_rate_fix_time: 1_646_092_800,
        smsg_fee_period: 360,
        smsg_fee_funding_tx_per_k: 200_000,
        smsg_fee_msg_per_day_per_k: 50_000,
        smsg_fee_max_delta_ppm: 43_000,
        smsg_min_difficulty: 0x1eff_ffff,
        smsg_difficulty_max_delta: 0x000d_c6c0,
        pow_limit: TEST_POW_LIMIT,
        pow_target_spacing: 120,
        pow_no_retargeting: false,
        rule_change_activation_threshold: 1_512,
        miner_confirmation_window: 2_016,
        minimum_chain_work: Hash256::ZERO,
        default_assume_valid: Hash256::ZERO,
    };

    let mut treasury = TreasuryFundSchedule::new();
    treasury.push(
        0,
        TreasuryFundSettings::new("tdTuzvyjJbEbqEqh5d4vy8KQfEyFRY5dgm", 33, 360)?,
    )?;

    Ok(ChainParams {
        chain: ChainType::Test,
        consensus,
        message_start: [0x07, 0x13, 0x22, 0x0d],
        default_port: 51_928,
        bip44_id_legacy: 0x8000_0001,
        bip44_id_current: 0x8000_0001,
        modifier_interval: 10 * 60,
        stake_min_confirmations: 225,
        target_spacing: 120,
        target_timespan: 24 * 60 * 60,
        stake_timestamp_mask: DEFAULT_STAKE_TIMESTAMP_MASK,
        block_reward: 6 * COIN,
        coin_year_reward: 2 * CENT,
        year_percents: YearPercentTable::new(DEFAULT_YEAR_PERCENTS.to_vec())?,
        treasury,
        imported_coinbase_txns: Vec::new(),
        last_import_height: 0,
        checkpoints: CheckpointData::new([(0, genesis_hash)]),
        chain_tx_data: ChainTxData {
            time: 1_646_092_800,
            tx_count: 318_224,
            tx_rate: 0.0021,
        },
        genesis,
        dns_seeds: vec!["testnet-seed.cinder.network".into()],
        fixed_seeds: vec![SeedSpec6::ipv4([192, 0, 2, 18], 51_928)],
        base58_prefixes: test_base58_prefixes()?,
        bech32_prefixes: bech32_prefixes("tc")?,
        bech32_hrp: "tcn".into(),
        prune_after_height: 1_000,
        assumed_blockchain_size: 1,
        assumed_chain_state_size: 1,
        default_consistency_checks: false,
        require_standard: false,
        is_test_chain: true,
        is_mockable_chain: false,
        anon: RwLock::new(AnonOutputPolicy::default()),
    })
}

pub fn regtest_params() -> Result<ChainParams, ParamsError> {
    let genesis = create_genesis_block(&GenesisSpec {
        message: GENESIS_MESSAGE,
        output_script: GENESIS_OUTPUT_SCRIPT.to_vec(),
        time: REGTEST_GENESIS_TIME,
        nonce: 0,
        bits: 0x207f_ffff,
        version: 1,
        reward: 0,
    });
    let genesis_hash = genesis.hash();

    let consensus = ConsensusParams {
        hash_genesis_block: genesis_hash,
        bip34_height: 0,
        bip65_height: 0,
        bip66_height: 0,
        csv_height: 0,
        segwit_height: 0,
        op_is_coinstake_time: 0,
        allow_op_is_coinstake_with_p2pkh: false,
        paid_smsg_time: 0,
        csp2sh_time: 0,
        bulletproof_time: 0,
        rct_time: 0,
        stake_limit_time: 0,
        smsg_fee_rate_fix_time: 0,
        smsg_fee_period: 50,
        smsg_fee_funding_tx_per_k: 200_000,
        smsg_fee_msg_per_day_per_k: 50_000,
        smsg_fee_max_delta_ppm: 43_000,
        smsg_min_difficulty: 0x1f0f_ffff,
        smsg_difficulty_max_delta: 0x000d_c6c0,
        pow_limit: REGTEST_POW_LIMIT,
        pow_target_spacing: 5,
        pow_no_retargeting: true,
        rule_change_activation_threshold: 108,
        miner_confirmation_window: 144,
        minimum_chain_work: Hash256::ZERO,
        default_assume_valid: Hash256::ZERO,
    };

    let mut treasury = TreasuryFundSchedule::new();
    treasury.push(
        0,
        TreasuryFundSettings::new("rTvv9vsbu269mjYYEecPYinDG8Bt7D86qD", 25, 10)?,
    )?;

    Ok(ChainParams {
        chain: ChainType::Regtest,
        consensus,
        message_start: [0x09, 0x12, 0x06, 0x0c],
        default_port: 11_928,
        bip44_id_legacy: 0x8000_0001,
        bip44_id_current: 0x8000_0001,
        modifier_interval: 10 * 60,
        stake_min_confirmations: 12,
        target_spacing: 5,
        target_timespan: 16 * 60,
        stake_timestamp_mask: 0,
        block_reward: 6 * COIN,
        coin_year_reward: 2 * CENT,
        year_percents: YearPercentTable::new(DEFAULT_YEAR_PERCENTS.to_vec())?,
        treasury,
        imported_coinbase_txns: Vec::new(),
        last_import_height: 0,
        checkpoints: CheckpointData::new([(0, genesis_hash)]),
        chain_tx_data: ChainTxData::default(),
        genesis,
        dns_seeds: Vec::new(),
        fixed_seeds: Vec::new(),
        base58_prefixes: test_base58_prefixes()?,
        bech32_prefixes: bech32_prefixes("rtc")?,
        bech32_hrp: "rtcn".into(),
        prune_after_height: 1_000,
        assumed_blockchain_size: 0,
        assumed_chain_state_size: 0,
        default_consistency_checks: true,
        require_standard: true,
        is_test_chain: true,
        is_mockable_chain: true,
        anon: RwLock::new(AnonOutputPolicy::default()),
    })
}

/// Version bytes shared by the test and regtest networks.
fn test_base58_prefixes() -> Result<PrefixTable, ParamsError> {
    PrefixTable::builder(PrefixFamily::Legacy)
        .set(AddressType::PubkeyAddress, [0x76])
        .set(AddressType::ScriptAddress, [0x7a])
        .set(AddressType::SecretKey, [0x2e])
        .set(AddressType::ExtPublicKey, [0xe1, 0x42, 0x78, 0x00])
        .set(AddressType::ExtSecretKey, [0x04, 0x88, 0x94, 0x78])
        .set(AddressType::StealthAddress, [0x15])
        .set(AddressType::ExtKeyHash, [0x89])
        .set(AddressType::ExtAccHash, [0x0b])
        .set(AddressType::ExtPublicKeyBtc, [0x04, 0x35, 0x87, 0xcf])
        .set(AddressType::ExtSecretKeyBtc, [0x04, 0x35, 0x83, 0x94])
        .set(AddressType::PubkeyAddress256, [0x77])
        .set(AddressType::ScriptAddress256, [0x7b])
        .set(AddressType::StakeOnlyPkAddr, [0x7f])
        .build()
}

/// Human-readable prefixes, each led by the network's `lead` characters.
fn bech32_prefixes(lead: &str) -> Result<PrefixTable, ParamsError> {
    const SUFFIXES: [(AddressType, &str); 11] = [
        (AddressType::PubkeyAddress, "h"),
        (AddressType::ScriptAddress, "r"),
        (AddressType::SecretKey, "x"),
        (AddressType::ExtPublicKey, "ep"),
        (AddressType::ExtSecretKey, "ex"),
        (AddressType::StealthAddress, "s"),
        (AddressType::ExtKeyHash, "ek"),
        (AddressType::ExtAccHash, "ea"),
        (AddressType::PubkeyAddress256, "l"),
        (AddressType::ScriptAddress256, "j"),
        (AddressType::StakeOnlyPkAddr, "cs"),
    ];
    SUFFIXES
        .iter()
        .fold(PrefixTable::builder(PrefixFamily::Bech32), |builder, (ty, suffix)| {
            builder.set(*ty, format!("{lead}{suffix}"))
        })
        .build()
}
