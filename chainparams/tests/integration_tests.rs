//! Integration tests wiring the selector, config loader and regtest
//! mutators together the way a node and its test harness do.

use std::io::Write;
use std::sync::Arc;
use std::thread;

use cinder_chainparams::{
    create_chain_params, BlockMeta, ChainArgs, ChainParams, ParamsHandle, RegtestParams,
    TreasuryFundSettings,
};
use cinder_types::{ChainType, COIN};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn write_args(toml: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(toml.as_bytes()).expect("write args");
    file
}

/// Stands in for a validation component that is handed the handle at construction.
struct RewardOracle {
    params: ParamsHandle,
}

impl RewardOracle {
    fn reward_after(&self, height: u32, time: i64) -> i64 {
        self.params
            .active()
            .pos_reward(&BlockMeta { height, time }, 0)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn node_startup_from_toml() {
    cinder_utils::init_test_logging();
    let file = write_args(
        r#"
        chain = "test"
        anon_restricted = false
        anon_recovery_address = "tdRecoveryAddress"
        blacklisted_anon_outputs = "5,6"
        "#,
    );
    let args = ChainArgs::from_toml_file(file.path()).unwrap();
    let handle = ParamsHandle::select(&args, &args.chain).unwrap();

    let active = handle.active();
    assert_eq!(active.chain_type(), ChainType::Test);
    assert!(!active.is_anon_restricted());
    assert_eq!(active.recovery_address(), "tdRecoveryAddress");
    assert!(active.is_blacklisted_anon_output(6));
}

#[test]
fn unknown_chain_in_config_is_reported() {
    let file = write_args("chain = \"devnet\"");
    let args = ChainArgs::from_toml_file(file.path()).unwrap();
    assert!(ParamsHandle::select(&args, &args.chain).is_err());
}

#[test]
fn components_see_swapped_regtest_params() {
    cinder_utils::init_test_logging();
    let handle = ParamsHandle::select(&ChainArgs::default(), "regtest").unwrap();
    let oracle = RewardOracle {
        params: handle.clone(),
    };
    let default_reward = oracle.reward_after(1, 0);

    let mut tweaked = RegtestParams::thaw((*handle.active()).clone());
    tweaked.set_block_reward(100 * COIN);
    tweaked
        .push_treasury_settings(1_000_000, TreasuryFundSettings::new("rtNoCarve", 0, 1).unwrap())
        .unwrap();

    {
        let _guard = handle.swap_scoped(tweaked.into_params());
        assert_eq!(oracle.reward_after(1, 2_000_000), 100 * COIN);
    }
    assert_eq!(oracle.reward_after(1, 0), default_reward);
}

#[test]
fn readers_on_other_threads_share_one_instance() {
    let handle = ParamsHandle::select(&ChainArgs::default(), "main").unwrap();
    let expected = handle.active();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let handle = handle.clone();
            thread::spawn(move || handle.active())
        })
        .collect();
    for reader in readers {
        let seen: Arc<ChainParams> = reader.join().unwrap();
        assert!(Arc::ptr_eq(&seen, &expected));
    }
}

#[test]
fn anon_policy_updates_are_visible_to_all_holders() {
    let params = Arc::new(create_chain_params(&ChainArgs::default(), "main").unwrap());
    let writer = Arc::clone(&params);
    thread::spawn(move || writer.set_anon_max_output_size(32))
        .join()
        .unwrap();
    assert_eq!(params.anon_max_output_size(), 32);
}
