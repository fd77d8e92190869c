use proptest::prelude::*;

use cinder_chainparams::{
    networks, AddressType, BlockMeta, ChainTxData, PrefixFamily, TipStats, TreasuryFundSchedule,
    TreasuryFundSettings, YearPercentTable,
};
use cinder_types::{ChainType, Hash256};

fn schedule_from(times: &[i64]) -> TreasuryFundSchedule {
    let mut schedule = TreasuryFundSchedule::new();
    for (i, time) in times.iter().enumerate() {
        let settings = TreasuryFundSettings::new(format!("addr{i}"), 10, 5).unwrap();
        let _ = schedule.push(*time, settings);
    }
    schedule
}

proptest! {
    /// Later queries never see an older schedule entry.
    #[test]
    fn treasury_lookup_is_monotone(
        times in prop::collection::vec(-1_000_000i64..1_000_000, 0..16),
        t1 in -2_000_000i64..2_000_000,
        dt in 0i64..1_000_000,
    ) {
        let schedule = schedule_from(&times);
        let a = schedule.activation_time_at(t1);
        let b = schedule.activation_time_at(t1 + dt);
        match (a, b) {
            (Some(a), Some(b)) => prop_assert!(a <= b),
            (Some(_), None) => prop_assert!(false, "lookup lost its entry at a later time"),
            _ => {}
        }
        if let Some(first) = schedule.entries().first().map(|(t, _)| *t) {
            prop_assert_eq!(schedule.settings_at(first - 1), None);
        }
    }

    /// A push at or before the last activation time fails and leaves the schedule as it was.
    #[test]
    fn rejected_push_never_mutates(
        times in prop::collection::vec(-1_000_000i64..1_000_000, 1..16),
        back in 0i64..1_000_000,
    ) {
        let mut schedule = schedule_from(&times);
        let last = schedule.entries().last().map(|(t, _)| *t).unwrap();
        let before = schedule.clone();
        let settings = TreasuryFundSettings::new("late", 50, 1).unwrap();
        prop_assert!(schedule.push(last - back, settings).is_err());
        prop_assert_eq!(schedule, before);
    }

    /// Clamped lookup is defined for every year and sticks to the last entry.
    #[test]
    fn year_percent_clamps(
        percents in prop::collection::vec(0u32..=100, 1..64),
        year in any::<u32>(),
    ) {
        let table = YearPercentTable::new(percents.clone()).unwrap();
        let expected = percents[(year as usize).min(percents.len() - 1)];
        prop_assert_eq!(table.year_percent(year), expected);
        prop_assert_eq!(table.year_percent(year), table.year_percent(year));
    }

    /// Flipping one byte of a pinned hash, or moving the height, fails the check.
    #[test]
    fn import_check_is_exact(pin_idx in 0usize..3, byte in 0usize..32, bit in 0u8..8) {
        let params = networks::main_params().unwrap();
        let pin = params.imported_coinbase_txns()[pin_idx];
        prop_assert!(params.check_import_coinbase(pin.height, &pin.hash));

        let mut bytes = *pin.hash.as_bytes();
        bytes[byte] ^= 1 << bit;
        prop_assert!(!params.check_import_coinbase(pin.height, &Hash256::new(bytes)));

        let reused = |h: u32| params.imported_coinbase_txns().iter().any(|p| p.height == h);
        for height in [pin.height.wrapping_sub(1), pin.height + 1] {
            if !reused(height) {
                prop_assert!(!params.check_import_coinbase(height, &pin.hash));
            }
        }
    }

    /// Byte strings that are not a configured prefix never match exactly.
    #[test]
    fn unconfigured_bytes_do_not_match(bytes in prop::collection::vec(any::<u8>(), 0..6)) {
        let params = networks::test_params().unwrap();
        let configured = [PrefixFamily::Legacy, PrefixFamily::Bech32]
            .into_iter()
            .any(|family| params.prefix_table(family).configured().any(|(_, p)| p == bytes.as_slice()));
        prop_assert_eq!(params.match_prefix(&bytes).is_some(), configured);
    }

    /// On a treasury output height the staker keeps less; elsewhere nothing is carved.
    #[test]
    fn carve_out_only_on_boundary(cycle in 0u32..700, offset in 1u32..360, fees in 0i64..1_000_000_000) {
        let params = networks::test_params().unwrap();
        let (time, settings) = params.treasury_schedule().entries()[0].clone();
        let period = settings.output_period();
        prop_assume!(offset < period);

        let boundary = BlockMeta { height: cycle * period + period - 1, time };
        let plain = BlockMeta { height: cycle * period + offset - 1, time };

        let at_boundary = params.pos_reward_split(&boundary, fees);
        let off_boundary = params.pos_reward_split(&plain, fees);
        prop_assert_eq!(off_boundary.treasury, 0);
        prop_assert!(at_boundary.treasury > 0);
        prop_assert_eq!(at_boundary.gross, off_boundary.gross);
        prop_assert!(at_boundary.net() - fees < off_boundary.net() - fees);
    }

    /// The smsg bound never shrinks as time moves forward.
    #[test]
    fn smsg_bound_non_decreasing_in_time(
        rate in 0i64..1_000_000_000,
        t in 1_600_000_000i64..1_700_000_000,
        dt in 0i64..100_000_000,
    ) {
        let params = networks::main_params().unwrap();
        prop_assert!(
            params.max_smsg_fee_rate_delta(rate, t) <= params.max_smsg_fee_rate_delta(rate, t + dt)
        );
    }

    /// Progress estimates stay within [0, 1].
    #[test]
    fn progress_is_a_fraction(
        tx_count in 0u64..10_000_000,
        chain_tx in 0u64..20_000_000,
        tip_time in 0i64..2_000_000_000,
        now_offset in 0i64..100_000_000,
    ) {
        let data = ChainTxData { time: 1_600_000_000, tx_count, tx_rate: 0.01 };
        let tip = TipStats { chain_tx, time: tip_time };
        let progress = data.guess_verification_progress(Some(tip), 1_600_000_000 + now_offset);
        prop_assert!((0.0..=1.0).contains(&progress));
    }
}

#[test]
fn shipped_prefixes_round_trip() {
    for chain in ChainType::ALL {
        let params = networks::params_for(chain).unwrap();
        for family in [PrefixFamily::Legacy, PrefixFamily::Bech32] {
            let table = params.prefix_table(family);
            for (ty, prefix) in table.configured() {
                assert_eq!(table.match_prefix(prefix), Some(ty), "{chain} {family:?} {ty:?}");
            }
        }
        for ty in AddressType::ALL {
            assert!(!params.base58_prefix(ty).is_empty(), "{chain} has no legacy {ty:?}");
        }
    }
}
