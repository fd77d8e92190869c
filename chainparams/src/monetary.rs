//! Monetary policy: coin-year rate, stake rewards, treasury carve-out and
//! the secure-message fee-rate bound.
//!
//! Every function here is a pure derivation from the parameter set and its
//! arguments. Intermediate products are computed in `i128` and saturate back
//! into [`Amount`], so overridden regtest rewards cannot overflow.

use crate::params::ChainParams;
use crate::treasury::TreasuryFundSettings;
use cinder_types::{Amount, ChainType, Timestamp, SECONDS_PER_YEAR};
use serde::Serialize;

/// The view of a block that reward computation needs.
pub trait BlockIndex {
    fn height(&self) -> u32;
    /// Block time in Unix seconds.
    fn time(&self) -> i64;
}

/// Minimal [`BlockIndex`] for callers that only track height and time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockMeta {
    pub height: u32,
    pub time: i64,
}

impl BlockIndex for BlockMeta {
    fn height(&self) -> u32 {
        self.height
    }

    fn time(&self) -> i64 {
        self.time
    }
}

/// Amounts making up the stake reward of one block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StakeReward {
    /// Height of the block being staked.
    pub height: u32,
    /// Newly minted reward before the treasury share.
    pub gross: Amount,
    /// Transaction fees collected by the block.
    pub fees: Amount,
    /// Part of `gross` owed to the treasury fund.
    pub treasury: Amount,
}

impl StakeReward {
    /// What the staker keeps.
    pub fn net(&self) -> Amount {
        self.gross
            .saturating_add(self.fees)
            .saturating_sub(self.treasury)
    }
}

const PPM: i128 = 1_000_000;

fn scale(value: Amount, num: i128, den: i128) -> Amount {
    let scaled = i128::from(value) * num / den;
    Amount::try_from(scaled).unwrap_or(if scaled < 0 { Amount::MIN } else { Amount::MAX })
}

impl ChainParams {
    /// Annual stake reward rate in effect at `time`.
    ///
    /// On regtest this is the configured value as-is. Elsewhere the base rate
    /// is scaled by the percentage of the whole reward year `time` falls in,
    /// counting from the genesis block.
    pub fn coin_year_reward(&self, time: i64) -> Amount {
        if self.chain == ChainType::Regtest {
            return self.coin_year_reward;
        }
        let genesis = Timestamp::new(self.genesis.time());
        let year = Timestamp::new(time).whole_years_since(genesis);
        scale(
            self.coin_year_reward,
            i128::from(self.year_percent(year)),
            100,
        )
    }

    /// Full-rate block reward before any yearly reduction.
    pub fn base_block_reward(&self) -> Amount {
        self.block_reward
    }

    pub fn pos_reward_at_year(&self, year: u32) -> Amount {
        scale(self.block_reward, i128::from(self.year_percent(year)), 100)
    }

    /// Gross reward for a block at `height`, with years measured in target spacings.
    pub fn pos_reward_at_height(&self, height: u32) -> Amount {
        let spacing = i64::from(self.target_spacing.max(1));
        let blocks_per_year = (SECONDS_PER_YEAR / spacing).max(1);
        let year = i64::from(height) / blocks_per_year;
        self.pos_reward_at_year(u32::try_from(year).unwrap_or(u32::MAX))
    }

    /// Treasury settings in force at `time`.
    pub fn treasury_settings_at(&self, time: i64) -> Option<&TreasuryFundSettings> {
        self.treasury.settings_at(time)
    }

    /// Reward breakdown for the block following `prev`.
    ///
    /// The treasury share is taken from the minted reward only, and only on
    /// blocks whose height is a multiple of the active output period.
    pub fn pos_reward_split(&self, prev: &impl BlockIndex, fees: Amount) -> StakeReward {
        let height = prev.height().saturating_add(1);
        let gross = self.pos_reward_at_height(height);
        let treasury = match self.treasury_settings_at(prev.time()) {
            Some(settings) if settings.is_output_height(height) => {
                let carve = scale(gross, i128::from(settings.min_stake_percent()), 100);
                tracing::debug!(
                    chain = %self.chain,
                    height,
                    gross,
                    treasury = carve,
                    address = settings.address(),
                    "treasury carve-out"
                );
                carve
            }
            _ => 0,
        };
        StakeReward {
            height,
            gross,
            fees,
            treasury,
        }
    }

    /// Amount the staker of the block following `prev` may claim.
    pub fn pos_reward(&self, prev: &impl BlockIndex, fees: Amount) -> Amount {
        self.pos_reward_split(prev, fees).net()
    }

    /// Largest change allowed to the smsg fee rate at the adjustment made at `time`.
    pub fn max_smsg_fee_rate_delta(&self, prev_fee_rate: Amount, time: i64) -> Amount {
        let delta = scale(
            prev_fee_rate,
            i128::from(self.consensus.smsg_fee_max_delta_ppm),
            PPM,
        );
        if time >= self.consensus.smsg_fee_rate_fix_time {
            delta.max(1)
        } else {
            delta
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::networks;
    use cinder_types::{CENT, COIN};

    fn at(height: u32, time: i64) -> BlockMeta {
        BlockMeta { height, time }
    }

    #[test]
    fn coin_year_reward_steps_per_year() {
        let params = networks::main_params().unwrap();
        let genesis = params.genesis_block().time();
        assert_eq!(params.coin_year_reward(genesis), 2 * CENT);
        assert_eq!(params.coin_year_reward(genesis - 1), 2 * CENT);
        assert_eq!(
            params.coin_year_reward(genesis + 2 * SECONDS_PER_YEAR - 1),
            2 * CENT
        );
        // Year 2 pays 95%.
        assert_eq!(
            params.coin_year_reward(genesis + 2 * SECONDS_PER_YEAR),
            2 * CENT * 95 / 100
        );
        // Past the table the last entry holds.
        assert_eq!(
            params.coin_year_reward(genesis + 500 * SECONDS_PER_YEAR),
            2 * CENT * 10 / 100
        );
    }

    #[test]
    fn regtest_coin_year_reward_is_flat() {
        let params = networks::regtest_params().unwrap();
        let genesis = params.genesis_block().time();
        assert_eq!(
            params.coin_year_reward(genesis),
            params.coin_year_reward(genesis + 40 * SECONDS_PER_YEAR)
        );
    }

    #[test]
    fn reward_by_year_and_height() {
        let params = networks::main_params().unwrap();
        assert_eq!(params.base_block_reward(), 6 * COIN);
        assert_eq!(params.pos_reward_at_year(0), 6 * COIN);
        assert_eq!(params.pos_reward_at_year(3), 6 * COIN * 90 / 100);
        assert_eq!(params.pos_reward_at_year(1_000), 6 * COIN * 10 / 100);

        let blocks_per_year = (SECONDS_PER_YEAR / i64::from(params.target_spacing())) as u32;
        assert_eq!(params.pos_reward_at_height(blocks_per_year - 1), 6 * COIN);
        assert_eq!(
            params.pos_reward_at_height(2 * blocks_per_year),
            params.pos_reward_at_year(2)
        );
    }

    #[test]
    fn carve_out_only_on_output_height() {
        let params = networks::test_params().unwrap();
        let settings = params.treasury_schedule().entries()[0].1.clone();
        let period = settings.output_period();
        let time = params.treasury_schedule().entries()[0].0;

        let boundary = params.pos_reward_split(&at(period - 1, time), 1_000);
        assert_eq!(boundary.height, period);
        assert_eq!(
            boundary.treasury,
            boundary.gross * i64::from(settings.min_stake_percent()) / 100
        );
        assert!(boundary.treasury > 0);

        let plain = params.pos_reward_split(&at(period, time), 1_000);
        assert_eq!(plain.treasury, 0);
        assert_eq!(plain.net(), plain.gross + 1_000);
        assert!(boundary.net() < plain.net());
    }

    #[test]
    fn no_carve_out_before_schedule() {
        let params = networks::main_params().unwrap();
        let (first, settings) = &params.treasury_schedule().entries()[0];
        let period = settings.output_period();
        let reward = params.pos_reward_split(&at(period - 1, first - 1), 0);
        assert_eq!(reward.treasury, 0);
    }

    #[test]
    fn fees_are_never_carved() {
        let params = networks::test_params().unwrap();
        let (time, settings) = &params.treasury_schedule().entries()[0];
        let prev = at(settings.output_period() - 1, *time);
        let without = params.pos_reward(&prev, 0);
        let with = params.pos_reward(&prev, 5 * COIN);
        assert_eq!(with - without, 5 * COIN);
    }

    #[test]
    fn smsg_delta_floor_after_fix() {
        let params = networks::main_params().unwrap();
        let fix = params.consensus().smsg_fee_rate_fix_time;
        let ppm = params.consensus().smsg_fee_max_delta_ppm;

        assert_eq!(
            params.max_smsg_fee_rate_delta(1_000_000, fix - 1),
            ppm
        );
        assert_eq!(params.max_smsg_fee_rate_delta(1, fix - 1), 0);
        assert_eq!(params.max_smsg_fee_rate_delta(1, fix), 1);
        assert_eq!(params.max_smsg_fee_rate_delta(1_000_000, fix), ppm);
    }

    #[test]
    fn scale_saturates() {
        assert_eq!(scale(Amount::MAX, 100, 1), Amount::MAX);
        assert_eq!(scale(Amount::MIN, 100, 1), Amount::MIN);
        assert_eq!(scale(600, 95, 100), 570);
    }
}
