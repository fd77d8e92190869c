//! Treasury fund schedule.
//!
//! The schedule is a step function over block time: each entry takes effect
//! at its activation time and stays in force until the next entry. Entries
//! are kept strictly ordered by activation time; out-of-order appends are
//! rejected without touching the schedule.

use crate::error::ParamsError;
use serde::Serialize;

/// Where the treasury share goes and how it is paid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TreasuryFundSettings {
    address: String,
    min_stake_percent: u32,
    output_period: u32,
}

impl TreasuryFundSettings {
    /// `min_stake_percent` must be in `[0, 100]`; `output_period` at least 1.
    pub fn new(
        address: impl Into<String>,
        min_stake_percent: u32,
        output_period: u32,
    ) -> Result<Self, ParamsError> {
        if min_stake_percent > 100 {
            return Err(ParamsError::InvalidTreasuryPercent(min_stake_percent));
        }
        if output_period == 0 {
            return Err(ParamsError::InvalidTreasuryPeriod);
        }
        Ok(Self {
            address: address.into(),
            min_stake_percent,
            output_period,
        })
    }

    /// Destination address of the treasury output.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Minimum share of the stake reward owed to the treasury, in percent.
    pub fn min_stake_percent(&self) -> u32 {
        self.min_stake_percent
    }

    /// The treasury output is created once every this many blocks.
    pub fn output_period(&self) -> u32 {
        self.output_period
    }

    /// Whether a block at `height` carries the treasury output.
    pub fn is_output_height(&self, height: u32) -> bool {
        height % self.output_period == 0
    }
}

/// Time-ordered treasury settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TreasuryFundSchedule {
    entries: Vec<(i64, TreasuryFundSettings)>,
}

impl TreasuryFundSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `settings`, effective from `activation_time`.
    ///
    /// Fails unless `activation_time` is strictly later than the last entry.
    pub fn push(
        &mut self,
        activation_time: i64,
        settings: TreasuryFundSettings,
    ) -> Result<(), ParamsError> {
        if let Some((last, _)) = self.entries.last() {
            if activation_time <= *last {
                tracing::warn!(
                    last = *last,
                    attempted = activation_time,
                    "rejected out-of-order treasury settings"
                );
                return Err(ParamsError::TreasuryScheduleOutOfOrder {
                    last: *last,
                    attempted: activation_time,
                });
            }
        }
        self.entries.push((activation_time, settings));
        Ok(())
    }

    /// Settings in force at `time`: the latest entry activated at or before it.
    pub fn settings_at(&self, time: i64) -> Option<&TreasuryFundSettings> {
        let idx = self.entries.partition_point(|(from, _)| *from <= time);
        idx.checked_sub(1).map(|i| &self.entries[i].1)
    }

    /// Activation time of the entry that [`settings_at`](Self::settings_at) would return.
    pub fn activation_time_at(&self, time: i64) -> Option<i64> {
        let idx = self.entries.partition_point(|(from, _)| *from <= time);
        idx.checked_sub(1).map(|i| self.entries[i].0)
    }

    pub fn entries(&self) -> &[(i64, TreasuryFundSettings)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
