//! Timestamps used by consensus rules.
//!
//! Block and schedule times are signed Unix seconds so that a query before
//! genesis is representable rather than wrapping.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a reward year. Leap days are ignored.
pub const SECONDS_PER_YEAR: i64 = 365 * 24 * 60 * 60;

/// A Unix timestamp in seconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const fn new(secs: i64) -> Self {
        Self(secs)
    }

    pub const fn as_secs(&self) -> i64 {
        self.0
    }

    /// Seconds from `earlier` to this timestamp, saturating at zero.
    pub fn elapsed_since(&self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0).max(0)
    }

    /// Whole reward years between `genesis` and this timestamp.
    ///
    /// A timestamp before genesis counts as year zero.
    pub fn whole_years_since(&self, genesis: Timestamp) -> u32 {
        let years = self.elapsed_since(genesis) / SECONDS_PER_YEAR;
        u32::try_from(years).unwrap_or(u32::MAX)
    }
}

impl From<i64> for Timestamp {
    fn from(secs: i64) -> Self {
        Self(secs)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
