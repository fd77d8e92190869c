//! Per-year reward percentage table.
//!
//! Year `n` is the `n`-th whole reward year since genesis. The table lists
//! the percentage of the base block reward paid in each year; years past the
//! end of the table pay the last entry forever.

use crate::error::ParamsError;
use serde::{Deserialize, Serialize};

/// Reward percentages for the 47 scheduled years shipped on every network.
pub const DEFAULT_YEAR_PERCENTS: [u32; 47] = [
    100, 100, 95, 90, 86, 81, 77, 74, 70, 66, 63, 60, 57, 54, 51, 49, 46, 44, 42, 40, 38, 36, 34,
    32, 31, 29, 28, 26, 25, 24, 23, 21, 20, 19, 18, 17, 17, 16, 15, 14, 14, 13, 12, 12, 11, 10,
    10,
];

/// Non-empty, year-indexed reward percentages with clamped lookup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct YearPercentTable {
    percents: Vec<u32>,
}

impl YearPercentTable {
    pub fn new(percents: Vec<u32>) -> Result<Self, ParamsError> {
        if percents.is_empty() {
            return Err(ParamsError::EmptyYearTable);
        }
        Ok(Self { percents })
    }

    /// Percentage for `year`, clamped to the last defined year.
    pub fn year_percent(&self, year: u32) -> u32 {
        let last = self.percents.len() - 1;
        let idx = usize::try_from(year).map_or(last, |y| y.min(last));
        self.percents[idx]
    }

    pub fn len(&self) -> usize {
        self.percents.len()
    }

    /// Always false: construction rejects an empty table.
    pub fn is_empty(&self) -> bool {
        self.percents.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.percents
    }
}

impl TryFrom<Vec<u32>> for YearPercentTable {
    type Error = ParamsError;

    fn try_from(percents: Vec<u32>) -> Result<Self, Self::Error> {
        Self::new(percents)
    }
}

impl From<YearPercentTable> for Vec<u32> {
    fn from(table: YearPercentTable) -> Self {
        table.percents
    }
}

impl Default for YearPercentTable {
    fn default() -> Self {
        Self {
            percents: DEFAULT_YEAR_PERCENTS.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_rejected() {
        assert_eq!(YearPercentTable::new(vec![]), Err(ParamsError::EmptyYearTable));
    }

    #[test]
    fn lookup_within_table() {
        let table = YearPercentTable::default();
        assert_eq!(table.len(), 47);
        assert_eq!(table.year_percent(0), 100);
        assert_eq!(table.year_percent(2), 95);
        assert_eq!(table.year_percent(46), 10);
    }

    #[test]
    fn lookup_clamps_past_end() {
        let table = YearPercentTable::new(vec![50, 40, 30]).unwrap();
        assert_eq!(table.year_percent(2), 30);
        assert_eq!(table.year_percent(3), 30);
        assert_eq!(table.year_percent(u32::MAX), 30);
    }

    #[test]
    fn single_entry_table_is_flat() {
        let table = YearPercentTable::new(vec![7]).unwrap();
        assert!(!table.is_empty());
        for year in [0, 1, 100] {
            assert_eq!(table.year_percent(year), 7);
        }
    }

    #[test]
    fn default_schedule_never_increases() {
        let table = YearPercentTable::default();
        assert!(table.as_slice().windows(2).all(|w| w[0] >= w[1]));
    }
}
