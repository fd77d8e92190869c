//! Runtime policy for anonymous outputs.
//!
//! These values are node policy, not consensus: an operator may change them
//! while the node runs. They live behind a lock inside `ChainParams` so that
//! the rest of the parameter set stays immutable.

use crate::error::ParamsError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Anonymous spends are restricted unless configured otherwise.
pub const DEFAULT_ANON_RESTRICTED: bool = true;

/// Default cap on outputs per anonymous transaction.
pub const DEFAULT_ANON_MAX_OUTPUT_SIZE: u32 = 2;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnonOutputPolicy {
    pub restricted: bool,
    /// Where restricted anonymous funds must be sent.
    pub recovery_address: String,
    pub max_output_size: u32,
    /// Global indices of anonymous outputs that may not be spent.
    pub blacklisted: BTreeSet<u64>,
}

impl Default for AnonOutputPolicy {
    fn default() -> Self {
        Self {
            restricted: DEFAULT_ANON_RESTRICTED,
            recovery_address: String::new(),
            max_output_size: DEFAULT_ANON_MAX_OUTPUT_SIZE,
            blacklisted: BTreeSet::new(),
        }
    }
}

/// Parse a comma-separated list of output indices, e.g. `"12, 40,41"`.
///
/// Blank input yields an empty set; blank items between commas are skipped.
pub fn parse_anon_indices(s: &str) -> Result<BTreeSet<u64>, ParamsError> {
    s.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| {
            item.parse::<u64>()
                .map_err(|_| ParamsError::InvalidAnonIndex(item.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_with_spaces() {
        let set = parse_anon_indices(" 12, 40,41 ,12").unwrap();
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![12, 40, 41]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(parse_anon_indices("").unwrap().is_empty());
        assert!(parse_anon_indices(" , ,").unwrap().is_empty());
    }

    #[test]
    fn bad_token_reported() {
        assert_eq!(
            parse_anon_indices("1,two,3"),
            Err(ParamsError::InvalidAnonIndex("two".into()))
        );
        assert!(parse_anon_indices("-1").is_err());
    }

    #[test]
    fn default_policy() {
        let policy = AnonOutputPolicy::default();
        assert!(policy.restricted);
        assert_eq!(policy.max_output_size, 2);
        assert!(policy.blacklisted.is_empty());
    }
}
