//! Startup arguments that shape the selected parameter set.

use crate::anon::{parse_anon_indices, AnonOutputPolicy, DEFAULT_ANON_MAX_OUTPUT_SIZE};
use crate::error::ParamsError;
use cinder_types::Amount;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Arguments consumed by [`crate::create_chain_params`].
///
/// Can be loaded from a TOML file via [`ChainArgs::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainArgs {
    /// Network to select when no name is passed explicitly.
    #[serde(default = "default_chain")]
    pub chain: String,

    // ── Regtest overrides ────────────────────────────────────────────────
    /// Replaces the regtest block reward. Ignored on other networks.
    #[serde(default)]
    pub regtest_block_reward: Option<Amount>,

    /// Replaces the regtest coin-year reward rate. Ignored on other networks.
    #[serde(default)]
    pub regtest_coin_year_reward: Option<Amount>,

    // ── Anonymous outputs ────────────────────────────────────────────────
    #[serde(default = "default_true")]
    pub anon_restricted: bool,

    #[serde(default)]
    pub anon_recovery_address: String,

    #[serde(default = "default_anon_max_output_size")]
    pub anon_max_output_size: u32,

    /// Comma-separated output indices, e.g. `"12,40,41"`.
    #[serde(default)]
    pub blacklisted_anon_outputs: String,
}

fn default_chain() -> String {
    "main".to_string()
}

fn default_true() -> bool {
    true
}

fn default_anon_max_output_size() -> u32 {
    DEFAULT_ANON_MAX_OUTPUT_SIZE
}

impl ChainArgs {
    /// Load arguments from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ParamsError::Config(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse arguments from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ParamsError> {
        toml::from_str(s).map_err(|e| ParamsError::Config(e.to_string()))
    }

    pub fn to_toml_string(&self) -> Result<String, ParamsError> {
        toml::to_string_pretty(self).map_err(|e| ParamsError::Config(e.to_string()))
    }

    /// The anonymous-output policy these arguments describe.
    pub fn anon_policy(&self) -> Result<AnonOutputPolicy, ParamsError> {
        Ok(AnonOutputPolicy {
            restricted: self.anon_restricted,
            recovery_address: self.anon_recovery_address.clone(),
            max_output_size: self.anon_max_output_size,
            blacklisted: parse_anon_indices(&self.blacklisted_anon_outputs)?,
        })
    }
}

impl Default for ChainArgs {
    fn default() -> Self {
        Self {
            chain: default_chain(),
            regtest_block_reward: None,
            regtest_coin_year_reward: None,
            anon_restricted: default_true(),
            anon_recovery_address: String::new(),
            anon_max_output_size: default_anon_max_output_size(),
            blacklisted_anon_outputs: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_toml_gives_defaults() {
        let args = ChainArgs::from_toml_str("").unwrap();
        assert_eq!(args, ChainArgs::default());
        assert_eq!(args.chain, "main");
        assert!(args.anon_restricted);
        assert_eq!(args.anon_max_output_size, 2);
    }

    #[test]
    fn partial_toml_overrides() {
        let args = ChainArgs::from_toml_str(
            r#"
            chain = "regtest"
            regtest_block_reward = 100000000
            anon_restricted = false
            blacklisted_anon_outputs = "3, 9"
            "#,
        )
        .unwrap();
        assert_eq!(args.chain, "regtest");
        assert_eq!(args.regtest_block_reward, Some(100_000_000));
        assert_eq!(args.regtest_coin_year_reward, None);

        let policy = args.anon_policy().unwrap();
        assert!(!policy.restricted);
        assert_eq!(policy.blacklisted.into_iter().collect::<Vec<_>>(), vec![3, 9]);
    }

    #[test]
    fn malformed_toml_is_config_error() {
        let err = ChainArgs::from_toml_str("chain = [").unwrap_err();
        assert!(matches!(err, ParamsError::Config(_)));
    }

    #[test]
    fn bad_blacklist_surfaces_on_policy() {
        let args = ChainArgs {
            blacklisted_anon_outputs: "1,x".into(),
            ..ChainArgs::default()
        };
        assert_eq!(
            args.anon_policy(),
            Err(ParamsError::InvalidAnonIndex("x".into()))
        );
    }

    #[test]
    fn round_trips_through_file() {
        let args = ChainArgs {
            chain: "test".into(),
            anon_recovery_address: "tdRecovery".into(),
            ..ChainArgs::default()
        };
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(args.to_toml_string().unwrap().as_bytes())
            .unwrap();
        assert_eq!(ChainArgs::from_toml_file(file.path()).unwrap(), args);
    }

    #[test]
    fn missing_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ChainArgs::from_toml_file(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ParamsError::Config(_)));
    }
}
