//! Chain identity.

use crate::error::TypesError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies which chain a parameter set belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainType {
    /// The production chain.
    Main,
    /// The public test chain.
    Test,
    /// Local regression-test chain. The only chain whose consensus values may be mutated.
    Regtest,
}

impl ChainType {
    pub const ALL: [ChainType; 3] = [Self::Main, Self::Test, Self::Regtest];

    /// Network id string used on the command line and in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Main => "main",
            Self::Test => "test",
            Self::Regtest => "regtest",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl FromStr for ChainType {
    type Err = TypesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| TypesError::UnknownChain(s.to_string()))
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for chain in ChainType::ALL {
            assert_eq!(chain.as_str().parse::<ChainType>(), Ok(chain));
        }
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(
            "mainnet".parse::<ChainType>(),
            Err(TypesError::UnknownChain("mainnet".into()))
        );
        assert_eq!(ChainType::from_name("Main"), None);
    }
}
