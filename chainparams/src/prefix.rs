//! Address prefix tables.
//!
//! Each network carries two tables, one per encoding family, mapping every
//! [`AddressType`] to the raw bytes that lead an encoded address of that
//! type. An empty entry means the type has no encoding in that family.
//!
//! Decoding scans tags in declaration order and returns the first match.
//! Tables are checked for duplicate non-empty entries when they are built,
//! so a byte-exact match is never ambiguous.

use crate::error::ParamsError;
use serde::{Deserialize, Serialize};

/// Semantic type of an encoded address or key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AddressType {
    PubkeyAddress,
    ScriptAddress,
    SecretKey,
    ExtPublicKey,
    ExtSecretKey,
    StealthAddress,
    ExtKeyHash,
    ExtAccHash,
    /// BIP-32 public key with Bitcoin version bytes.
    ExtPublicKeyBtc,
    /// BIP-32 secret key with Bitcoin version bytes.
    ExtSecretKeyBtc,
    PubkeyAddress256,
    ScriptAddress256,
    /// Pubkey hash that may stake but not spend.
    StakeOnlyPkAddr,
}

impl AddressType {
    pub const COUNT: usize = 13;

    /// All tags in scan order.
    pub const ALL: [AddressType; Self::COUNT] = [
        Self::PubkeyAddress,
        Self::ScriptAddress,
        Self::SecretKey,
        Self::ExtPublicKey,
        Self::ExtSecretKey,
        Self::StealthAddress,
        Self::ExtKeyHash,
        Self::ExtAccHash,
        Self::ExtPublicKeyBtc,
        Self::ExtSecretKeyBtc,
        Self::PubkeyAddress256,
        Self::ScriptAddress256,
        Self::StakeOnlyPkAddr,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Encoding family a prefix table belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrefixFamily {
    /// Base58Check version bytes.
    Legacy,
    /// Leading characters of a bech32-style string, stored as ASCII bytes.
    Bech32,
}

/// An immutable, unambiguous prefix table for one encoding family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefixTable {
    family: PrefixFamily,
    entries: [Vec<u8>; AddressType::COUNT],
}

impl PrefixTable {
    pub fn builder(family: PrefixFamily) -> PrefixTableBuilder {
        PrefixTableBuilder {
            family,
            entries: std::array::from_fn(|_| Vec::new()),
        }
    }

    pub fn family(&self) -> PrefixFamily {
        self.family
    }

    /// Raw prefix for `ty`; empty when the type has no encoding here.
    pub fn prefix_for(&self, ty: AddressType) -> &[u8] {
        &self.entries[ty.index()]
    }

    /// Tag whose prefix equals `candidate` exactly.
    pub fn match_prefix(&self, candidate: &[u8]) -> Option<AddressType> {
        self.configured()
            .find(|(_, prefix)| *prefix == candidate)
            .map(|(ty, _)| ty)
    }

    /// Tag whose prefix leads `buf`, where `buf` is strictly longer than the prefix.
    ///
    /// This is the form used on a whole encoded string: the prefix must be
    /// followed by at least one payload byte.
    pub fn match_leading(&self, buf: &[u8]) -> Option<AddressType> {
        self.configured()
            .find(|(_, prefix)| buf.len() > prefix.len() && buf.starts_with(prefix))
            .map(|(ty, _)| ty)
    }

    /// Non-empty entries in scan order.
    pub fn configured(&self) -> impl Iterator<Item = (AddressType, &[u8])> + '_ {
        AddressType::ALL
            .into_iter()
            .map(move |ty| (ty, self.prefix_for(ty)))
            .filter(|(_, prefix)| !prefix.is_empty())
    }
}

/// Collects entries and validates them into a [`PrefixTable`].
#[derive(Clone, Debug)]
pub struct PrefixTableBuilder {
    family: PrefixFamily,
    entries: [Vec<u8>; AddressType::COUNT],
}

impl PrefixTableBuilder {
    pub fn set(mut self, ty: AddressType, prefix: impl Into<Vec<u8>>) -> Self {
        self.entries[ty.index()] = prefix.into();
        self
    }

    /// Fails if two tags share an identical non-empty prefix.
    pub fn build(self) -> Result<PrefixTable, ParamsError> {
        for (i, first) in AddressType::ALL.iter().enumerate() {
            let a = &self.entries[first.index()];
            if a.is_empty() {
                continue;
            }
            if let Some(second) = AddressType::ALL[i + 1..]
                .iter()
                .find(|other| self.entries[other.index()] == *a)
            {
                return Err(ParamsError::AmbiguousPrefix {
                    family: self.family,
                    first: *first,
                    second: *second,
                });
            }
        }
        Ok(PrefixTable {
            family: self.family,
            entries: self.entries,
        })
    }
}
