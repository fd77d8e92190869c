//! Mutable regtest parameters.
//!
//! Integration tests sometimes need to move consensus values, e.g. to make
//! rewards large or to reach a treasury boundary quickly. Those mutators live
//! on [`RegtestParams`] only. A `RegtestParams` can only hold the regtest
//! chain, so a production parameter set can never be changed this way.

use crate::config::ChainArgs;
use crate::consensus::ConsensusParams;
use crate::error::ParamsError;
use crate::networks;
use crate::params::ChainParams;
use crate::treasury::TreasuryFundSettings;
use cinder_types::{format_amount, money_range, Amount, ChainType};
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct RegtestParams {
    inner: ChainParams,
}

impl RegtestParams {
    /// Regtest parameters with `args` applied.
    pub fn new(args: &ChainArgs) -> Result<Self, ParamsError> {
        let mut params = Self {
            inner: networks::regtest_params()?,
        };
        if let Some(reward) = args.regtest_block_reward {
            params.set_block_reward(reward);
        }
        if let Some(rate) = args.regtest_coin_year_reward {
            params.set_coin_year_reward(rate);
        }
        params.inner.replace_anon_policy(args.anon_policy()?);
        Ok(params)
    }

    /// Reopen a finished regtest parameter set for mutation.
    ///
    /// # Panics
    ///
    /// Panics if `params` belongs to any chain other than regtest.
    pub fn thaw(params: ChainParams) -> Self {
        assert_eq!(
            params.chain_type(),
            ChainType::Regtest,
            "consensus parameters may only be mutated on regtest"
        );
        Self { inner: params }
    }

    /// Values outside the money range are applied anyway and logged.
    pub fn set_block_reward(&mut self, reward: Amount) -> &mut Self {
        if !money_range(reward) {
            tracing::warn!(reward = %format_amount(reward), "regtest block reward outside money range");
        }
        tracing::debug!(reward = %format_amount(reward), "regtest block reward overridden");
        self.inner.block_reward = reward;
        self
    }

    pub fn set_coin_year_reward(&mut self, rate: Amount) -> &mut Self {
        if !money_range(rate) {
            tracing::warn!(rate = %format_amount(rate), "regtest coin year reward outside money range");
        }
        tracing::debug!(rate = %format_amount(rate), "regtest coin year reward overridden");
        self.inner.coin_year_reward = rate;
        self
    }

    pub fn consensus_mut(&mut self) -> &mut ConsensusParams {
        &mut self.inner.consensus
    }

    /// Append a treasury schedule entry; same ordering rule as the schedule itself.
    pub fn push_treasury_settings(
        &mut self,
        activation_time: i64,
        settings: TreasuryFundSettings,
    ) -> Result<(), ParamsError> {
        self.inner.treasury.push(activation_time, settings)
    }

    pub fn params(&self) -> &ChainParams {
        &self.inner
    }

    pub fn into_params(self) -> ChainParams {
        self.inner
    }
}

impl Deref for RegtestParams {
    type Target = ChainParams;

    fn deref(&self) -> &ChainParams {
        &self.inner
    }
}
