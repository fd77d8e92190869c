//! Selecting and sharing the active parameter set.
//!
//! Components receive a [`ParamsHandle`] at construction instead of reading a
//! process global. Cloning the handle shares the same slot, so a node wires
//! one handle through its subsystems while tests build as many independent
//! handles as they like.

use crate::config::ChainArgs;
use crate::error::ParamsError;
use crate::networks;
use crate::params::ChainParams;
use crate::regtest::RegtestParams;
use cinder_types::ChainType;
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Build the parameter set for the chain called `name`.
///
/// The anonymous-output policy from `args` applies to every network; the
/// reward overrides apply to regtest only.
pub fn create_chain_params(args: &ChainArgs, name: &str) -> Result<ChainParams, ParamsError> {
    let chain =
        ChainType::from_name(name).ok_or_else(|| ParamsError::UnsupportedChain(name.to_string()))?;
    let params = match chain {
        ChainType::Regtest => RegtestParams::new(args)?.into_params(),
        other => {
            let params = networks::params_for(other)?;
            params.replace_anon_policy(args.anon_policy()?);
            params
        }
    };
    tracing::info!(
        chain = %chain,
        genesis = %params.genesis_block().hash(),
        port = params.default_port(),
        "chain parameters created"
    );
    Ok(params)
}

/// Shared slot holding the active parameter set.
#[derive(Clone)]
pub struct ParamsHandle {
    slot: Arc<RwLock<Slot>>,
}

struct Slot {
    active: Arc<ChainParams>,
    /// Outstanding scoped swaps, oldest first.
    swaps: Vec<SwapFrame>,
    next_swap_id: u64,
}

struct SwapFrame {
    id: u64,
    /// Set to reinstate once this frame is the last one standing.
    previous: Arc<ChainParams>,
}

impl ParamsHandle {
    pub fn new(params: impl Into<Arc<ChainParams>>) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Slot {
                active: params.into(),
                swaps: Vec::new(),
                next_swap_id: 0,
            })),
        }
    }

    /// A handle holding the parameters for `name`.
    pub fn select(args: &ChainArgs, name: &str) -> Result<Self, ParamsError> {
        Ok(Self::new(create_chain_params(args, name)?))
    }

    /// Switch this handle (and its clones) to the parameters for `name`.
    ///
    /// On error the active set is left unchanged.
    pub fn reselect(&self, args: &ChainArgs, name: &str) -> Result<(), ParamsError> {
        let params = create_chain_params(args, name)?;
        self.replace(params);
        Ok(())
    }

    /// Snapshot of the active set. Later swaps do not affect the returned `Arc`.
    pub fn active(&self) -> Arc<ChainParams> {
        let slot = self.slot.read();
        Arc::clone(&slot.active)
    }

    /// Install `params`, returning the set it replaced.
    pub fn replace(&self, params: impl Into<Arc<ChainParams>>) -> Arc<ChainParams> {
        let params = params.into();
        tracing::debug!(chain = %params.chain_type(), "active chain parameters replaced");
        std::mem::replace(&mut self.slot.write().active, params)
    }

    /// Install `params` until the returned guard is dropped.
    ///
    /// Guards may be dropped in any order. The set active before the oldest
    /// outstanding guard comes back once every guard is gone.
    pub fn swap_scoped(&self, params: impl Into<Arc<ChainParams>>) -> ParamsSwapGuard {
        let params = params.into();
        let mut slot = self.slot.write();
        let id = slot.next_swap_id;
        slot.next_swap_id += 1;
        tracing::debug!(chain = %params.chain_type(), swap = id, "scoped chain parameter swap");
        let previous = std::mem::replace(&mut slot.active, params);
        slot.swaps.push(SwapFrame { id, previous });
        ParamsSwapGuard {
            handle: self.clone(),
            id,
        }
    }

    fn end_swap(&self, id: u64) {
        let mut slot = self.slot.write();
        let Some(pos) = slot.swaps.iter().position(|frame| frame.id == id) else {
            return;
        };
        let frame = slot.swaps.remove(pos);
        if pos < slot.swaps.len() {
            // A newer swap is still live; it now owns the restore target.
            slot.swaps[pos].previous = frame.previous;
        } else {
            tracing::debug!(
                chain = %frame.previous.chain_type(),
                swap = id,
                "scoped chain parameter swap restored"
            );
            slot.active = frame.previous;
        }
    }
}

impl fmt::Debug for ParamsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.read();
        f.debug_struct("ParamsHandle")
            .field("chain", &slot.active.chain_type())
            .field("scoped_swaps", &slot.swaps.len())
            .finish()
    }
}

/// Restores the previously active parameter set when dropped.
#[must_use = "the previous parameters are restored as soon as the guard is dropped"]
pub struct ParamsSwapGuard {
    handle: ParamsHandle,
    id: u64,
}

impl Drop for ParamsSwapGuard {
    fn drop(&mut self) {
        self.handle.end_swap(self.id);
    }
}
