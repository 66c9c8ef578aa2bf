//! RPC registration and dispatch.
//!
//! The host looks up handlers by name. [`init_module`] is the hook the host
//! calls once at startup to register the game RPCs.

use super::error::RpcError;
use super::handlers;
use crate::store::GameStore;
use derive_more::{Display, Error, From};
use std::collections::BTreeMap;
use tracing::{debug, error, info, instrument, warn};

/// Signature shared by every RPC handler.
pub type RpcFn = fn(&GameStore, &str) -> Result<String, RpcError>;

/// Name of the create-game RPC.
pub const CREATE_GAME: &str = "create_game";
/// Name of the make-move RPC.
pub const MAKE_MOVE: &str = "make_move";
/// Name of the get-game RPC.
pub const GET_GAME: &str = "get_game";

/// Registration failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum RegistryError {
    /// The name is already taken.
    #[display("rpc {id} is already registered")]
    Duplicate {
        /// The duplicate name.
        id: String,
    },
}

/// Dispatch failures.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum DispatchError {
    /// No handler is registered under the name.
    #[display("rpc {id} is not registered")]
    #[from(ignore)]
    UnknownRpc {
        /// The requested name.
        id: String,
    },
    /// The handler rejected the call.
    #[display("{_0}")]
    Rpc(RpcError),
}

/// Name to handler table.
#[derive(Debug, Clone, Default)]
pub struct RpcRegistry {
    rpcs: BTreeMap<String, RpcFn>,
}

impl RpcRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `rpc` under `id`. Names are unique.
    #[instrument(skip_all, fields(id = %id.as_ref()))]
    pub fn register(&mut self, id: impl AsRef<str>, rpc: RpcFn) -> Result<(), RegistryError> {
        let id = id.as_ref();
        if self.rpcs.contains_key(id) {
            error!(id, "Unable to register rpc: name already taken");
            return Err(RegistryError::Duplicate { id: id.to_string() });
        }
        self.rpcs.insert(id.to_string(), rpc);
        debug!(id, "Registered rpc");
        Ok(())
    }

    /// Registered names in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        self.rpcs.keys().map(String::as_str).collect()
    }

    /// Whether a handler is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.rpcs.contains_key(id)
    }

    /// Runs the handler registered under `id`.
    #[instrument(skip(self, store, payload))]
    pub fn dispatch(
        &self,
        store: &GameStore,
        id: &str,
        payload: &str,
    ) -> Result<String, DispatchError> {
        let rpc = self.rpcs.get(id).ok_or_else(|| {
            warn!(id, "Call to unregistered rpc");
            DispatchError::UnknownRpc { id: id.to_string() }
        })?;
        Ok(rpc(store, payload)?)
    }
}

/// Registers the tic-tac-toe RPCs.
#[instrument(skip(registry))]
pub fn init_module(registry: &mut RpcRegistry) -> Result<(), RegistryError> {
    info!("Loading tic-tac-toe module");

    registry.register(CREATE_GAME, handlers::create_game)?;
    registry.register(MAKE_MOVE, handlers::make_move)?;
    registry.register(GET_GAME, handlers::get_game)?;

    info!(rpcs = ?registry.ids(), "Tic-tac-toe rpcs registered");
    Ok(())
}
