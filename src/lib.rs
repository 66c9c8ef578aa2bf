//! Tic-tac-toe RPC backend
//!
//! Server-authoritative tic-tac-toe exposed as three host RPCs:
//! `create_game`, `make_move` and `get_game`.
//!
//! # Architecture
//!
//! - **Games**: board types, win/draw rules and the pure move engine
//! - **Store**: process-wide game table behind a single reader/writer lock
//! - **RPC**: typed payload decoding, handlers, and the name registry
//! - **Server**: an HTTP host that dispatches `POST /v2/rpc/{id}`
//!
//! # Example
//!
//! ```
//! use tictactoe_rpc::{GameStore, RpcRegistry, init_module};
//!
//! let store = GameStore::new();
//! let mut registry = RpcRegistry::new();
//! init_module(&mut registry).unwrap();
//!
//! let created = registry.dispatch(&store, "create_game", "").unwrap();
//! assert!(created.contains("\"board\":\"---------\""));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod rpc;
mod server;
mod store;

// Crate-level exports - Configuration
pub use config::{ConfigError, ServerConfig};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    BOARD_SIZE, Board, BoardParseError, EMPTY_SYMBOL, Game, GameId, GameStatus, Mark, MoveError,
    OutOfBounds, Square, apply_move, check_winner,
};

// Crate-level exports - Rules
pub use games::tictactoe::rules;

// Crate-level exports - Storage
pub use store::{GameStore, StoreError};

// Crate-level exports - RPC layer
pub use rpc::{
    CREATE_GAME, CreateGameRequest, CreateGameResponse, DispatchError, ErrorKind, GET_GAME,
    GameRecord, GetGameRequest, GetGameResponse, MAKE_MOVE, MakeMoveRequest, MakeMoveResponse,
    RegistryError, RpcError, RpcFn, RpcRegistry, create_game, get_game, init_module, make_move,
    winner_code,
};

// Crate-level exports - HTTP host
pub use server::{AppState, ErrorBody, ErrorDetail, router, serve};
