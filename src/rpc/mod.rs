//! Host-facing RPC layer.

mod error;
mod handlers;
mod registry;
mod schema;

pub use error::{ErrorKind, RpcError};
pub use handlers::{create_game, get_game, make_move};
pub use registry::{
    CREATE_GAME, DispatchError, GET_GAME, MAKE_MOVE, RegistryError, RpcFn, RpcRegistry,
    init_module,
};
pub use schema::{
    CreateGameRequest, CreateGameResponse, GameRecord, GetGameRequest, GetGameResponse,
    MakeMoveRequest, MakeMoveResponse, winner_code,
};
