//! Handlers for the `create_game`, `make_move` and `get_game` RPCs.
//!
//! Each handler takes the shared [`GameStore`] and the raw payload text
//! handed over by the host, and returns the JSON response text.

use super::error::RpcError;
use super::schema::{
    CreateGameRequest, CreateGameResponse, GetGameRequest, GetGameResponse, MakeMoveRequest,
    MakeMoveResponse,
};
use crate::games::tictactoe::apply_move;
use crate::store::GameStore;
use tracing::{debug, info, instrument, warn};

/// Creates a new game.
#[instrument(skip(store, payload))]
pub fn create_game(store: &GameStore, payload: &str) -> Result<String, RpcError> {
    CreateGameRequest::decode(payload).inspect_err(|e| warn!(error = %e, "Rejected create_game"))?;

    let game = store.create();
    info!(game_id = %game.id(), "Game created");

    Ok(serde_json::to_string(&CreateGameResponse::from(&game))?)
}

/// Places the current turn's mark on a cell.
///
/// Validation and write-back happen under the store's write lock, so two
/// racing moves on one game can never both succeed.
#[instrument(skip(store, payload))]
pub fn make_move(store: &GameStore, payload: &str) -> Result<String, RpcError> {
    let req = MakeMoveRequest::decode(payload)
        .inspect_err(|e| warn!(error = %e, "Rejected make_move payload"))?;

    let game = store
        .update(&req.game_id, |game| {
            apply_move(game, req.cell).map_err(RpcError::from)
        })
        .inspect_err(|e| {
            warn!(game_id = %req.game_id, cell = req.cell, error = %e, "Move rejected");
        })?;

    if game.is_finished() {
        info!(
            game_id = %req.game_id,
            cell = req.cell,
            status = ?game.status(),
            "Game finished\n{}",
            game.board().render()
        );
    } else {
        info!(
            game_id = %req.game_id,
            cell = req.cell,
            board = %game.board(),
            next = %game.turn(),
            "Move accepted"
        );
    }

    Ok(serde_json::to_string(&MakeMoveResponse::from(&game))?)
}

/// Returns the full record of a game.
#[instrument(skip(store, payload))]
pub fn get_game(store: &GameStore, payload: &str) -> Result<String, RpcError> {
    let req = GetGameRequest::decode(payload)
        .inspect_err(|e| warn!(error = %e, "Rejected get_game payload"))?;

    let game = store.get(&req.game_id)?;
    debug!(game_id = %req.game_id, board = %game.board(), "Fetched game");

    Ok(serde_json::to_string(&GetGameResponse::from(&game))?)
}
