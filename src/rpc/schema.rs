//! Typed request and response payloads for the game RPCs.
//!
//! Requests arrive as opaque text from the host. Each request type decodes
//! and validates its payload up front, so handlers only ever see
//! well-formed arguments.

use super::error::RpcError;
use crate::games::tictactoe::{BOARD_SIZE, Game, GameId, GameStatus, Mark};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, instrument};

/// Decodes a payload into `T`.
///
/// An empty payload is treated as an empty object. A payload that is a JSON
/// string holding JSON (double-encoded by some clients) is unwrapped once.
/// Anything that is not an object is rejected, as are repeated keys.
#[instrument(skip(payload), fields(len = payload.len()))]
fn decode_payload<T: DeserializeOwned>(payload: &str) -> Result<T, RpcError> {
    let trimmed = payload.trim();
    if trimmed.is_empty() {
        return decode_object("{}");
    }

    if trimmed.starts_with('"') {
        debug!("Unwrapping string-encoded payload");
        let inner: String = serde_json::from_str(trimmed)
            .map_err(|e| RpcError::invalid_payload(format!("invalid payload JSON: {e}")))?;
        return decode_object(inner.trim());
    }

    decode_object(trimmed)
}

// Deserializes straight from the text so serde reports duplicate fields.
fn decode_object<T: DeserializeOwned>(text: &str) -> Result<T, RpcError> {
    if !text.starts_with('{') {
        return Err(RpcError::invalid_payload("payload must be a JSON object"));
    }
    serde_json::from_str(text)
        .map_err(|e| RpcError::invalid_payload(format!("invalid payload JSON: {e}")))
}

fn require_game_id(game_id: Option<String>) -> Result<GameId, RpcError> {
    game_id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| RpcError::missing_field("game_id"))
}

/// Accepts a JSON integer or a string of decimal digits in 0-8.
fn parse_cell(value: &Value) -> Result<usize, RpcError> {
    let index = match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
            s.parse::<i64>().ok()
        }
        _ => None,
    }
    .ok_or_else(|| RpcError::invalid_index(format!("cell must be an integer, got {value}")))?;

    usize::try_from(index)
        .ok()
        .filter(|&i| i < BOARD_SIZE)
        .ok_or_else(|| {
            RpcError::invalid_index(format!("cell index {index} is out of range (must be 0-8)"))
        })
}

/// Arguments of `create_game`. Takes no fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateGameRequest {}

impl CreateGameRequest {
    /// Decodes and validates a payload.
    pub fn decode(payload: &str) -> Result<Self, RpcError> {
        decode_payload(payload)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMakeMove {
    game_id: Option<String>,
    cell: Option<Value>,
}

/// Arguments of `make_move`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MakeMoveRequest {
    /// Target game.
    pub game_id: GameId,
    /// Cell index, already checked to be in 0-8.
    pub cell: usize,
}

impl MakeMoveRequest {
    /// Decodes and validates a payload.
    pub fn decode(payload: &str) -> Result<Self, RpcError> {
        let raw: RawMakeMove = decode_payload(payload)?;
        let game_id = require_game_id(raw.game_id)?;
        let cell = raw.cell.ok_or_else(|| RpcError::missing_field("cell"))?;
        let cell = parse_cell(&cell)?;
        Ok(Self { game_id, cell })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawGetGame {
    game_id: Option<String>,
}

/// Arguments of `get_game`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetGameRequest {
    /// Target game.
    pub game_id: GameId,
}

impl GetGameRequest {
    /// Decodes and validates a payload.
    pub fn decode(payload: &str) -> Result<Self, RpcError> {
        let raw: RawGetGame = decode_payload(payload)?;
        Ok(Self {
            game_id: require_game_id(raw.game_id)?,
        })
    }
}

/// Wire encoding of a game status: `""`, `"A"`, `"B"` or `"draw"`.
pub fn winner_code(status: &GameStatus) -> &'static str {
    match status {
        GameStatus::InProgress => "",
        GameStatus::Won(Mark::A) => "A",
        GameStatus::Won(Mark::B) => "B",
        GameStatus::Draw => "draw",
    }
}

/// Full game record as sent to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Game identifier.
    pub game_id: GameId,
    /// Compact board, `-` for empty.
    pub board: String,
    /// Mark to move next.
    pub turn: Mark,
    /// `""`, `"A"`, `"B"` or `"draw"`.
    pub winner: String,
}

impl From<&Game> for GameRecord {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.id().clone(),
            board: game.board().to_string(),
            turn: *game.turn(),
            winner: winner_code(game.status()).to_string(),
        }
    }
}

/// Response of `create_game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateGameResponse {
    /// Always `true`.
    pub ok: bool,
    /// Identifier of the new game.
    pub game_id: GameId,
    /// Compact board.
    pub board: String,
    /// Mark to move next.
    pub turn: Mark,
}

impl From<&Game> for CreateGameResponse {
    fn from(game: &Game) -> Self {
        Self {
            ok: true,
            game_id: game.id().clone(),
            board: game.board().to_string(),
            turn: *game.turn(),
        }
    }
}

/// Response of `make_move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MakeMoveResponse {
    /// Always `true`.
    pub ok: bool,
    /// Compact board after the move.
    pub board: String,
    /// Mark to move next.
    pub turn: Mark,
    /// `""`, `"A"`, `"B"` or `"draw"`.
    pub winner: String,
    /// The full record after the move.
    pub game: GameRecord,
}

impl From<&Game> for MakeMoveResponse {
    fn from(game: &Game) -> Self {
        let record = GameRecord::from(game);
        Self {
            ok: true,
            board: record.board.clone(),
            turn: record.turn,
            winner: record.winner.clone(),
            game: record,
        }
    }
}

/// Response of `get_game`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetGameResponse {
    /// Always `true`.
    pub ok: bool,
    /// The full record.
    pub game: GameRecord,
}

impl From<&Game> for GetGameResponse {
    fn from(game: &Game) -> Self {
        Self {
            ok: true,
            game: GameRecord::from(game),
        }
    }
}
