//! RPC error taxonomy.

use crate::games::tictactoe::MoveError;
use crate::store::StoreError;
use derive_more::{Display, Error};

/// Named failure categories reported to callers.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    strum::IntoStaticStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// Payload is not decodable JSON or has the wrong shape.
    InvalidPayload,
    /// A required field is absent.
    MissingField,
    /// Move index is non-numeric or outside 0-8.
    InvalidIndex,
    /// No game with the requested identifier.
    NotFound,
    /// Move attempted on a finished game.
    GameFinished,
    /// Move targets an occupied cell.
    CellOccupied,
    /// Response could not be encoded.
    Internal,
}

impl ErrorKind {
    /// Stable machine-readable code, e.g. `CELL_OCCUPIED`.
    pub fn code(self) -> &'static str {
        self.into()
    }

    /// gRPC status code the host reports for this kind.
    pub fn grpc_code(self) -> u32 {
        match self {
            ErrorKind::InvalidPayload | ErrorKind::MissingField | ErrorKind::InvalidIndex => 3,
            ErrorKind::NotFound => 5,
            ErrorKind::GameFinished | ErrorKind::CellOccupied => 9,
            ErrorKind::Internal => 13,
        }
    }
}

/// Failure of a single RPC call.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("{kind}: {message}")]
pub struct RpcError {
    /// Failure category.
    pub kind: ErrorKind,
    /// Human-readable detail.
    pub message: String,
}

impl RpcError {
    /// Creates an error of the given kind.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Payload could not be decoded.
    pub fn invalid_payload(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPayload, message)
    }

    /// A required field is absent.
    pub fn missing_field(field: &str) -> Self {
        Self::new(ErrorKind::MissingField, format!("missing {field}"))
    }

    /// Move index rejected at the boundary.
    pub fn invalid_index(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidIndex, message)
    }

    /// Failure category.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl From<MoveError> for RpcError {
    fn from(err: MoveError) -> Self {
        let kind = match err {
            MoveError::InvalidIndex { .. } => ErrorKind::InvalidIndex,
            MoveError::GameFinished => ErrorKind::GameFinished,
            MoveError::CellOccupied { .. } => ErrorKind::CellOccupied,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<StoreError> for RpcError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { .. } => Self::new(ErrorKind::NotFound, err.to_string()),
        }
    }
}

impl From<serde_json::Error> for RpcError {
    fn from(err: serde_json::Error) -> Self {
        Self::new(ErrorKind::Internal, format!("failed to encode response: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_are_screaming_snake_case() {
        assert_eq!(ErrorKind::InvalidPayload.code(), "INVALID_PAYLOAD");
        assert_eq!(ErrorKind::CellOccupied.code(), "CELL_OCCUPIED");
        assert_eq!(ErrorKind::NotFound.code(), "NOT_FOUND");
    }

    #[test]
    fn test_codes_are_distinct() {
        let mut codes: Vec<_> = ErrorKind::iter().map(ErrorKind::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), ErrorKind::iter().count());
    }

    #[test]
    fn test_move_errors_map_to_kinds() {
        assert_eq!(
            RpcError::from(MoveError::GameFinished).kind(),
            ErrorKind::GameFinished
        );
        assert_eq!(
            RpcError::from(MoveError::CellOccupied { index: 3 }).kind(),
            ErrorKind::CellOccupied
        );
        assert_eq!(
            RpcError::from(MoveError::InvalidIndex { index: 12 }).kind(),
            ErrorKind::InvalidIndex
        );
    }

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = RpcError::missing_field("game_id");
        assert_eq!(err.to_string(), "MissingField: missing game_id");
    }
}
