//! HTTP host for the game RPCs.
//!
//! Serves `POST /v2/rpc/{id}` with the raw payload as the request body and
//! the handler's JSON as the response body.

use crate::rpc::{DispatchError, ErrorKind, RpcRegistry};
use crate::store::GameStore;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, info, instrument};

/// State shared by every request.
#[derive(Debug, Clone)]
pub struct AppState {
    store: GameStore,
    registry: Arc<RpcRegistry>,
}

impl AppState {
    /// Bundles the store and the registered RPCs.
    pub fn new(store: GameStore, registry: RpcRegistry) -> Self {
        Self {
            store,
            registry: Arc::new(registry),
        }
    }

    /// The shared game store.
    pub fn store(&self) -> &GameStore {
        &self.store
    }
}

/// Error detail in a failed RPC response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Machine-readable code, e.g. `CELL_OCCUPIED`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// gRPC status code.
    pub grpc_code: u32,
}

/// Body of a failed RPC response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Always `false`.
    pub ok: bool,
    /// What went wrong.
    pub error: ErrorDetail,
}

fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidPayload | ErrorKind::MissingField | ErrorKind::InvalidIndex => {
            StatusCode::BAD_REQUEST
        }
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::GameFinished | ErrorKind::CellOccupied => StatusCode::CONFLICT,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            DispatchError::UnknownRpc { .. } => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "RPC_NOT_FOUND".to_string(),
                    message: self.to_string(),
                    grpc_code: 5,
                },
            ),
            DispatchError::Rpc(err) => (
                status_for(err.kind),
                ErrorDetail {
                    code: err.kind.code().to_string(),
                    message: err.message.clone(),
                    grpc_code: err.kind.grpc_code(),
                },
            ),
        };
        let body = ErrorBody {
            ok: false,
            error: detail,
        };
        (status, Json(body)).into_response()
    }
}

#[instrument(skip(state, payload), fields(len = payload.len()))]
async fn call_rpc(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: String,
) -> Result<Response, DispatchError> {
    debug!("Dispatching rpc");
    let body = state.registry.dispatch(&state.store, &id, &payload)?;
    Ok(([(axum::http::header::CONTENT_TYPE, "application/json")], body).into_response())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

/// Builds the router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v2/rpc/{id}", post(call_rpc))
        .route("/healthcheck", get(healthcheck))
        .with_state(state)
}

/// Serves `state` on an already-bound listener until the process exits.
#[instrument(skip_all)]
pub async fn serve(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Serving game rpcs at http://{}/v2/rpc/", addr);
    }
    axum::serve(listener, router(state)).await
}
