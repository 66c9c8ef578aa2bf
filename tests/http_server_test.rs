//! Tests for the HTTP host.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tictactoe_rpc::{AppState, ErrorBody, GameStore, RpcRegistry, init_module, router};
use tower::ServiceExt;

fn app() -> (axum::Router, GameStore) {
    let store = GameStore::new();
    let mut registry = RpcRegistry::new();
    init_module(&mut registry).expect("register rpcs");
    (router(AppState::new(store.clone(), registry)), store)
}

async fn call(app: &axum::Router, rpc: &str, payload: &str) -> (StatusCode, Value) {
    let request = Request::post(format!("/v2/rpc/{rpc}"))
        .body(Body::from(payload.to_string()))
        .expect("request");
    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();
    let value = serde_json::from_slice(&bytes).expect("JSON body");
    (status, value)
}

fn move_payload(id: &str, cell: impl Into<Value>) -> String {
    json!({ "game_id": id, "cell": cell.into() }).to_string()
}

#[tokio::test]
async fn test_create_and_move_over_http() {
    let (app, store) = app();

    let (status, created) = call(&app, "create_game", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["board"], "---------");
    let id = created["game_id"].as_str().expect("game_id").to_string();
    assert_eq!(store.len(), 1);

    let (status, moved) = call(&app, "make_move", &move_payload(&id, 4)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(moved["board"], "----A----");
    assert_eq!(moved["turn"], "B");

    let payload = json!({ "game_id": id }).to_string();
    let (status, fetched) = call(&app, "get_game", &payload).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["game"], moved["game"]);
}

#[tokio::test]
async fn test_error_statuses_and_codes() {
    let (app, _store) = app();
    let (_, created) = call(&app, "create_game", "").await;
    let id = created["game_id"].as_str().expect("game_id").to_string();
    call(&app, "make_move", &move_payload(&id, 0)).await;

    let duplicate_id = format!(r#"{{"game_id":"{id}","game_id":"other","cell":1}}"#);
    let cases = [
        ("make_move", move_payload(&id, 0), StatusCode::CONFLICT, "CELL_OCCUPIED", 9),
        ("make_move", move_payload(&id, 9), StatusCode::BAD_REQUEST, "INVALID_INDEX", 3),
        ("make_move", move_payload(&id, "+4"), StatusCode::BAD_REQUEST, "INVALID_INDEX", 3),
        ("make_move", duplicate_id, StatusCode::BAD_REQUEST, "INVALID_PAYLOAD", 3),
        (
            "make_move",
            json!({ "cell": 1 }).to_string(),
            StatusCode::BAD_REQUEST,
            "MISSING_FIELD",
            3,
        ),
        ("get_game", "{oops".to_string(), StatusCode::BAD_REQUEST, "INVALID_PAYLOAD", 3),
        (
            "get_game",
            json!({ "game_id": "nope" }).to_string(),
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            5,
        ),
        ("delete_game", String::new(), StatusCode::NOT_FOUND, "RPC_NOT_FOUND", 5),
    ];

    for (rpc, payload, expected_status, expected_code, grpc) in cases {
        let (status, body) = call(&app, rpc, &payload).await;
        assert_eq!(status, expected_status, "{rpc} {payload}");
        let body: ErrorBody = serde_json::from_value(body).expect("error body");
        assert!(!body.ok);
        assert_eq!(body.error.code, expected_code, "{rpc} {payload}");
        assert_eq!(body.error.grpc_code, grpc);
    }
}

#[tokio::test]
async fn test_finished_game_conflict() {
    let (app, _store) = app();
    let (_, created) = call(&app, "create_game", "").await;
    let id = created["game_id"].as_str().expect("game_id").to_string();
    for cell in [0, 3, 1, 4, 2] {
        let (status, _) = call(&app, "make_move", &move_payload(&id, cell)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = call(&app, "make_move", &move_payload(&id, 8)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "GAME_FINISHED");
}

#[tokio::test]
async fn test_healthcheck() {
    let (app, _store) = app();
    let request = Request::get("/healthcheck").body(Body::empty()).expect("request");
    let response = app.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
}
