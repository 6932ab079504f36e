//! Integration tests — build the router over an in-memory dataset and a
//! temporary front-end bundle, then drive it with `oneshot`.

use std::sync::Arc;

use avri_api::{App, AppState, config::ApiConfig};
use avri_core::Dataset;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

const INDEX_HTML: &str = "<!doctype html><html><body><app-root></app-root></body></html>";

fn dataset() -> Dataset {
    let chats = serde_json::from_value(json!([
        {"id": 1, "title": "Soporte", "idUser": 1},
        {"id": 2, "title": "Ventas", "idUser": 2}
    ]))
    .expect("chats");
    let messages = serde_json::from_value(json!([
        {"id": 1, "idChat": 1, "type": "user", "text": "hola"},
        {"id": 2, "idChat": 2, "type": "user", "text": "precio?"}
    ]))
    .expect("messages");
    let users = serde_json::from_value(json!([
        {"id": 1, "name": "Ana", "email": "ana@example.com"}
    ]))
    .expect("users");
    Dataset::new(chats, messages, users)
}

/// Router plus the bundle directory, which must outlive the requests.
fn app() -> (App, TempDir) {
    let frontend = tempfile::tempdir().expect("tempdir");
    std::fs::write(frontend.path().join("index.html"), INDEX_HTML).expect("write index");
    std::fs::write(frontend.path().join("main.js"), "console.log('avri');").expect("write js");

    let state = AppState {
        dataset: Arc::new(dataset()),
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            data_dir: "data".into(),
            frontend_dir: frontend.path().to_path_buf(),
        },
    };
    (avri_api::router(state), frontend)
}

async fn send(app: App, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let resp = app.oneshot(req).await.expect("request");
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    (status, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (app, _frontend) = app();
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    (status, serde_json::from_slice(&body).expect("parse JSON"))
}

async fn post_chat(body: &str) -> (StatusCode, Vec<u8>) {
    let (app, _frontend) = app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(app, req).await
}

#[tokio::test]
async fn chats_returns_whole_collection() {
    let (status, json) = get_json("/api/chats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"chats": [
            {"id": 1, "title": "Soporte", "idUser": 1},
            {"id": 2, "title": "Ventas", "idUser": 2}
        ]})
    );
}

#[tokio::test]
async fn messages_are_filtered_by_chat() {
    let (status, json) = get_json("/api/messages?idChat=1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"messages": [{"id": 1, "idChat": 1, "type": "user", "text": "hola"}]})
    );
}

#[tokio::test]
async fn messages_with_unparsable_chat_id_are_empty() {
    for uri in [
        "/api/messages?idChat=abc",
        "/api/messages?idChat=99",
        "/api/messages?idChat=",
        "/api/messages",
    ] {
        let (status, json) = get_json(uri).await;
        assert_eq!(status, StatusCode::OK, "{uri}");
        assert_eq!(json, json!({"messages": []}), "{uri}");
    }
}

#[tokio::test]
async fn messages_use_first_repeated_chat_id() {
    let (status, json) = get_json("/api/messages?idChat=1&idChat=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"messages": [{"id": 1, "idChat": 1, "type": "user", "text": "hola"}]})
    );
}

#[tokio::test]
async fn messages_ignore_unrelated_query_keys() {
    let (status, json) = get_json("/api/messages?foo=bar&idChat=2x&idChat=zzz").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["messages"][0]["id"], 2);
    assert_eq!(json["messages"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn trailing_slash_reaches_api_routes() {
    let (status, json) = get_json("/api/chats/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["chats"].as_array().map(Vec::len), Some(2));

    let (status, json) = get_json("/api/messages/?idChat=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["messages"][0]["text"], "precio?");
}

#[tokio::test]
async fn chats_keep_stored_key_order() {
    let (app, _frontend) = app();
    let req = Request::builder().uri("/api/chats").body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        String::from_utf8(body).unwrap(),
        r#"{"chats":[{"id":1,"title":"Soporte","idUser":1},{"id":2,"title":"Ventas","idUser":2}]}"#
    );
}

#[tokio::test]
async fn users_returns_whole_collection() {
    let (status, json) = get_json("/api/users").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({"users": [{"id": 1, "name": "Ana", "email": "ana@example.com"}]})
    );
}

#[tokio::test]
async fn chat_post_returns_system_reply() {
    let (status, body) = post_chat(r#"{"idChat":1,"text":"hello"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let json: Value = serde_json::from_slice(&body).expect("parse JSON");
    assert_eq!(json["idChat"], 1);
    assert_eq!(json["type"], "system");
    assert_eq!(json["text"], "Recibí tu mensaje: \"hello\"");
    assert!(json["id"].as_i64().is_some_and(|id| id > 0), "id: {}", json["id"]);
}

#[tokio::test]
async fn chat_post_rejects_string_chat_id() {
    let (status, body) = post_chat(r#"{"idChat":"1","text":"hello"}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).expect("parse JSON");
    assert_eq!(json, json!({"error": "Parámetros inválidos"}));
}

#[tokio::test]
async fn chat_post_rejects_empty_text() {
    let (status, body) = post_chat(r#"{"idChat":1,"text":""}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let json: Value = serde_json::from_slice(&body).expect("parse JSON");
    assert_eq!(json["error"], "Parámetros inválidos");
}

#[tokio::test]
async fn chat_post_with_malformed_body_is_client_error() {
    let (status, _) = post_chat("{not json").await;
    assert!(status.is_client_error(), "status: {status}");
}

#[tokio::test]
async fn unknown_path_serves_frontend_entry() {
    let (app, _frontend) = app();
    let req = Request::builder()
        .uri("/unknown/path")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), INDEX_HTML);
}

#[tokio::test]
async fn bundle_assets_are_served_directly() {
    let (app, _frontend) = app();
    let req = Request::builder().uri("/main.js").body(Body::empty()).unwrap();
    let (status, body) = send(app, req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), "console.log('avri');");
}

#[tokio::test]
async fn cross_origin_requests_are_allowed() {
    let (app, _frontend) = app();
    let req = Request::builder()
        .uri("/api/chats")
        .header(header::ORIGIN, "https://elsewhere.example")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
}
