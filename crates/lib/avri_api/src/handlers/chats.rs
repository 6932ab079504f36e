//! Chat listing handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::models::ChatsResponse;

/// `GET /api/chats` — every chat in the dataset.
pub async fn list_chats_handler(State(state): State<AppState>) -> Response {
    Json(ChatsResponse {
        chats: state.dataset.list_chats(),
    })
    .into_response()
}
