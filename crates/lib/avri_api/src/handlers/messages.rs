//! Message listing handler.

use avri_core::queries::parse_chat_id;
use axum::Json;
use axum::extract::{Query, State};
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::models::MessagesResponse;

/// Query-string key carrying the chat id.
pub const ID_CHAT_PARAM: &str = "idChat";

/// `GET /api/messages?idChat=<int>` — messages of one chat.
///
/// The query string is read as raw pairs so that a repeated or malformed
/// `idChat` never rejects the request. The first `idChat` wins; a value
/// that does not start with an integer matches no chat.
pub async fn list_messages_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Response {
    let id_chat = params
        .iter()
        .find(|(key, _)| key == ID_CHAT_PARAM)
        .and_then(|(_, value)| parse_chat_id(value));
    Json(MessagesResponse {
        messages: state.dataset.list_messages(id_chat),
    })
    .into_response()
}
