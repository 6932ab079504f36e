//! Chat message handler.

use avri_core::models::Reply;
use avri_core::reply::generate_reply;
use axum::Json;
use tracing::trace;

use crate::error::AppResult;

/// `POST /api/chat` — answer a posted message with a canned system reply.
///
/// The body is accepted as free-form JSON so that wrong field types are
/// reported as `400 {"error": "Parámetros inválidos"}` rather than as an
/// extractor rejection. Nothing is stored.
pub async fn chat_handler(Json(body): Json<serde_json::Value>) -> AppResult<Json<Reply>> {
    let reply = generate_reply(&body).inspect_err(|e| trace!(error = %e, "rejected chat message"))?;
    Ok(Json(reply))
}
