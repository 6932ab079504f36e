//! User listing handler.

use axum::Json;
use axum::extract::State;
use axum::response::{IntoResponse, Response};

use crate::AppState;
use crate::models::UsersResponse;

/// `GET /api/users` — every user in the dataset.
pub async fn list_users_handler(State(state): State<AppState>) -> Response {
    Json(UsersResponse {
        users: state.dataset.list_users(),
    })
    .into_response()
}
