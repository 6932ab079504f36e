//! Response bodies.

use avri_core::models::{Chat, Message, User};
use serde::Serialize;

/// `GET /api/chats` body.
#[derive(Debug, Serialize)]
pub struct ChatsResponse<'a> {
    pub chats: &'a [Chat],
}

/// `GET /api/messages` body.
#[derive(Debug, Serialize)]
pub struct MessagesResponse<'a> {
    pub messages: Vec<&'a Message>,
}

/// `GET /api/users` body.
#[derive(Debug, Serialize)]
pub struct UsersResponse<'a> {
    pub users: &'a [User],
}

/// Error body, e.g. `{"error": "Parámetros inválidos"}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
