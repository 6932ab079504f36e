//! Canned replies to posted chat messages.

use serde_json::{Number, Value};
use thiserror::Error;

use crate::models::{Reply, SYSTEM_MESSAGE_TYPE};

/// Message returned to callers for any malformed reply request.
pub const INVALID_PARAMETERS: &str = "Parámetros inválidos";

/// Reply generation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    #[error("Parámetros inválidos")]
    InvalidParameters,
}

/// Validated body of a posted message.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyRequest {
    pub id_chat: Number,
    pub text: String,
}

impl ReplyRequest {
    /// Checks `payload` against the request schema.
    ///
    /// `idChat` must be a JSON number and `text` a non-empty JSON string.
    /// Strings holding digits are not coerced.
    pub fn from_json(payload: &Value) -> Result<Self, ReplyError> {
        let id_chat = match payload.get("idChat") {
            Some(Value::Number(n)) => n.clone(),
            _ => return Err(ReplyError::InvalidParameters),
        };
        let text = match payload.get("text") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            _ => return Err(ReplyError::InvalidParameters),
        };
        Ok(Self { id_chat, text })
    }
}

impl Reply {
    /// Builds the system reply for `request` with the given id.
    pub fn new(id: i64, request: ReplyRequest) -> Self {
        Self {
            id,
            id_chat: request.id_chat,
            kind: SYSTEM_MESSAGE_TYPE.to_string(),
            text: format!("Recibí tu mensaje: \"{}\"", request.text),
        }
    }
}

/// Validates `payload` and answers it with a reply stamped with the current
/// time in milliseconds.
pub fn generate_reply(payload: &Value) -> Result<Reply, ReplyError> {
    let request = ReplyRequest::from_json(payload)?;
    Ok(Reply::new(chrono::Utc::now().timestamp_millis(), request))
}
