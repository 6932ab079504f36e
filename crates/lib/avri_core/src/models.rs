//! Chat domain models.
//!
//! Records mirror the JSON files in the data directory. Attributes the API
//! does not interpret are kept in `attributes` and serialized back verbatim.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// Type tag carried by generated replies.
pub const SYSTEM_MESSAGE_TYPE: &str = "system";

/// A conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A message belonging to exactly one chat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,
    /// Foreign key to [`Chat::id`].
    #[serde(rename = "idChat")]
    pub id_chat: i64,
    /// Type tag, e.g. `"system"` or `"user"`.
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// A user record, returned as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub Map<String, Value>);

/// Synthetic answer to a posted message. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Creation time in Unix milliseconds. Not unique across requests.
    pub id: i64,
    /// Chat id exactly as the caller sent it.
    #[serde(rename = "idChat")]
    pub id_chat: Number,
    #[serde(rename = "type")]
    pub kind: String,
    pub text: String,
}
