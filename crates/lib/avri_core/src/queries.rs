//! Read queries over the loaded [`Dataset`].

use crate::dataset::Dataset;
use crate::models::{Chat, Message, User};

impl Dataset {
    /// All chats, in storage order.
    pub fn list_chats(&self) -> &[Chat] {
        &self.chats
    }

    /// Messages of one chat, in storage order.
    ///
    /// `None` stands for a missing or unparsable identifier and matches
    /// nothing, as does an identifier no message refers to.
    pub fn list_messages(&self, id_chat: Option<i64>) -> Vec<&Message> {
        let Some(id_chat) = id_chat else {
            return Vec::new();
        };
        self.messages
            .iter()
            .filter(|m| m.id_chat == id_chat)
            .collect()
    }

    /// All users, in storage order.
    pub fn list_users(&self) -> &[User] {
        &self.users
    }
}

/// Parses a chat id from a query-string value.
///
/// Reads the leading integer after any whitespace and an optional sign.
/// Parsing stops at the first non-digit, so `"12abc"` and `"1.9"` yield 12
/// and 1. Returns `None` when no digit follows or the value overflows.
pub fn parse_chat_id(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude: i64 = digits[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}
