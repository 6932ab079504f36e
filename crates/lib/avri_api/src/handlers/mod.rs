//! Request handlers.

pub mod chat;
pub mod chats;
pub mod messages;
pub mod users;
