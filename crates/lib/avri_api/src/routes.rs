//! Route paths.

pub const GET_API_CHATS: &str = "/api/chats";
pub const GET_API_MESSAGES: &str = "/api/messages";
pub const GET_API_USERS: &str = "/api/users";
pub const POST_API_CHAT: &str = "/api/chat";
