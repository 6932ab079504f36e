//! Static dataset loaded once at startup.
//!
//! The data directory holds three JSON arrays: `chats.json`,
//! `messages.json` and `users.json`. After [`Dataset::load`] returns the
//! collections are never mutated; callers share the dataset behind an `Arc`.

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::info;

use crate::models::{Chat, Message, User};

pub const CHATS_FILE: &str = "chats.json";
pub const MESSAGES_FILE: &str = "messages.json";
pub const USERS_FILE: &str = "users.json";

/// Dataset loading errors.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only chats, messages and users.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub(crate) chats: Vec<Chat>,
    pub(crate) messages: Vec<Message>,
    pub(crate) users: Vec<User>,
}

impl Dataset {
    pub fn new(chats: Vec<Chat>, messages: Vec<Message>, users: Vec<User>) -> Self {
        Self {
            chats,
            messages,
            users,
        }
    }

    /// Loads all three collections from `dir`.
    ///
    /// Fails on the first file that cannot be read or does not hold an array
    /// of the expected records; a partial dataset is never returned.
    pub fn load(dir: &Path) -> Result<Self, DatasetError> {
        let chats: Vec<Chat> = read_collection(&dir.join(CHATS_FILE))?;
        let messages: Vec<Message> = read_collection(&dir.join(MESSAGES_FILE))?;
        let users: Vec<User> = read_collection(&dir.join(USERS_FILE))?;

        info!(
            dir = %dir.display(),
            chats = chats.len(),
            messages = messages.len(),
            users = users.len(),
            "dataset loaded"
        );

        Ok(Self::new(chats, messages, users))
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
