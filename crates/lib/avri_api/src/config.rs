//! API server configuration.

use std::path::PathBuf;

/// Entry document of the front-end bundle.
pub const INDEX_FILE: &str = "index.html";

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "0.0.0.0:8080").
    pub bind_addr: String,
    /// Directory holding `chats.json`, `messages.json` and `users.json`.
    pub data_dir: PathBuf,
    /// Directory of the pre-built front-end bundle.
    pub frontend_dir: PathBuf,
}

impl ApiConfig {
    /// Path of the document served for unmatched routes.
    pub fn index_file(&self) -> PathBuf {
        self.frontend_dir.join(INDEX_FILE)
    }
}
