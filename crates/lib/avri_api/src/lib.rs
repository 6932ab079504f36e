//! # avri_api
//!
//! HTTP API library for Avri.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

use std::sync::Arc;

use avri_core::Dataset;
use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::services::{ServeDir, ServeFile};

use crate::config::ApiConfig;
use crate::handlers::{chat, chats, messages, users};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Chats, messages and users loaded at startup. Read-only.
    pub dataset: Arc<Dataset>,
    /// API configuration.
    pub config: ApiConfig,
}

/// The complete HTTP service: routes behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Builds the Axum router with all routes and shared state.
///
/// Paths no API route matches are served from the front-end bundle, with
/// its `index.html` answering anything that is not a file there. A trailing
/// slash is trimmed before routing, so `/api/chats/` lists chats too.
pub fn router(state: AppState) -> App {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let frontend = ServeDir::new(&state.config.frontend_dir)
        .fallback(ServeFile::new(state.config.index_file()));

    let api = Router::new()
        .route(routes::GET_API_CHATS, get(chats::list_chats_handler))
        .route(routes::GET_API_MESSAGES, get(messages::list_messages_handler))
        .route(routes::GET_API_USERS, get(users::list_users_handler))
        .route(routes::POST_API_CHAT, post(chat::chat_handler))
        .fallback_service(frontend)
        .layer(cors)
        .with_state(state);

    NormalizePath::trim_trailing_slash(api)
}
