//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. It holds the database connection pool,
//! the HTTP client for the AI chat proxy and the optional Gemini API key.

use sea_orm::DatabaseConnection;

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a connection pool whose
/// clones share the pool and `reqwest::Client` uses an `Arc` internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for outbound requests to the generative-language API.
    pub http_client: reqwest::Client,

    /// API key for the AI chat proxy; the endpoint answers 500 without it.
    pub gemini_api_key: Option<String>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `gemini_api_key` - Optional key for the AI chat proxy
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        gemini_api_key: Option<String>,
    ) -> Self {
        Self {
            db,
            http_client,
            gemini_api_key,
        }
    }
}
