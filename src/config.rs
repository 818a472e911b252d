//! API Configuration
//!
//! Base URL for the remote todo collection.

/// Default collection endpoint for local development.
const DEFAULT_API_URL: &str = "http://localhost:3001/todos";

/// Collection base URL.
///
/// Overridable at build time with the `TODO_API_URL` environment variable.
pub fn api_url() -> &'static str {
    option_env!("TODO_API_URL").unwrap_or(DEFAULT_API_URL)
}
