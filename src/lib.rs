//! Extraction of API keys carried as `Authorization: ApiKey <key>`.

pub mod auth;
pub mod error;

pub use auth::{get_api_key, parse_api_key, ApiKey, API_KEY_SCHEME};
pub use error::AuthError;
