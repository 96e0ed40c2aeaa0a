use axum::http::StatusCode;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("no authorization header included")]
    NoAuthHeader,

    #[error("malformed authorization header")]
    MalformedAuthHeader,
}

impl AuthError {
    /// Status a handler should answer with when this error rejects a request.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::NoAuthHeader => StatusCode::UNAUTHORIZED,
            AuthError::MalformedAuthHeader => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl axum::response::IntoResponse for AuthError {
    fn into_response(self) -> axum::response::Response {
        let body = axum::Json(ErrorResponse {
            error: self.to_string(),
        });
        (self.status_code(), body).into_response()
    }
}
