use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use crate::error::AuthError;

/// Scheme token expected in front of the key. Matched case-sensitively.
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Extracts the key from an `Authorization: ApiKey <key>` header.
///
/// A missing (or empty) header yields [`AuthError::NoAuthHeader`]; anything
/// present that is not `ApiKey` followed by a single space and a non-empty
/// token yields [`AuthError::MalformedAuthHeader`]. A value that is not valid
/// UTF-8 is malformed as well.
pub fn get_api_key(headers: &HeaderMap) -> Result<String, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::NoAuthHeader),
    };

    let value =
        std::str::from_utf8(value.as_bytes()).map_err(|_| AuthError::MalformedAuthHeader)?;
    parse_api_key(value).map(str::to_owned)
}

/// Parses a raw `Authorization` value. Tokens after the key are ignored.
pub fn parse_api_key(value: &str) -> Result<&str, AuthError> {
    let mut parts = value.split(' ');

    if parts.next() != Some(API_KEY_SCHEME) {
        return Err(AuthError::MalformedAuthHeader);
    }

    match parts.next() {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err(AuthError::MalformedAuthHeader),
    }
}

/// Extractor yielding the API key carried by the request.
///
/// Rejects with [`AuthError`], which renders as 401 when the header is
/// missing and 400 when it is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

impl<S> FromRequestParts<S> for ApiKey
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match get_api_key(&parts.headers) {
            Ok(key) => Ok(ApiKey(key)),
            Err(err) => {
                tracing::warn!(%err, "Rejected Authorization header");
                Err(err)
            }
        }
    }
}
