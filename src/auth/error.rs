// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Authorization errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::jwks::KeyFetchError;
use crate::error::ErrorBody;

/// Authorization error type.
///
/// Every failed authorization attempt ends in exactly one of these. The
/// machine-readable code and the HTTP status are fixed per variant; the
/// `Display` text is the human-readable description sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization` header on the request
    #[error("Authorization header is missing")]
    MissingAuthHeader,
    /// `Authorization` header present but not `Bearer <token>`
    #[error("{0}")]
    MalformedAuthHeader(&'static str),
    /// Token header carries no `kid`
    #[error("Authorization malformed.")]
    MissingKeyId,
    /// No published key matches the token's `kid`
    #[error("Unable to find the appropriate key.")]
    KeyNotFound,
    /// Signing keys could not be fetched
    #[error("Unable to fetch signing keys.")]
    KeyFetch(#[from] KeyFetchError),
    /// Token `exp` is at or before the current time
    #[error("Token expired.")]
    TokenExpired,
    /// Audience or issuer mismatch
    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,
    /// Any other decode or signature failure
    #[error("Unable to parse authentication token.")]
    UnparsableToken,
    /// Verified claims carry no permissions list
    #[error("Permission not found in JWT")]
    PermissionsMissing,
    /// Required permission is not granted
    #[error("Permission not found")]
    PermissionDenied,
    /// Verification failed; cause intentionally withheld
    #[error("Access denied due to invalid token")]
    InvalidToken,
}

impl AuthError {
    /// Get the error code for this error.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingAuthHeader => "authorization_header_missing",
            AuthError::MalformedAuthHeader(_)
            | AuthError::MissingKeyId
            | AuthError::KeyNotFound
            | AuthError::KeyFetch(_)
            | AuthError::UnparsableToken => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims | AuthError::PermissionsMissing => "invalid_claims",
            AuthError::PermissionDenied => "unauthorized",
            AuthError::InvalidToken => "invalid_token",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::MalformedAuthHeader(_)
            | AuthError::MissingKeyId
            | AuthError::KeyFetch(_)
            | AuthError::TokenExpired
            | AuthError::InvalidClaims
            | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
            AuthError::KeyNotFound | AuthError::UnparsableToken | AuthError::PermissionsMissing => {
                StatusCode::BAD_REQUEST
            }
            AuthError::PermissionDenied => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        tracing::debug!(
            code = self.error_code(),
            status = status.as_u16(),
            "Authorization denied"
        );
        let body = Json(ErrorBody::new(status, self.error_code(), self.to_string()));
        (status, body).into_response()
    }
}
