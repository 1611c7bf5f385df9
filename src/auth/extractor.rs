// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Axum extractor for verified claims.
//!
//! Handlers behind a [`RequirePermission`](super::RequirePermission) layer
//! receive the decoded token:
//!
//! ```rust,ignore
//! async fn list_movies(Claims(claims): Claims, State(state): State<AppState>) -> ... {
//!     tracing::info!(sub = claims.subject(), "listing movies");
//! }
//! ```

use axum::{extract::FromRequestParts, http::request::Parts};

use super::{AuthError, TokenClaims};

/// Claims placed in the request extensions by the permission guard.
pub struct Claims(pub TokenClaims);

impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A handler asking for claims on an unguarded route is a wiring bug;
        // refuse rather than run unauthenticated.
        parts
            .extensions
            .get::<TokenClaims>()
            .cloned()
            .map(Claims)
            .ok_or(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    fn parts() -> Parts {
        Request::builder()
            .uri("/artists")
            .body(())
            .unwrap()
            .into_parts()
            .0
    }

    #[tokio::test]
    async fn reads_claims_from_extensions() {
        let mut parts = parts();
        let claims: TokenClaims =
            serde_json::from_value(serde_json::json!({ "sub": "auth0|producer" })).unwrap();
        parts.extensions.insert(claims);

        let Claims(claims) = Claims::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(claims.subject(), "auth0|producer");
    }

    #[tokio::test]
    async fn rejects_when_guard_did_not_run() {
        let mut parts = parts();

        let result = Claims::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
