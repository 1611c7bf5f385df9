// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Bearer token extraction, JWT verification and the authorization decision.
//!
//! ```text
//! no header ─► malformed header ─► bearer token ─► key located
//!     ─► signature + claims verified ─► permission checked ─► AUTHORIZED
//! ```
//!
//! Any step can end in `DENIED` with exactly one [`AuthError`].

use std::time::Duration;

use axum::http::{header::AUTHORIZATION, HeaderMap};
use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use url::Url;

use super::jwks::{JwksClient, KeyFetchError, SigningKeySet};
use super::permissions::check_permission;
use super::{AuthError, TokenClaims};

/// Default timeout for a key endpoint request.
pub const DEFAULT_JWKS_TIMEOUT: Duration = Duration::from_secs(5);

/// Issuer, audience and key source the authorizer trusts.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Key set endpoint
    pub jwks_url: String,
    /// Expected `iss`
    pub issuer: String,
    /// Expected `aud`
    pub audience: String,
    /// Accepted signature algorithms
    pub algorithms: Vec<Algorithm>,
    /// Upper bound on one key endpoint request
    pub jwks_timeout: Duration,
    /// Zero disables key caching
    pub jwks_cache_ttl: Duration,
}

impl AuthConfig {
    pub fn new(
        jwks_url: impl Into<String>,
        issuer: impl Into<String>,
        audience: impl Into<String>,
    ) -> Self {
        Self {
            jwks_url: jwks_url.into(),
            issuer: issuer.into(),
            audience: audience.into(),
            algorithms: vec![Algorithm::RS256],
            jwks_timeout: DEFAULT_JWKS_TIMEOUT,
            jwks_cache_ttl: Duration::ZERO,
        }
    }

    /// Config for an Auth0-style tenant: issuer `https://<domain>/`, keys at
    /// `https://<domain>/.well-known/jwks.json`.
    pub fn for_domain(domain: &str, audience: impl Into<String>) -> Result<Self, url::ParseError> {
        let issuer = Url::parse(&format!("https://{domain}/"))?;
        let jwks_url = issuer.join(".well-known/jwks.json")?;
        Ok(Self::new(jwks_url.as_str(), issuer.as_str(), audience))
    }

    pub fn with_algorithms(mut self, algorithms: Vec<Algorithm>) -> Self {
        if !algorithms.is_empty() {
            self.algorithms = algorithms;
        }
        self
    }

    pub fn with_jwks_timeout(mut self, timeout: Duration) -> Self {
        self.jwks_timeout = timeout;
        self
    }

    pub fn with_jwks_cache_ttl(mut self, ttl: Duration) -> Self {
        self.jwks_cache_ttl = ttl;
        self
    }
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingAuthHeader)?
        .to_str()
        .map_err(|_| AuthError::MalformedAuthHeader("Authorization header must be bearer token."))?;

    if value.is_empty() {
        return Err(AuthError::MissingAuthHeader);
    }

    let parts: Vec<&str> = value.split_whitespace().collect();
    match parts.as_slice() {
        [scheme, token] if scheme.eq_ignore_ascii_case("bearer") => Ok(*token),
        [_, _] => Err(AuthError::MalformedAuthHeader(
            "Authorization header must start with Bearer.",
        )),
        [] | [_] => Err(AuthError::MalformedAuthHeader("Token not found")),
        _ => Err(AuthError::MalformedAuthHeader(
            "Authorization header must be bearer token.",
        )),
    }
}

/// Verifies tokens from the configured issuer and makes per-route decisions.
///
/// Holds no per-request state; share one instance behind an `Arc`.
pub struct Authorizer {
    jwks: JwksClient,
    validation: Validation,
}

impl Authorizer {
    pub fn new(config: AuthConfig) -> Result<Self, KeyFetchError> {
        let jwks = JwksClient::new(&config.jwks_url, config.jwks_timeout)?
            .with_cache_ttl(config.jwks_cache_ttl);

        let mut validation =
            Validation::new(config.algorithms.first().copied().unwrap_or(Algorithm::RS256));
        validation.algorithms = config.algorithms.clone();
        validation.leeway = 0;
        validation.set_audience(&[&config.audience]);
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        Ok(Self { jwks, validation })
    }

    pub fn jwks(&self) -> &JwksClient {
        &self.jwks
    }

    /// Verify `token` against the issuer's current key set.
    pub async fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let kid = key_id(token)?;
        let keys = self.jwks.keys_for(&kid).await?;
        self.verify_signed_by(token, &kid, &keys)
    }

    /// Verify `token` against an already fetched key set.
    pub fn verify_with_keys(
        &self,
        token: &str,
        keys: &SigningKeySet,
    ) -> Result<TokenClaims, AuthError> {
        let kid = key_id(token)?;
        self.verify_signed_by(token, &kid, keys)
    }

    fn verify_signed_by(
        &self,
        token: &str,
        kid: &str,
        keys: &SigningKeySet,
    ) -> Result<TokenClaims, AuthError> {
        let key = keys.get(kid).ok_or(AuthError::KeyNotFound)?;
        let decoding_key = key
            .decoding_key()
            .map_err(|_| AuthError::UnparsableToken)?;

        let claims = decode::<TokenClaims>(token, &decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidAudience
                | ErrorKind::InvalidIssuer
                | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims,
                _ => AuthError::UnparsableToken,
            })?
            .claims;

        // The library accepts exp == now; a token is dead at its expiry second.
        match claims.exp {
            Some(exp) if exp > Utc::now().timestamp() => Ok(claims),
            Some(_) => Err(AuthError::TokenExpired),
            None => Err(AuthError::InvalidClaims),
        }
    }

    /// Full decision for one request: extract, verify, check `required`.
    ///
    /// Verification failures are reported as [`AuthError::InvalidToken`];
    /// header and permission failures keep their own codes.
    pub async fn authorize(
        &self,
        required: &str,
        headers: &HeaderMap,
    ) -> Result<TokenClaims, AuthError> {
        let token = extract_bearer_token(headers)?;

        let claims = self.verify(token).await.map_err(|e| {
            tracing::debug!(code = e.error_code(), cause = %e, "Token verification failed");
            AuthError::InvalidToken
        })?;

        check_permission(required, &claims)?;
        tracing::debug!(sub = claims.subject(), permission = required, "Request authorized");
        Ok(claims)
    }
}

fn key_id(token: &str) -> Result<String, AuthError> {
    decode_header(token)
        .map_err(|_| AuthError::UnparsableToken)?
        .kid
        .ok_or(AuthError::MissingKeyId)
}
