// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fixed RSA keys and token helpers for unit tests.

use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};

use super::AuthConfig;

pub const SIGNING_KEY_PEM: &str = include_str!("../../tests/fixtures/signing_key.pem");
pub const SIGNING_JWKS: &str = include_str!("../../tests/fixtures/signing_key.jwks.json");
pub const SIGNING_KID: &str = "test-key-1";

/// Key that is never published; used to forge signatures.
pub const ROGUE_KEY_PEM: &str = include_str!("../../tests/fixtures/rogue_key.pem");

pub const ISSUER: &str = "https://casting.test/";
pub const AUDIENCE: &str = "casting";

pub fn auth_config(jwks_url: &str) -> AuthConfig {
    AuthConfig::new(jwks_url, ISSUER, AUDIENCE)
}

/// Valid payload for [`ISSUER`]/[`AUDIENCE`] expiring in an hour.
pub fn claims_with(permissions: &[&str]) -> Value {
    let now = Utc::now().timestamp();
    json!({
        "sub": "auth0|casting-director",
        "iss": ISSUER,
        "aud": AUDIENCE,
        "iat": now,
        "exp": now + 3600,
        "permissions": permissions,
    })
}

pub fn sign(claims: &Value, kid: Option<&str>, private_key_pem: &str) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = kid.map(str::to_string);
    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).unwrap();
    encode(&header, claims, &key).unwrap()
}

pub fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {token}")).unwrap(),
    );
    headers
}
