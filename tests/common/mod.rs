// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Shared fixtures: a mock issuer serving the test JWKS and token helpers.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header::AUTHORIZATION, header::CONTENT_TYPE, Request, StatusCode};
use axum::Router;
use casting_agency::{
    api::router,
    auth::{AuthConfig, Authorizer},
    state::AppState,
    store::InMemoryStore,
};
use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde_json::{json, Value};
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SIGNING_KEY_PEM: &str = include_str!("../fixtures/signing_key.pem");
pub const SIGNING_JWKS: &str = include_str!("../fixtures/signing_key.jwks.json");
pub const SIGNING_KID: &str = "test-key-1";
pub const ROGUE_KEY_PEM: &str = include_str!("../fixtures/rogue_key.pem");
pub const ROGUE_JWKS: &str = include_str!("../fixtures/rogue_key.jwks.json");
pub const ROGUE_KID: &str = "rogue-key";

pub const ISSUER: &str = "https://casting.test/";
pub const AUDIENCE: &str = "casting";
pub const JWKS_PATH: &str = "/.well-known/jwks.json";

pub const CASTING_ASSISTANT: &[&str] = &["get:artists", "get:movies"];
pub const CASTING_DIRECTOR: &[&str] = &[
    "get:artists",
    "get:movies",
    "post:artists",
    "patch:artists",
    "delete:artists",
    "patch:movies",
];
pub const EXECUTIVE_PRODUCER: &[&str] = &[
    "get:artists",
    "get:movies",
    "post:artists",
    "patch:artists",
    "delete:artists",
    "post:movies",
    "patch:movies",
    "delete:movies",
];

/// Mock issuer publishing `jwks`.
pub async fn issuer(jwks: &'static str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(JWKS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(jwks, "application/json"))
        .mount(&server)
        .await;
    server
}

pub fn auth_config(server: &MockServer) -> AuthConfig {
    AuthConfig::new(format!("{}{JWKS_PATH}", server.uri()), ISSUER, AUDIENCE)
}

pub fn app(config: AuthConfig) -> Router {
    let authorizer = Authorizer::new(config).expect("authorizer builds");
    router(AppState::new(InMemoryStore::new(), authorizer))
}

pub fn claims_for(permissions: &[&str]) -> Value {
    let now = Utc::now().timestamp();
    json!({
        "sub": "auth0|tester",
        "iss": ISSUER,
        "aud": AUDIENCE,
        "iat": now,
        "exp": now + 3600,
        "permissions": permissions,
    })
}

pub fn sign(claims: &Value, kid: &str, private_key_pem: &str) -> String {
    let mut header = Header::new(Algorithm::RS256);
    header.kid = Some(kid.to_string());
    let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes()).expect("valid test key");
    encode(&header, claims, &key).expect("token encodes")
}

pub fn token_for(permissions: &[&str]) -> String {
    sign(&claims_for(permissions), SIGNING_KID, SIGNING_KEY_PEM)
}

/// Send one request and return status plus JSON body (`Null` when empty).
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request builds"))
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collects");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}
