// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::AppState;

/// Simple health check response for liveness probes.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

/// Readiness response with the signing key endpoint status.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadyResponse {
    /// "ok" or "degraded".
    pub status: String,
    /// "ok" when the issuer's key set can be fetched, "unavailable" otherwise.
    pub jwks: String,
}

/// Liveness probe handler.
///
/// Always returns 200 if the process is running.
#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn liveness() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Readiness probe handler.
///
/// Returns 503 while the issuer's key endpoint is unreachable, since no
/// guarded route can succeed until it is back.
#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "Health",
    responses(
        (status = 200, description = "Service is ready", body = ReadyResponse),
        (status = 503, description = "Key endpoint unavailable", body = ReadyResponse)
    )
)]
pub async fn readiness(State(state): State<AppState>) -> (StatusCode, Json<ReadyResponse>) {
    let jwks = state.authorizer.jwks();
    let jwks_ok = jwks.is_cached().await || jwks.refresh().await.is_ok();

    let (status, text) = if jwks_ok {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status,
        Json(ReadyResponse {
            status: text.to_string(),
            jwks: if jwks_ok { "ok" } else { "unavailable" }.to_string(),
        }),
    )
}
