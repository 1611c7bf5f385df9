// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use casting_agency::{
    api::router, auth::Authorizer, config::AppConfig, state::AppState, store::InMemoryStore,
    telemetry,
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };
    telemetry::init(config.log_format);

    let authorizer = match Authorizer::new(config.auth.clone()) {
        Ok(authorizer) => authorizer,
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialise authorizer");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        issuer = %config.auth.issuer,
        audience = %config.auth.audience,
        jwks_url = %config.auth.jwks_url,
        cache_ttl_secs = config.auth.jwks_cache_ttl.as_secs(),
        "Token verification configured"
    );

    let app = router(AppState::new(InMemoryStore::new(), authorizer));

    let listener = match TcpListener::bind(config.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %config.bind_addr, error = %e, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(addr = %config.bind_addr, "Casting Agency API listening (docs at /docs)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!(error = %e, "Server failed");
        return ExitCode::FAILURE;
    }

    tracing::info!("Server stopped");
    ExitCode::SUCCESS
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
