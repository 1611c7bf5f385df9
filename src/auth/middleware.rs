// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Per-route permission guard.
//!
//! `RequirePermission` wraps a route's service: it runs the full
//! authorization decision for the route's permission and only then calls the
//! inner service, with the verified `TokenClaims` stored in the request
//! extensions for the [`Claims`](super::Claims) extractor.
//!
//! ```rust,ignore
//! let guard = |permission| RequirePermission::new(authorizer.clone(), permission);
//!
//! Router::new().route(
//!     "/movies",
//!     get(list_movies)
//!         .route_layer(guard(GET_MOVIES))
//!         .merge(post(create_movie).route_layer(guard(POST_MOVIES))),
//! );
//! ```

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use axum::extract::Request;
use axum::response::{IntoResponse, Response};
use tower::{Layer, Service};

use super::Authorizer;

/// Layer requiring one permission on every request it guards.
#[derive(Clone)]
pub struct RequirePermission {
    authorizer: Arc<Authorizer>,
    permission: &'static str,
}

impl RequirePermission {
    pub fn new(authorizer: Arc<Authorizer>, permission: &'static str) -> Self {
        Self {
            authorizer,
            permission,
        }
    }
}

impl<S> Layer<S> for RequirePermission {
    type Service = RequirePermissionService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        RequirePermissionService {
            inner,
            authorizer: self.authorizer.clone(),
            permission: self.permission,
        }
    }
}

#[derive(Clone)]
pub struct RequirePermissionService<S> {
    inner: S,
    authorizer: Arc<Authorizer>,
    permission: &'static str,
}

impl<S> Service<Request> for RequirePermissionService<S>
where
    S: Service<Request, Response = Response> + Clone + Send + 'static,
    S::Future: Send + 'static,
{
    type Response = Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request) -> Self::Future {
        // Take the service that was driven to readiness; leave a fresh clone behind.
        let clone = self.inner.clone();
        let mut inner = std::mem::replace(&mut self.inner, clone);
        let authorizer = self.authorizer.clone();
        let permission = self.permission;

        Box::pin(async move {
            let decision = authorizer.authorize(permission, request.headers()).await;
            match decision {
                Ok(claims) => {
                    request.extensions_mut().insert(claims);
                    inner.call(request).await
                }
                Err(e) => Ok(e.into_response()),
            }
        })
    }
}
