// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Casting Agency - Artists & Movies API
//!
//! A CRUD service over artists and movies where every route requires one
//! permission from an RS256 JWT issued by an external identity provider.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers and router (Axum)
//! - `auth` - JWKS client, token verification, permission guard
//! - `config` - Environment configuration
//! - `store` - In-memory artist and movie store

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod store;
pub mod telemetry;
