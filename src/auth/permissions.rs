// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Route permissions and the permission check.
//!
//! Permissions are flat `<verb>:<resource>` strings assigned to roles in the
//! issuer's dashboard. A casting assistant typically holds the two `get:`
//! permissions, a director adds artist management and movie updates, and an
//! executive producer holds all ten.

use super::{AuthError, TokenClaims};

pub const GET_ARTISTS: &str = "get:artists";
pub const POST_ARTISTS: &str = "post:artists";
pub const PATCH_ARTISTS: &str = "patch:artists";
pub const DELETE_ARTISTS: &str = "delete:artists";

pub const GET_MOVIES: &str = "get:movies";
pub const POST_MOVIES: &str = "post:movies";
pub const PATCH_MOVIES: &str = "patch:movies";
pub const DELETE_MOVIES: &str = "delete:movies";

/// Check that `claims` grant `required`.
///
/// Returns `Ok(true)` or fails; the boolean exists for call sites that want
/// to assert on it.
pub fn check_permission(required: &str, claims: &TokenClaims) -> Result<bool, AuthError> {
    match claims.has_permission(required) {
        None => Err(AuthError::PermissionsMissing),
        Some(false) => Err(AuthError::PermissionDenied),
        Some(true) => Ok(true),
    }
}
