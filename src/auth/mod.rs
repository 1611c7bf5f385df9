// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Authorization Module
//!
//! JWT authorization for the Casting Agency API.
//!
//! ## Flow
//!
//! 1. Client authenticates with the issuer (an Auth0 tenant) and receives an
//!    RS256 access token carrying a `permissions` claim
//! 2. Client sends `Authorization: Bearer <JWT>`
//! 3. The route's [`RequirePermission`] layer:
//!    - fetches the issuer's JWKS over HTTPS
//!    - verifies signature, expiry, issuer and audience
//!    - checks the route's permission against the `permissions` claim
//! 4. The handler receives the verified claims through [`Claims`]
//!
//! ## Errors
//!
//! Verification failures reach the client as a generic `invalid_token`;
//! header and permission failures keep their specific codes.

pub mod claims;
pub mod error;
pub mod extractor;
pub mod jwks;
pub mod middleware;
pub mod permissions;
pub mod verifier;

#[cfg(test)]
pub(crate) mod testing;

pub use claims::{Audience, TokenClaims};
pub use error::AuthError;
pub use extractor::Claims;
pub use jwks::{JwksClient, KeyFetchError, SigningKey, SigningKeySet};
pub use middleware::RequirePermission;
pub use permissions::check_permission;
pub use verifier::{extract_bearer_token, AuthConfig, Authorizer};
