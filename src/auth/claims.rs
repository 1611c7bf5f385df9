// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Verified JWT claims.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// `aud` is either one string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Audience {
    Single(String),
    Many(Vec<String>),
}

/// Claims of a token whose signature, expiry, audience and issuer have been
/// checked.
///
/// The registered claims are optional at the type level; the verifier
/// enforces presence of `exp`, `aud` and `iss` before handing one out.
/// Anything not modelled here is kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Audience>,

    /// Expiration timestamp (seconds since epoch)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Granted permissions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,

    /// Singular spelling some issuers emit. Ignored when `permissions` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenClaims {
    /// `None` when the token carries no permissions claim at all.
    pub fn has_permission(&self, permission: &str) -> Option<bool> {
        self.permissions
            .as_ref()
            .or(self.permission.as_ref())
            .map(|granted| granted.iter().any(|p| p == permission))
    }

    pub fn subject(&self) -> &str {
        self.sub.as_deref().unwrap_or("unknown")
    }
}
