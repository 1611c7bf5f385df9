// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! JWKS (JSON Web Key Set) fetching and caching.
//!
//! The issuer publishes its RSA public keys at
//! `https://<domain>/.well-known/jwks.json`. By default every verification
//! fetches the document again; a positive cache TTL keeps the last set around
//! until it ages out or stops containing the `kid` a token asks for.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use jsonwebtoken::DecodingKey;
use reqwest::StatusCode;
use serde::Deserialize;
use tokio::sync::RwLock;

/// Failure to obtain the key set. The verifier decides how to report it.
#[derive(Debug, thiserror::Error)]
pub enum KeyFetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("request to key endpoint failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("HTTP {0} from key endpoint")]
    Status(StatusCode),
    #[error("invalid key set document: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Public key record published by the issuer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningKey {
    pub kty: String,
    pub kid: String,
    pub key_use: Option<String>,
    /// RSA modulus, base64url
    pub n: String,
    /// RSA exponent, base64url
    pub e: String,
}

impl SigningKey {
    pub fn decoding_key(&self) -> Result<DecodingKey, jsonwebtoken::errors::Error> {
        DecodingKey::from_rsa_components(&self.n, &self.e)
    }
}

/// Key identifier → public key record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "JwksDocument")]
pub struct SigningKeySet {
    keys: HashMap<String, SigningKey>,
}

impl SigningKeySet {
    pub fn get(&self, kid: &str) -> Option<&SigningKey> {
        self.keys.get(kid)
    }

    pub fn contains(&self, kid: &str) -> bool {
        self.keys.contains_key(kid)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl FromIterator<SigningKey> for SigningKeySet {
    fn from_iter<I: IntoIterator<Item = SigningKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(|k| (k.kid.clone(), k)).collect(),
        }
    }
}

/// Wire shape of `jwks.json`.
#[derive(Deserialize)]
struct JwksDocument {
    keys: Vec<RawJwk>,
}

#[derive(Deserialize)]
struct RawJwk {
    kty: Option<String>,
    kid: Option<String>,
    #[serde(rename = "use")]
    key_use: Option<String>,
    n: Option<String>,
    e: Option<String>,
}

impl From<JwksDocument> for SigningKeySet {
    fn from(doc: JwksDocument) -> Self {
        doc.keys
            .into_iter()
            .filter_map(|raw| match (raw.kty, raw.kid, raw.n, raw.e) {
                (Some(kty), Some(kid), Some(n), Some(e)) => Some(SigningKey {
                    kty,
                    kid,
                    key_use: raw.key_use,
                    n,
                    e,
                }),
                // EC/OKP keys and keys without a kid can never match an RS token
                _ => None,
            })
            .collect()
    }
}

struct CacheEntry {
    keys: SigningKeySet,
    fetched_at: Instant,
}

/// Client for the issuer's key endpoint.
#[derive(Clone)]
pub struct JwksClient {
    jwks_url: String,
    cache_ttl: Duration,
    cache: Arc<RwLock<Option<CacheEntry>>>,
    client: reqwest::Client,
}

impl JwksClient {
    /// Create a client for `jwks_url`. Every request is bounded by `timeout`.
    pub fn new(jwks_url: impl Into<String>, timeout: Duration) -> Result<Self, KeyFetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(KeyFetchError::Client)?;

        Ok(Self {
            jwks_url: jwks_url.into(),
            cache_ttl: Duration::ZERO,
            cache: Arc::new(RwLock::new(None)),
            client,
        })
    }

    /// Keep fetched key sets for `ttl`. Zero disables caching.
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }

    /// Fetch the key set from the endpoint, bypassing the cache.
    pub async fn fetch_keys(&self) -> Result<SigningKeySet, KeyFetchError> {
        let result = self.request_keys().await;
        match &result {
            Ok(keys) if keys.is_empty() => {
                tracing::warn!(url = %self.jwks_url, "Key set has no usable RSA keys")
            }
            Ok(keys) => tracing::debug!(url = %self.jwks_url, keys = keys.len(), "Fetched signing keys"),
            Err(e) => tracing::warn!(url = %self.jwks_url, error = %e, "Signing key fetch failed"),
        }
        result
    }

    async fn request_keys(&self) -> Result<SigningKeySet, KeyFetchError> {
        let response = self
            .client
            .get(&self.jwks_url)
            .send()
            .await
            .map_err(KeyFetchError::Request)?;

        if !response.status().is_success() {
            return Err(KeyFetchError::Status(response.status()));
        }

        response.json().await.map_err(KeyFetchError::Decode)
    }

    /// Key set expected to contain `kid`.
    ///
    /// Served from cache when fresh and `kid` is present; otherwise the set
    /// is refetched so that rotated keys are picked up.
    pub async fn keys_for(&self, kid: &str) -> Result<SigningKeySet, KeyFetchError> {
        if let Some(keys) = self.cached().await {
            if keys.contains(kid) {
                return Ok(keys);
            }
            tracing::debug!(kid, "Key id not in cached set, refetching");
        }
        self.refresh().await
    }

    /// Fetch a fresh set and store it when caching is enabled.
    pub async fn refresh(&self) -> Result<SigningKeySet, KeyFetchError> {
        let keys = self.fetch_keys().await?;
        if !self.cache_ttl.is_zero() {
            *self.cache.write().await = Some(CacheEntry {
                keys: keys.clone(),
                fetched_at: Instant::now(),
            });
        }
        Ok(keys)
    }

    pub async fn invalidate(&self) {
        *self.cache.write().await = None;
    }

    /// Check if a key set is currently cached and fresh.
    pub async fn is_cached(&self) -> bool {
        self.cached().await.is_some()
    }

    async fn cached(&self) -> Option<SigningKeySet> {
        let cache = self.cache.read().await;
        cache
            .as_ref()
            .filter(|entry| entry.fetched_at.elapsed() < self.cache_ttl)
            .map(|entry| entry.keys.clone())
    }
}
