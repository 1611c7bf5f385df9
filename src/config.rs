// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! Configuration is read from the environment once at startup and handed to
//! constructors; nothing here is global.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `AUTH0_DOMAIN` | Token issuer domain (JWKS host, `iss` = `https://<domain>/`) | Required |
//! | `API_AUDIENCE` | Expected JWT audience claim | Required |
//! | `AUTH_ALGORITHMS` | Comma-separated accepted signature algorithms | `RS256` |
//! | `JWKS_TIMEOUT_SECS` | Timeout for the JWKS request | `5` |
//! | `JWKS_CACHE_TTL_SECS` | JWKS cache lifetime, `0` refetches per request | `0` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use jsonwebtoken::Algorithm;

use crate::auth::AuthConfig;

pub const AUTH0_DOMAIN_ENV: &str = "AUTH0_DOMAIN";
pub const API_AUDIENCE_ENV: &str = "API_AUDIENCE";
pub const AUTH_ALGORITHMS_ENV: &str = "AUTH_ALGORITHMS";
pub const JWKS_TIMEOUT_ENV: &str = "JWKS_TIMEOUT_SECS";
pub const JWKS_CACHE_TTL_ENV: &str = "JWKS_CACHE_TTL_SECS";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

/// Asymmetric RSA families only. Symmetric algorithms are never accepted.
const ACCEPTED_ALGORITHMS: [Algorithm; 6] = [
    Algorithm::RS256,
    Algorithm::RS384,
    Algorithm::RS512,
    Algorithm::PS256,
    Algorithm::PS384,
    Algorithm::PS512,
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value {value:?} for {var}")]
    Invalid { var: &'static str, value: String },
    #[error("unsupported signature algorithm {0:?}")]
    UnsupportedAlgorithm(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth: AuthConfig,
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let domain = get(AUTH0_DOMAIN_ENV).ok_or(ConfigError::Missing(AUTH0_DOMAIN_ENV))?;
        let audience = get(API_AUDIENCE_ENV).ok_or(ConfigError::Missing(API_AUDIENCE_ENV))?;

        let algorithms = match get(AUTH_ALGORITHMS_ENV) {
            Some(list) => parse_algorithms(&list)?,
            None => vec![Algorithm::RS256],
        };
        let timeout = parse_or(get(JWKS_TIMEOUT_ENV), JWKS_TIMEOUT_ENV, 5u64)?;
        let cache_ttl = parse_or(get(JWKS_CACHE_TTL_ENV), JWKS_CACHE_TTL_ENV, 0u64)?;

        let auth = AuthConfig::for_domain(domain.trim(), audience)
            .map_err(|_| ConfigError::Invalid {
                var: AUTH0_DOMAIN_ENV,
                value: domain.clone(),
            })?
            .with_algorithms(algorithms)
            .with_jwks_timeout(Duration::from_secs(timeout))
            .with_jwks_cache_ttl(Duration::from_secs(cache_ttl));

        let host: IpAddr = parse_or(get(HOST_ENV), HOST_ENV, IpAddr::from([0, 0, 0, 0]))?;
        let port: u16 = parse_or(get(PORT_ENV), PORT_ENV, 8080)?;

        let log_format = match get(LOG_FORMAT_ENV).as_deref().map(str::to_ascii_lowercase) {
            None => LogFormat::Pretty,
            Some(f) if f == "pretty" => LogFormat::Pretty,
            Some(f) if f == "json" => LogFormat::Json,
            Some(f) => {
                return Err(ConfigError::Invalid {
                    var: LOG_FORMAT_ENV,
                    value: f,
                })
            }
        };

        Ok(Self {
            auth,
            bind_addr: SocketAddr::new(host, port),
            log_format,
        })
    }
}

fn parse_or<T: FromStr>(
    value: Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: v }),
    }
}

fn parse_algorithms(list: &str) -> Result<Vec<Algorithm>, ConfigError> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|name| {
            Algorithm::from_str(name)
                .ok()
                .filter(|alg| ACCEPTED_ALGORITHMS.contains(alg))
                .ok_or_else(|| ConfigError::UnsupportedAlgorithm(name.to_string()))
        })
        .collect()
}
