// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Runtime Configuration
//!
//! This module defines environment variable names, default values and the
//! loaders used at startup. A `.env` file in the working directory is read
//! first (see [`load_dotenv`]); variables already present in the process
//! environment win.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `FIREBLOCKS_API_KEY` | Fireblocks API key (JWT `sub` and `X-API-Key`) | Required |
//! | `FIREBLOCKS_SECRET_KEY_PATH` | Path to the RSA private key (PEM) | Required |
//! | `FIREBLOCKS_BASE_PATH` | `us`, `eu`, `eu2`, `sandbox` or an absolute URL | `us` |
//! | `FIREBLOCKS_TIMEOUT_SECS` | Timeout for each Fireblocks request | `30` |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8000` |
//! | `TLS_CERT_PATH` | PEM certificate chain (enables HTTPS with `TLS_KEY_PATH`) | Unset |
//! | `TLS_KEY_PATH` | PEM private key for the certificate | Unset |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::{
    fs,
    net::SocketAddr,
    path::{Path, PathBuf},
    time::Duration,
};

use tracing_subscriber::{fmt, EnvFilter};

pub const FIREBLOCKS_API_KEY_ENV: &str = "FIREBLOCKS_API_KEY";
pub const FIREBLOCKS_SECRET_KEY_PATH_ENV: &str = "FIREBLOCKS_SECRET_KEY_PATH";
pub const FIREBLOCKS_BASE_PATH_ENV: &str = "FIREBLOCKS_BASE_PATH";
pub const FIREBLOCKS_TIMEOUT_SECS_ENV: &str = "FIREBLOCKS_TIMEOUT_SECS";
pub const HOST_ENV: &str = "HOST";
pub const PORT_ENV: &str = "PORT";
pub const TLS_CERT_PATH_ENV: &str = "TLS_CERT_PATH";
pub const TLS_KEY_PATH_ENV: &str = "TLS_KEY_PATH";
pub const LOG_FORMAT_ENV: &str = "LOG_FORMAT";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_FILTER: &str = "info,tower_http=debug";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable is not set")]
    MissingVar(&'static str),

    #[error("Secret key file not found at: {}", .0.display())]
    SecretNotFound(PathBuf),

    #[error("Failed to read secret key file {}: {source}", path.display())]
    SecretUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// Fireblocks regional API hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BasePath {
    Us,
    Eu,
    Eu2,
    Sandbox,
    Custom(String),
}

impl BasePath {
    /// Host URL without the `/v1` API prefix.
    pub fn host(&self) -> &str {
        match self {
            BasePath::Us => "https://api.fireblocks.io",
            BasePath::Eu => "https://eu-api.fireblocks.io",
            BasePath::Eu2 => "https://eu2-api.fireblocks.io",
            BasePath::Sandbox => "https://sandbox-api.fireblocks.io",
            BasePath::Custom(url) => url.trim_end_matches('/'),
        }
    }

    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "" | "us" => Ok(BasePath::Us),
            "eu" => Ok(BasePath::Eu),
            "eu2" => Ok(BasePath::Eu2),
            "sandbox" => Ok(BasePath::Sandbox),
            _ => {
                let parsed = url::Url::parse(raw.trim()).map_err(|e| ConfigError::Invalid {
                    var: FIREBLOCKS_BASE_PATH_ENV,
                    reason: e.to_string(),
                })?;
                if !matches!(parsed.scheme(), "http" | "https") {
                    return Err(ConfigError::Invalid {
                        var: FIREBLOCKS_BASE_PATH_ENV,
                        reason: format!("unsupported scheme `{}`", parsed.scheme()),
                    });
                }
                // Both client generations append `/v1` themselves.
                let host = raw.trim().trim_end_matches('/');
                let host = host.strip_suffix("/v1").unwrap_or(host);
                Ok(BasePath::Custom(host.to_string()))
            }
        }
    }
}

/// Fireblocks credentials and connection settings, read once at startup.
#[derive(Debug, Clone)]
pub struct FireblocksConfig {
    pub api_key: String,
    pub secret_key_path: Option<PathBuf>,
    pub base_path: BasePath,
    pub timeout: Duration,
}

impl FireblocksConfig {
    /// Read the configuration from the process environment.
    ///
    /// Missing credentials are not an error here; [`FireblocksConfig::validate`]
    /// reports them so startup can log a precise message.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_path = match env_optional(FIREBLOCKS_BASE_PATH_ENV) {
            Some(raw) => BasePath::parse(&raw)?,
            None => BasePath::Us,
        };

        let timeout = match env_optional(FIREBLOCKS_TIMEOUT_SECS_ENV) {
            Some(raw) => {
                let secs = raw.parse::<u64>().map_err(|e| ConfigError::Invalid {
                    var: FIREBLOCKS_TIMEOUT_SECS_ENV,
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        var: FIREBLOCKS_TIMEOUT_SECS_ENV,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            api_key: env_optional(FIREBLOCKS_API_KEY_ENV).unwrap_or_default(),
            secret_key_path: env_optional(FIREBLOCKS_SECRET_KEY_PATH_ENV).map(PathBuf::from),
            base_path,
            timeout,
        })
    }

    /// Read and return the private key from `FIREBLOCKS_SECRET_KEY_PATH`, trimmed.
    pub fn load_secret(&self) -> Result<String, ConfigError> {
        let path = self
            .secret_key_path
            .as_deref()
            .ok_or(ConfigError::MissingVar(FIREBLOCKS_SECRET_KEY_PATH_ENV))?;
        read_secret_file(path)
    }

    /// Check that every required credential is present and the key is readable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingVar(FIREBLOCKS_API_KEY_ENV));
        }
        if self.secret_key_path.is_none() {
            return Err(ConfigError::MissingVar(FIREBLOCKS_SECRET_KEY_PATH_ENV));
        }
        self.load_secret().map(|_| ())
    }
}

fn read_secret_file(path: &Path) -> Result<String, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::SecretNotFound(path.to_path_buf()));
    }
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::SecretUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.trim().to_string())
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    pub tls: Option<TlsPaths>,
}

#[derive(Debug, Clone)]
pub struct TlsPaths {
    pub cert: PathBuf,
    pub key: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env_or_default(HOST_ENV, DEFAULT_HOST);
        let port = match env_optional(PORT_ENV) {
            Some(raw) => raw.parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: PORT_ENV,
                reason: e.to_string(),
            })?,
            None => DEFAULT_PORT,
        };
        let addr = format!("{host}:{port}")
            .parse()
            .map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                var: HOST_ENV,
                reason: e.to_string(),
            })?;

        let tls = match (
            env_optional(TLS_CERT_PATH_ENV),
            env_optional(TLS_KEY_PATH_ENV),
        ) {
            (Some(cert), Some(key)) => Some(TlsPaths {
                cert: cert.into(),
                key: key.into(),
            }),
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingVar(TLS_KEY_PATH_ENV)),
            (None, Some(_)) => return Err(ConfigError::MissingVar(TLS_CERT_PATH_ENV)),
        };

        Ok(Self { addr, tls })
    }
}

/// Load `.env` into the process environment if the file exists.
pub fn load_dotenv() {
    // A missing file is the normal production case.
    let _ = dotenvy::dotenv();
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the built-in filter; `LOG_FORMAT=json`
/// switches to one JSON object per line.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    match env_or_default(LOG_FORMAT_ENV, "pretty").as_str() {
        "json" => fmt().json().with_env_filter(filter).init(),
        _ => fmt().with_env_filter(filter).init(),
    }
}

fn env_optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_or_default(name: &str, default: &str) -> String {
    env_optional(name).unwrap_or_else(|| default.to_string())
}
