// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fireblocks request signing.
//!
//! Every API call carries a short-lived RS256 JWT in the `Authorization`
//! header. The token binds the call to its exact URI (path and query) and to
//! the SHA-256 of the exact body bytes sent.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::Serialize;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use super::FireblocksError;

/// Seconds between `iat` and `exp`. Fireblocks rejects long-lived tokens.
const TOKEN_TTL_SECS: i64 = 55;

#[derive(Debug, Serialize)]
struct Claims<'a> {
    uri: &'a str,
    nonce: String,
    iat: i64,
    exp: i64,
    sub: &'a str,
    #[serde(rename = "bodyHash")]
    body_hash: String,
}

#[derive(Clone)]
pub struct RequestSigner {
    api_key: String,
    key: EncodingKey,
}

impl std::fmt::Debug for RequestSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestSigner")
            .field("api_key", &self.api_key)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl RequestSigner {
    /// Build a signer from the API key and a PEM RSA private key (PKCS#1 or PKCS#8).
    pub fn new(api_key: impl Into<String>, private_key_pem: &str) -> Result<Self, FireblocksError> {
        let key = EncodingKey::from_rsa_pem(private_key_pem.as_bytes())
            .map_err(|e| FireblocksError::Signing(format!("invalid RSA private key: {e}")))?;
        Ok(Self {
            api_key: api_key.into(),
            key,
        })
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a request to `uri` (path plus query, e.g. `/v1/vault/accounts_paged?limit=100`).
    pub fn sign(&self, uri: &str, body: &[u8]) -> Result<String, FireblocksError> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            uri,
            nonce: Uuid::new_v4().to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
            sub: &self.api_key,
            body_hash: body_hash(body),
        };

        encode(&Header::new(Algorithm::RS256), &claims, &self.key)
            .map_err(|e| FireblocksError::Signing(e.to_string()))
    }
}

/// Lowercase hex SHA-256 of the request body.
pub fn body_hash(body: &[u8]) -> String {
    format!("{:x}", Sha256::digest(body))
}
