// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Signed HTTP transport shared by both Fireblocks client generations.

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::{Position, Url};

use super::{signer::RequestSigner, FireblocksError};

#[derive(Debug, Clone)]
pub struct Transport {
    base_url: Url,
    signer: RequestSigner,
    http: Client,
}

impl Transport {
    /// `base_url` may carry a path prefix (e.g. `/v1`); request segments are
    /// appended after it.
    pub fn new(
        base_url: &str,
        signer: RequestSigner,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, FireblocksError> {
        let base_url = Url::parse(base_url)
            .map_err(|e| FireblocksError::Transport(format!("invalid base URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(FireblocksError::Transport(format!(
                "base URL {base_url} cannot carry a path"
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| FireblocksError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url,
            signer,
            http,
        })
    }

    pub async fn get(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> Result<Value, FireblocksError> {
        let url = self.url(segments, query);
        self.send(Method::GET, url, String::new()).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<Value, FireblocksError> {
        let url = self.url(segments, &[]);
        let body = serde_json::to_string(body)
            .map_err(|e| FireblocksError::InvalidResponse(format!("serialize body failed: {e}")))?;
        self.send(Method::POST, url, body).await
    }

    fn url(&self, segments: &[&str], query: &[(&'static str, String)]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in `new`: the base URL always has path segments.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        if !query.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        url
    }

    async fn send(&self, method: Method, url: Url, body: String) -> Result<Value, FireblocksError> {
        let uri = &url[Position::BeforePath..];
        let token = self.signer.sign(uri, body.as_bytes())?;
        let label = format!("{method} {}", url.path());

        debug!(request = %label, "Fireblocks request");

        let mut request = self
            .http
            .request(method.clone(), url.clone())
            .header("X-API-Key", self.signer.api_key())
            .header("Authorization", format!("Bearer {token}"));
        if method != Method::GET {
            request = request
                .header("Content-Type", "application/json")
                .body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FireblocksError::Transport(format!("{label} failed: {e}")))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FireblocksError::Transport(format!("{label} body read failed: {e}")))?;

        if !status.is_success() {
            return Err(api_error(status, &text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_str(&text)
            .map_err(|e| FireblocksError::InvalidResponse(format!("{label} invalid JSON: {e}")))
    }
}

/// Fireblocks error bodies look like `{"message": "...", "code": 1234}`.
fn api_error(status: StatusCode, body: &str) -> FireblocksError {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let code = parsed
        .as_ref()
        .and_then(|v| v.get("code"))
        .and_then(Value::as_i64);
    let message = parsed
        .as_ref()
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| {
            let trimmed = body.trim();
            if trimmed.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            } else {
                trimmed.to_string()
            }
        });

    FireblocksError::Api {
        status: status.as_u16(),
        code,
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::fireblocks::signer::tests::TEST_PRIVATE_KEY;

    fn transport(base: &str) -> Transport {
        let signer = RequestSigner::new("k", TEST_PRIVATE_KEY).unwrap();
        Transport::new(base, signer, Duration::from_secs(5), "test").unwrap()
    }

    #[test]
    fn url_appends_encoded_segments_after_base_prefix() {
        let t = transport("https://api.fireblocks.io/v1");
        let url = t.url(&["vault", "accounts", "a b/c"], &[]);
        assert_eq!(
            url.as_str(),
            "https://api.fireblocks.io/v1/vault/accounts/a%20b%2Fc"
        );
        assert_eq!(url.query(), None);
    }

    #[test]
    fn url_without_prefix_and_with_query() {
        let t = transport("https://api.fireblocks.io");
        let url = t.url(
            &["v1", "vault", "accounts_paged"],
            &[("namePrefix", "Ops".to_string()), ("limit", "100".to_string())],
        );
        assert_eq!(
            &url[Position::BeforePath..],
            "/v1/vault/accounts_paged?namePrefix=Ops&limit=100"
        );
    }

    #[test]
    fn api_error_reads_vendor_message_and_code() {
        let err = api_error(
            StatusCode::NOT_FOUND,
            r#"{"message":"Vault account not found","code":11001}"#,
        );
        match err {
            FireblocksError::Api {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code, Some(11001));
                assert_eq!(message, "Vault account not found");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn api_error_falls_back_to_raw_body_or_reason() {
        let err = api_error(StatusCode::BAD_GATEWAY, "upstream down");
        assert_eq!(err.to_string(), "Fireblocks API returned 502: upstream down");

        let err = api_error(StatusCode::SERVICE_UNAVAILABLE, "");
        assert_eq!(
            err.to_string(),
            "Fireblocks API returned 503: Service Unavailable"
        );
    }

    #[test]
    fn rejects_non_hierarchical_base_url() {
        let signer = RequestSigner::new("k", TEST_PRIVATE_KEY).unwrap();
        assert!(Transport::new("mailto:ops@example.com", signer, Duration::from_secs(1), "t").is_err());
    }
}
