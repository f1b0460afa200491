// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Local HTTP server answering like Fireblocks, for client tests.

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::to_bytes,
    extract::Request,
    http::StatusCode,
    Json, Router,
};
use serde_json::Value;
use tokio::net::TcpListener;

use crate::config::{BasePath, FireblocksConfig};

pub(crate) const TEST_API_KEY: &str = "test-api-key";

#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub method: String,
    /// Path and query as received.
    pub uri: String,
    pub api_key: Option<String>,
    pub bearer: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

pub(crate) struct FakeVendor {
    pub host: String,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl FakeVendor {
    /// Answer every request with `status` and `reply`.
    pub async fn start(status: StatusCode, reply: Value) -> Self {
        let recorded = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&recorded);

        let app = Router::new().fallback(move |request: Request| {
            let sink = Arc::clone(&sink);
            let reply = reply.clone();
            async move {
                let (parts, body) = request.into_parts();
                let header = |name: &str| {
                    parts
                        .headers
                        .get(name)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_string)
                };
                let body = to_bytes(body, usize::MAX).await.unwrap();
                sink.lock().unwrap().push(RecordedRequest {
                    method: parts.method.to_string(),
                    uri: parts.uri.to_string(),
                    api_key: header("x-api-key"),
                    bearer: header("authorization")
                        .and_then(|v| v.strip_prefix("Bearer ").map(str::to_string)),
                    content_type: header("content-type"),
                    body: String::from_utf8(body.to_vec()).unwrap(),
                });
                (status, Json(reply))
            }
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            host: format!("http://{addr}"),
            recorded,
        }
    }

    pub fn config(&self) -> FireblocksConfig {
        FireblocksConfig {
            api_key: TEST_API_KEY.to_string(),
            secret_key_path: None,
            base_path: BasePath::Custom(self.host.clone()),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> RecordedRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected one request, got {requests:?}");
        requests[0].clone()
    }
}
