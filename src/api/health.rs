// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::Json;

use crate::models::HealthResponse;

pub const SERVICE_NAME: &str = "fireblocks-service";

/// Liveness check. Does not contact Fireblocks.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{send, test_app};
    use crate::providers::fireblocks::mock::MockFireblocks;
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn health_reports_service_and_version() {
        let mock = MockFireblocks::new();
        let (status, body) = send(test_app(&mock), Method::GET, "/", None).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({ "status": "healthy", "service": "fireblocks-service", "version": "1.0.0" })
        );
        assert!(mock.calls().is_empty());
    }
}
