// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::Request,
    http::HeaderName,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info_span;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    error::ErrorBody,
    models::{
        AssetAddressesPage, CreateTokenRequest, CreateTransactionRequest,
        CreateVaultAccountRequest, CreateVaultWalletRequest, DeployFunctionParam, EvmParams,
        HealthResponse, StellarRippleParams, TokenResponse, TransactionResponse,
        VaultAccountResponse, VaultAccountsPage, VaultAssetInAccount, VaultAssetResponse,
        VaultWalletResponse,
    },
    state::AppState,
};

pub mod extract;
pub mod health;
pub mod tokens;
pub mod transactions;
pub mod vault_accounts;
pub mod vault_asset_addresses;
pub mod vault_assets;
pub mod vault_wallets;

const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn router(state: AppState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let routes = Router::new()
        .route("/", get(health::health))
        .route(
            "/vault-accounts",
            get(vault_accounts::list_vault_accounts).post(vault_accounts::create_vault_account),
        )
        .route(
            "/vault-accounts/{vault_account_id}",
            get(vault_accounts::get_vault_account),
        )
        .route(
            "/vault-assets/{vault_account_id}/{asset_id}",
            get(vault_assets::get_vault_asset),
        )
        .route(
            "/vault-assets/{vault_account_id}/{asset_id}/addresses",
            get(vault_asset_addresses::list_asset_addresses),
        )
        .route("/vault-wallets", post(vault_wallets::create_vault_wallet))
        .route("/transactions", post(transactions::create_transaction))
        .route("/tokens", post(tokens::issue_token))
        .with_state(state);

    routes
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request| {
                let request_id = request
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");
                info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = %request_id,
                )
            }),
        )
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fireblocks Service",
        description = "REST API over Fireblocks vaults, transfers and tokenization"
    ),
    paths(
        health::health,
        vault_accounts::list_vault_accounts,
        vault_accounts::get_vault_account,
        vault_accounts::create_vault_account,
        vault_assets::get_vault_asset,
        vault_asset_addresses::list_asset_addresses,
        vault_wallets::create_vault_wallet,
        transactions::create_transaction,
        tokens::issue_token
    ),
    components(
        schemas(
            HealthResponse,
            ErrorBody,
            CreateVaultAccountRequest,
            VaultAccountResponse,
            VaultAssetInAccount,
            VaultAccountsPage,
            VaultAssetResponse,
            AssetAddressesPage,
            CreateVaultWalletRequest,
            VaultWalletResponse,
            CreateTransactionRequest,
            TransactionResponse,
            CreateTokenRequest,
            EvmParams,
            DeployFunctionParam,
            StellarRippleParams,
            TokenResponse
        )
    ),
    tags(
        (name = "Health", description = "Liveness"),
        (name = "Vault Accounts", description = "Vault account management"),
        (name = "Vault Assets", description = "Asset balances and deposit addresses"),
        (name = "Vault Wallets", description = "Asset wallet creation"),
        (name = "Transactions", description = "Transfers between vault accounts"),
        (name = "Tokens", description = "Token issuance")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Method, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::router;
    use crate::{providers::fireblocks::mock::MockFireblocks, state::AppState};

    pub fn test_app(mock: &Arc<MockFireblocks>) -> Router {
        let (vaults, sdk) = mock.managers();
        router(AppState::new(vaults, sdk))
    }

    /// Send one request through the router; returns the status and JSON body
    /// (`Null` when the body is empty).
    pub async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{send, test_app};
    use super::*;
    use crate::providers::fireblocks::mock::MockFireblocks;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn responses_carry_a_request_id() {
        let app = test_app(&MockFireblocks::new());
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(uuid::Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn caller_request_id_is_propagated() {
        let app = test_app(&MockFireblocks::new());
        let response = app
            .oneshot(
                Request::builder()
                    .uri("/")
                    .header(REQUEST_ID_HEADER, "req-123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.headers()[REQUEST_ID_HEADER], "req-123");
    }

    #[tokio::test]
    async fn openapi_document_lists_every_route() {
        let (status, doc) = send(
            test_app(&MockFireblocks::new()),
            Method::GET,
            "/api-doc/openapi.json",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        for path in [
            "/",
            "/vault-accounts",
            "/vault-accounts/{vault_account_id}",
            "/vault-assets/{vault_account_id}/{asset_id}",
            "/vault-assets/{vault_account_id}/{asset_id}/addresses",
            "/vault-wallets",
            "/transactions",
            "/tokens",
        ] {
            assert!(doc["paths"].get(path).is_some(), "missing {path}");
        }
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let (status, _) = send(
            test_app(&MockFireblocks::new()),
            Method::GET,
            "/nope",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
