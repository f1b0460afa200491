// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::{
    api::extract::ValidJson,
    error::{ApiError, ErrorBody},
    models::{CreateVaultWalletRequest, VaultWalletResponse},
    state::AppState,
};

/// Create an asset wallet in a vault account and return its deposit address.
#[utoipa::path(
    post,
    path = "/vault-wallets",
    tag = "Vault Wallets",
    request_body = CreateVaultWalletRequest,
    responses(
        (status = 201, description = "Wallet created", body = VaultWalletResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Fireblocks error", body = ErrorBody)
    )
)]
pub async fn create_vault_wallet(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateVaultWalletRequest>,
) -> Result<(StatusCode, Json<VaultWalletResponse>), ApiError> {
    info!(
        vault_account_id = %request.vault_account_id,
        asset_id = %request.asset_id,
        "Creating vault wallet"
    );

    let sdk = state
        .sdk
        .get_client()
        .await
        .map_err(|e| ApiError::vendor("create vault wallet", e))?;

    let created = sdk
        .create_vault_asset(&request.vault_account_id, &request.asset_id)
        .await
        .map_err(|e| {
            error!(vault_account_id = %request.vault_account_id, error = %e, "Failed to create vault wallet");
            ApiError::vendor("create vault wallet", e)
        })?;

    Ok((
        StatusCode::CREATED,
        Json(VaultWalletResponse::from_vendor(
            created,
            &request.vault_account_id,
        )),
    ))
}

#[cfg(test)]
mod tests {
    use crate::api::testing::{send, test_app};
    use crate::providers::fireblocks::mock::{MockCall, MockFireblocks};
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    #[tokio::test]
    async fn wallet_creation_returns_deposit_address() {
        let mock = MockFireblocks::new().respond_with(json!({
            "id": "bc1-wallet",
            "address": "bc1qabc",
            "legacyAddress": "1Legacy",
            "tag": ""
        }));
        let (status, body) = send(
            test_app(&mock),
            Method::POST,
            "/vault-wallets",
            Some(json!({ "vault_account_id": "9", "asset_id": "BTC" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({ "id": "bc1-wallet", "address": "bc1qabc", "legacy_address": "1Legacy", "tag": "" })
        );
        assert_eq!(
            mock.calls(),
            vec![MockCall::CreateVaultAsset {
                vault_account_id: "9".into(),
                asset_id: "BTC".into()
            }]
        );
    }

    #[tokio::test]
    async fn id_falls_back_to_vault_account() {
        let mock = MockFireblocks::new();
        let (_, body) = send(
            test_app(&mock),
            Method::POST,
            "/vault-wallets",
            Some(json!({ "vault_account_id": "9", "asset_id": "ETH" })),
        )
        .await;
        assert_eq!(body["id"], "9");
        assert_eq!(body["address"], "0xmock");
    }

    #[tokio::test]
    async fn blank_asset_is_rejected_before_vendor_call() {
        let mock = MockFireblocks::new();
        let (status, body) = send(
            test_app(&mock),
            Method::POST,
            "/vault-wallets",
            Some(json!({ "vault_account_id": "9", "asset_id": " " })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "asset_id must not be empty");
        assert!(mock.calls().is_empty());
    }
}
