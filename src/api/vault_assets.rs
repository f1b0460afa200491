// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{error, info};

use crate::{
    error::{ApiError, ErrorBody},
    models::VaultAssetResponse,
    state::AppState,
};

/// Balance of one asset in a vault account.
#[utoipa::path(
    get,
    path = "/vault-assets/{vault_account_id}/{asset_id}",
    tag = "Vault Assets",
    params(
        ("vault_account_id" = String, Path, description = "Vault account ID"),
        ("asset_id" = String, Path, description = "Asset ID, e.g. BTC")
    ),
    responses(
        (status = 200, description = "Asset balance", body = VaultAssetResponse),
        (status = 500, description = "Fireblocks error", body = ErrorBody)
    )
)]
pub async fn get_vault_asset(
    State(state): State<AppState>,
    Path((vault_account_id, asset_id)): Path<(String, String)>,
) -> Result<Json<VaultAssetResponse>, ApiError> {
    info!(vault_account_id = %vault_account_id, asset_id = %asset_id, "Fetching vault asset");

    let sdk = state
        .sdk
        .get_client()
        .await
        .map_err(|e| ApiError::vendor("get vault asset", e))?;

    let asset = sdk
        .get_vault_account_asset(&vault_account_id, &asset_id)
        .await
        .map_err(|e| {
            error!(vault_account_id = %vault_account_id, asset_id = %asset_id, error = %e, "Failed to fetch vault asset");
            ApiError::vendor("get vault asset", e)
        })?;

    Ok(Json(VaultAssetResponse::from_vendor(asset, &asset_id)))
}
