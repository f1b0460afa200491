// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use crate::{
    api::extract::ValidQuery,
    error::{ApiError, ErrorBody},
    models::{AssetAddressesPage, PageParams},
    providers::fireblocks::types::PageQuery,
    state::AppState,
};

/// Deposit addresses of one asset in a vault account, one page at a time.
#[utoipa::path(
    get,
    path = "/vault-assets/{vault_account_id}/{asset_id}/addresses",
    tag = "Vault Assets",
    params(
        ("vault_account_id" = String, Path, description = "Vault account ID"),
        ("asset_id" = String, Path, description = "Asset ID, e.g. BTC"),
        PageParams
    ),
    responses(
        (status = 200, description = "Page of addresses", body = AssetAddressesPage),
        (status = 400, description = "Invalid query", body = ErrorBody),
        (status = 500, description = "Fireblocks error", body = ErrorBody)
    )
)]
pub async fn list_asset_addresses(
    State(state): State<AppState>,
    Path((vault_account_id, asset_id)): Path<(String, String)>,
    ValidQuery(params): ValidQuery<PageParams>,
) -> Result<Json<AssetAddressesPage>, ApiError> {
    let query = PageQuery::from(params);
    info!(vault_account_id = %vault_account_id, asset_id = %asset_id, "Listing asset addresses");

    let client = state
        .vaults
        .get_client()
        .await
        .map_err(|e| ApiError::vendor("get asset addresses", e))?;

    let page = client
        .get_vault_account_asset_addresses_paginated(&vault_account_id, &asset_id, &query)
        .await
        .map_err(|e| {
            error!(vault_account_id = %vault_account_id, asset_id = %asset_id, error = %e, "Failed to list asset addresses");
            ApiError::vendor("get asset addresses", e)
        })?;

    Ok(Json(AssetAddressesPage {
        data: page,
        status_code: StatusCode::OK.as_u16(),
    }))
}
