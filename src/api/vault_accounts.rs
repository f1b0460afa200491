// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Vault account endpoints: list, lookup and creation.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{error, info};

use crate::{
    api::extract::{ValidJson, ValidQuery},
    error::{ApiError, ErrorBody},
    models::{
        CreateVaultAccountRequest, ListVaultAccountsParams, VaultAccountResponse,
        VaultAccountsPage,
    },
    providers::fireblocks::types,
    state::AppState,
};

/// List vault accounts, one page at a time.
#[utoipa::path(
    get,
    path = "/vault-accounts",
    tag = "Vault Accounts",
    params(ListVaultAccountsParams),
    responses(
        (status = 200, description = "Page of vault accounts", body = VaultAccountsPage),
        (status = 400, description = "Invalid query", body = ErrorBody),
        (status = 500, description = "Fireblocks error", body = ErrorBody)
    )
)]
pub async fn list_vault_accounts(
    State(state): State<AppState>,
    ValidQuery(params): ValidQuery<ListVaultAccountsParams>,
) -> Result<Json<VaultAccountsPage>, ApiError> {
    let query = types::VaultAccountsQuery::from(params);
    info!(limit = ?query.limit, "Listing vault accounts");

    let client = state
        .vaults
        .get_client()
        .await
        .map_err(|e| ApiError::vendor("get vault accounts", e))?;

    let page = client.get_paged_vault_accounts(&query).await.map_err(|e| {
        error!(error = %e, "Failed to list vault accounts");
        ApiError::vendor("get vault accounts", e)
    })?;

    Ok(Json(VaultAccountsPage {
        data: page,
        status_code: StatusCode::OK.as_u16(),
    }))
}

/// Look up one vault account.
#[utoipa::path(
    get,
    path = "/vault-accounts/{vault_account_id}",
    tag = "Vault Accounts",
    params(("vault_account_id" = String, Path, description = "Vault account ID")),
    responses(
        (status = 200, description = "Vault account", body = VaultAccountResponse),
        (status = 404, description = "Vault account not found", body = ErrorBody),
        (status = 500, description = "Fireblocks error", body = ErrorBody)
    )
)]
pub async fn get_vault_account(
    State(state): State<AppState>,
    Path(vault_account_id): Path<String>,
) -> Result<Json<VaultAccountResponse>, ApiError> {
    info!(vault_account_id = %vault_account_id, "Fetching vault account");

    let client = state
        .vaults
        .get_client()
        .await
        .map_err(|e| ApiError::vendor("get vault account", e))?;

    let account = client
        .get_vault_account(&vault_account_id)
        .await
        .map_err(|e| {
            if e.is_not_found() {
                return ApiError::not_found(format!(
                    "Vault account with ID '{vault_account_id}' not found"
                ));
            }
            error!(vault_account_id = %vault_account_id, error = %e, "Failed to fetch vault account");
            ApiError::vendor("get vault account", e)
        })?;

    Ok(Json(account.into()))
}

/// Create a vault account.
#[utoipa::path(
    post,
    path = "/vault-accounts",
    tag = "Vault Accounts",
    request_body = CreateVaultAccountRequest,
    responses(
        (status = 201, description = "Vault account created", body = VaultAccountResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Fireblocks error", body = ErrorBody)
    )
)]
pub async fn create_vault_account(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateVaultAccountRequest>,
) -> Result<(StatusCode, Json<VaultAccountResponse>), ApiError> {
    info!(name = %request.name, "Creating vault account");

    let client = state
        .vaults
        .get_client()
        .await
        .map_err(|e| ApiError::vendor("create vault account", e))?;

    let vendor_request = types::CreateVaultAccountRequest {
        name: request.name,
        hidden_on_ui: request.hidden_on_ui,
        auto_fuel: request.auto_fuel,
        customer_ref_id: None,
    };

    let account = client
        .create_vault_account(&vendor_request)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create vault account");
            ApiError::vendor("create vault account", e)
        })?;

    info!(vault_account_id = %account.id, "Vault account created");
    Ok((StatusCode::CREATED, Json(account.into())))
}
