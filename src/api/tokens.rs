// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Token issuance (tokenization).
//!
//! EVM networks deploy a contract from a template (`evm_params`); Stellar and
//! Ripple link an already issued asset (`stellar_ripple_params`).

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::{
    api::extract::ValidJson,
    error::{ApiError, ErrorBody},
    models::{CreateTokenRequest, TokenResponse},
    providers::fireblocks::types,
    state::AppState,
};

/// Issue a new token.
#[utoipa::path(
    post,
    path = "/tokens",
    tag = "Tokens",
    request_body = CreateTokenRequest,
    responses(
        (status = 201, description = "Token issuance requested", body = TokenResponse),
        (status = 400, description = "Missing or conflicting parameters", body = ErrorBody),
        (status = 500, description = "Fireblocks error", body = ErrorBody)
    )
)]
pub async fn issue_token(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateTokenRequest>,
) -> Result<(StatusCode, Json<TokenResponse>), ApiError> {
    let create_params = request.create_params()?;
    info!(
        vault_account_id = %request.vault_account_id,
        blockchain_id = ?request.blockchain_id,
        "Issuing token"
    );

    let sdk = state
        .sdk
        .get_client()
        .await
        .map_err(|e| ApiError::vendor("issue token", e))?;

    let vendor_request = types::CreateTokenRequest {
        vault_account_id: request.vault_account_id,
        create_params,
        asset_id: request.asset_id,
        blockchain_id: request.blockchain_id,
        display_name: request.display_name,
    };

    let issued = sdk.issue_new_token(&vendor_request).await.map_err(|e| {
        error!(vault_account_id = %vendor_request.vault_account_id, error = %e, "Failed to issue token");
        ApiError::vendor("issue token", e)
    })?;

    Ok((StatusCode::CREATED, Json(TokenResponse::from_vendor(issued))))
}
