// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Transfers between vault accounts.

use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::{
    api::extract::ValidJson,
    error::{ApiError, ErrorBody},
    models::{CreateTransactionRequest, TransactionResponse},
    providers::fireblocks::types::{TransactionOperation, TransactionRequest, TransferPeerPath},
    state::AppState,
};

/// Submit a transfer from one vault account to another.
///
/// Fireblocks processes the transfer asynchronously; the response carries the
/// initial status (usually `SUBMITTED`).
#[utoipa::path(
    post,
    path = "/transactions",
    tag = "Transactions",
    request_body = CreateTransactionRequest,
    responses(
        (status = 201, description = "Transaction submitted", body = TransactionResponse),
        (status = 400, description = "Invalid request", body = ErrorBody),
        (status = 500, description = "Fireblocks error", body = ErrorBody)
    )
)]
pub async fn create_transaction(
    State(state): State<AppState>,
    ValidJson(request): ValidJson<CreateTransactionRequest>,
) -> Result<(StatusCode, Json<TransactionResponse>), ApiError> {
    info!(
        asset_id = %request.asset_id,
        source = %request.source_vault_account_id,
        destination = %request.destination_vault_account_id,
        amount = %request.amount,
        "Creating transaction"
    );

    let sdk = state
        .sdk
        .get_client()
        .await
        .map_err(|e| ApiError::vendor("create transaction", e))?;

    let vendor_request = TransactionRequest {
        asset_id: request.asset_id,
        amount: request.amount,
        source: TransferPeerPath::vault_account(request.source_vault_account_id),
        destination: TransferPeerPath::vault_account(request.destination_vault_account_id),
        operation: TransactionOperation::Transfer,
        note: request.note,
        fee_level: request.fee_level,
    };

    let created = sdk.create_transaction(&vendor_request).await.map_err(|e| {
        error!(error = %e, "Failed to create transaction");
        ApiError::vendor("create transaction", e)
    })?;

    let response = TransactionResponse::from_vendor(created);
    info!(transaction_id = ?response.id, status = ?response.status, "Transaction submitted");
    Ok((StatusCode::CREATED, Json(response)))
}
