// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fireblocks wire types.
//!
//! Field names follow the Fireblocks REST API (camelCase). Read models keep
//! unknown fields in a flattened `extra` map so nothing the vendor sends is
//! dropped when a page is relayed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// Vault accounts (typed client)
// =============================================================================

/// Body of `POST /v1/vault/accounts`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVaultAccountRequest {
    pub name: String,
    #[serde(rename = "hiddenOnUI")]
    pub hidden_on_ui: bool,
    pub auto_fuel: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_ref_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAccount {
    pub id: String,
    pub name: String,
    #[serde(rename = "hiddenOnUI", default, skip_serializing_if = "Option::is_none")]
    pub hidden_on_ui: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_fuel: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets: Option<Vec<VaultAsset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Asset balance as embedded in a vault account.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAsset {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frozen: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staked: Option<String>,
    #[serde(rename = "totalStakedCPU", default, skip_serializing_if = "Option::is_none")]
    pub total_staked_cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_staked_network: Option<String>,
    #[serde(rename = "selfStakedCPU", default, skip_serializing_if = "Option::is_none")]
    pub self_staked_cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_staked_network: Option<String>,
    #[serde(rename = "pendingRefundCPU", default, skip_serializing_if = "Option::is_none")]
    pub pending_refund_cpu: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_refund_network: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_height: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rewards_info: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Cursor pair returned by paginated endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paging {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAccountsPagedResponse {
    #[serde(default)]
    pub accounts: Vec<VaultAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
}

/// Filters for `GET /v1/vault/accounts_paged`. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VaultAccountsQuery {
    pub name_prefix: Option<String>,
    pub name_suffix: Option<String>,
    pub min_amount_threshold: Option<f64>,
    pub asset_id: Option<String>,
    pub order_by: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub limit: Option<u32>,
}

impl VaultAccountsQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_some(&mut pairs, "namePrefix", self.name_prefix.as_ref());
        push_some(&mut pairs, "nameSuffix", self.name_suffix.as_ref());
        push_some(&mut pairs, "minAmountThreshold", self.min_amount_threshold.as_ref());
        push_some(&mut pairs, "assetId", self.asset_id.as_ref());
        push_some(&mut pairs, "orderBy", self.order_by.as_ref());
        push_some(&mut pairs, "before", self.before.as_ref());
        push_some(&mut pairs, "after", self.after.as_ref());
        push_some(&mut pairs, "limit", self.limit.as_ref());
        pairs
    }
}

/// Cursor pagination for address listing. `None` fields are not sent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageQuery {
    pub before: Option<String>,
    pub after: Option<String>,
    pub limit: Option<u32>,
}

impl PageQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        push_some(&mut pairs, "before", self.before.as_ref());
        push_some(&mut pairs, "after", self.after.as_ref());
        push_some(&mut pairs, "limit", self.limit.as_ref());
        pairs
    }
}

fn push_some<T: ToString>(pairs: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<&T>) {
    if let Some(value) = value {
        pairs.push((key, value.to_string()));
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultWalletAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub address_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_ref_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legacy_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enterprise_address: Option<String>,
    #[serde(rename = "bip44AddressIndex", default, skip_serializing_if = "Option::is_none")]
    pub bip44_address_index: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_defined: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaginatedAddressResponse {
    #[serde(default)]
    pub addresses: Vec<VaultWalletAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paging: Option<Paging>,
}

// =============================================================================
// Transactions (legacy client)
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PeerType {
    VaultAccount,
}

/// Source or destination of a transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferPeerPath {
    #[serde(rename = "type")]
    pub peer_type: PeerType,
    pub id: String,
}

impl TransferPeerPath {
    pub fn vault_account(id: impl Into<String>) -> Self {
        Self {
            peer_type: PeerType::VaultAccount,
            id: id.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionOperation {
    Transfer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeeLevel {
    High,
    Medium,
    Low,
}

/// Body of `POST /v1/transactions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub asset_id: String,
    pub amount: String,
    pub source: TransferPeerPath,
    pub destination: TransferPeerPath,
    pub operation: TransactionOperation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_level: Option<FeeLevel>,
}

// =============================================================================
// Tokenization (legacy client)
// =============================================================================

/// Constructor argument for an EVM contract template deployment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterWithValue {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub internal_type: String,
    pub value: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvmTokenCreateParams {
    pub contract_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_function_params: Option<Vec<ParameterWithValue>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StellarRippleCreateParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// The two mutually exclusive `createParams` shapes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CreateTokenParams {
    Evm(EvmTokenCreateParams),
    StellarRipple(StellarRippleCreateParams),
}

/// Body of `POST /v1/tokenization/tokens`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTokenRequest {
    pub vault_account_id: String,
    pub create_params: CreateTokenParams,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blockchain_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
