// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # API Data Models
//!
//! Request and response bodies of the REST API. Requests implement
//! [`Validate`] and are checked by the extractors in [`crate::api::extract`]
//! before a handler runs. Responses are snake_case projections of Fireblocks
//! objects.
//!
//! ## Additional Data
//!
//! Responses built from legacy (untyped) Fireblocks objects carry an
//! `additional_data` map. [`VendorFields`] moves each modeled field out of the
//! vendor object and whatever remains becomes `additional_data`, so the bucket
//! never repeats a modeled field and never loses an unmodeled one. It exists
//! for forward compatibility, not as a substitute for modeling fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::ApiError,
    providers::fireblocks::{
        types::{
            CreateTokenParams, EvmTokenCreateParams, FeeLevel, PageQuery,
            PaginatedAddressResponse, ParameterWithValue, StellarRippleCreateParams,
            VaultAccount, VaultAccountsPagedResponse, VaultAccountsQuery, VaultAsset,
        },
        RawObject,
    },
};

/// Request-level validation beyond what deserialization enforces.
pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

fn require_non_empty(field: &str, value: &str) -> Result<(), ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}

// =============================================================================
// Health
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests.
    pub status: String,
    pub service: String,
    /// Crate version.
    pub version: String,
}

// =============================================================================
// Vault Accounts
// =============================================================================

/// Request body for creating a vault account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVaultAccountRequest {
    /// The name of the vault account.
    pub name: String,
    /// Whether to hide the vault account in the Fireblocks console.
    #[serde(default)]
    pub hidden_on_ui: bool,
    /// Whether to enable automatic fueling for the vault account.
    #[serde(default)]
    pub auto_fuel: bool,
}

impl Validate for CreateVaultAccountRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("name", &self.name)
    }
}

/// Asset balance inside a vault account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VaultAssetInAccount {
    /// Asset ID (e.g. BTC, ETH).
    pub id: String,
    /// Total balance, including pending and locked funds.
    pub total: Option<String>,
    /// Deprecated alias of `total`, still returned by Fireblocks.
    pub balance: Option<String>,
    /// Funds that can be transferred now.
    pub available: Option<String>,
    /// Incoming funds awaiting confirmation.
    pub pending: Option<String>,
    /// Funds frozen by AML policy.
    pub frozen: Option<String>,
    /// Funds locked by pending outgoing transactions.
    pub locked_amount: Option<String>,
    /// Staked balance.
    pub staked: Option<String>,
    /// EOS-style staking: total CPU stake.
    pub total_staked_cpu: Option<String>,
    /// EOS-style staking: total network stake.
    pub total_staked_network: Option<String>,
    pub self_staked_cpu: Option<String>,
    pub self_staked_network: Option<String>,
    pub pending_refund_cpu: Option<String>,
    pub pending_refund_network: Option<String>,
    /// Block height of the last balance update.
    pub block_height: Option<String>,
    /// Block hash of the last balance update.
    pub block_hash: Option<String>,
    /// Staking rewards as reported by Fireblocks.
    #[schema(value_type = Option<Object>)]
    pub rewards_info: Option<Value>,
}

impl From<VaultAsset> for VaultAssetInAccount {
    fn from(asset: VaultAsset) -> Self {
        Self {
            id: asset.id,
            total: asset.total,
            balance: asset.balance,
            available: asset.available,
            pending: asset.pending,
            frozen: asset.frozen,
            locked_amount: asset.locked_amount,
            staked: asset.staked,
            total_staked_cpu: asset.total_staked_cpu,
            total_staked_network: asset.total_staked_network,
            self_staked_cpu: asset.self_staked_cpu,
            self_staked_network: asset.self_staked_network,
            pending_refund_cpu: asset.pending_refund_cpu,
            pending_refund_network: asset.pending_refund_network,
            block_height: asset.block_height,
            block_hash: asset.block_hash,
            rewards_info: asset.rewards_info,
        }
    }
}

/// A vault account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VaultAccountResponse {
    /// Vault account ID.
    pub id: String,
    pub name: String,
    /// Whether the account is hidden in the Fireblocks console.
    pub hidden_on_ui: Option<bool>,
    /// Whether automatic fueling is enabled.
    pub auto_fuel: Option<bool>,
    /// Caller-assigned reference for AML/KYT screening.
    pub customer_ref_id: Option<String>,
    /// Asset balances held by the account. Absent when there are none.
    pub assets: Option<Vec<VaultAssetInAccount>>,
    /// Tags attached to the account, as returned by Fireblocks.
    #[schema(value_type = Option<Object>)]
    pub tags: Option<Value>,
}

impl From<VaultAccount> for VaultAccountResponse {
    fn from(account: VaultAccount) -> Self {
        // An empty asset list reads as "no assets".
        let assets = account
            .assets
            .filter(|assets| !assets.is_empty())
            .map(|assets| assets.into_iter().map(Into::into).collect());

        Self {
            id: account.id,
            name: account.name,
            hidden_on_ui: account.hidden_on_ui,
            auto_fuel: account.auto_fuel,
            customer_ref_id: account.customer_ref_id,
            assets,
            tags: account.tags,
        }
    }
}

/// One page of vault accounts, in Fireblocks field naming.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct VaultAccountsPage {
    #[schema(value_type = Object)]
    pub data: VaultAccountsPagedResponse,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

/// One page of deposit addresses, in Fireblocks field naming.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssetAddressesPage {
    #[schema(value_type = Object)]
    pub data: PaginatedAddressResponse,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
}

pub const DEFAULT_PAGE_LIMIT: u32 = 100;
pub const MAX_PAGE_LIMIT: u32 = 500;

fn default_page_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

/// An empty cursor (`?before=`) means no cursor.
fn cursor(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn check_page_limit(limit: u32) -> Result<(), ApiError> {
    if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(ApiError::validation(format!(
            "limit must be between 1 and {MAX_PAGE_LIMIT}"
        )));
    }
    Ok(())
}

/// Filters and cursors for listing vault accounts.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListVaultAccountsParams {
    pub name_prefix: Option<String>,
    pub name_suffix: Option<String>,
    pub min_amount_threshold: Option<f64>,
    pub asset_id: Option<String>,
    /// `ASC` or `DESC`.
    pub order_by: Option<String>,
    pub before: Option<String>,
    pub after: Option<String>,
    /// Page size, 1 to 500.
    #[serde(default = "default_page_limit")]
    #[param(minimum = 1, maximum = 500, default = 100)]
    pub limit: u32,
}

impl Validate for ListVaultAccountsParams {
    fn validate(&self) -> Result<(), ApiError> {
        check_page_limit(self.limit)
    }
}

impl From<ListVaultAccountsParams> for VaultAccountsQuery {
    fn from(params: ListVaultAccountsParams) -> Self {
        Self {
            name_prefix: params.name_prefix,
            name_suffix: params.name_suffix,
            min_amount_threshold: params.min_amount_threshold,
            asset_id: params.asset_id,
            order_by: params.order_by,
            before: cursor(params.before),
            after: cursor(params.after),
            limit: Some(params.limit),
        }
    }
}

/// Cursor pagination for address listing.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageParams {
    pub before: Option<String>,
    pub after: Option<String>,
    /// Page size, 1 to 500.
    #[serde(default = "default_page_limit")]
    #[param(minimum = 1, maximum = 500, default = 100)]
    pub limit: u32,
}

impl Validate for PageParams {
    fn validate(&self) -> Result<(), ApiError> {
        check_page_limit(self.limit)
    }
}

impl From<PageParams> for PageQuery {
    fn from(params: PageParams) -> Self {
        Self {
            before: cursor(params.before),
            after: cursor(params.after),
            limit: Some(params.limit),
        }
    }
}

// =============================================================================
// Vault Assets
// =============================================================================

/// Balance of one asset in a vault account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VaultAssetResponse {
    /// Asset ID; the requested one when Fireblocks omits it.
    pub id: String,
    /// Total balance, including pending and locked funds.
    pub total: Option<String>,
    /// Funds that can be transferred now.
    pub available: Option<String>,
    /// Incoming funds awaiting confirmation.
    pub pending: Option<String>,
    /// Funds frozen by AML policy.
    pub frozen: Option<String>,
    /// Funds locked by pending outgoing transactions.
    pub locked_amount: Option<String>,
    pub staked: Option<String>,
    /// Block height of the last balance update.
    pub block_height: Option<String>,
    pub block_hash: Option<String>,
    /// Fireblocks fields not listed above, under their original names.
    #[schema(value_type = Object)]
    pub additional_data: Map<String, Value>,
}

impl VaultAssetResponse {
    /// `asset_id` fills `id` when Fireblocks leaves it out.
    pub fn from_vendor(object: RawObject, asset_id: &str) -> Self {
        let mut fields = VendorFields::new(object);
        Self {
            id: fields.string("id").unwrap_or_else(|| asset_id.to_string()),
            total: fields.string("total"),
            available: fields.string("available"),
            pending: fields.string("pending"),
            frozen: fields.string("frozen"),
            locked_amount: fields.string("lockedAmount"),
            staked: fields.string("staked"),
            block_height: fields.string("blockHeight"),
            block_hash: fields.string("blockHash"),
            additional_data: fields.into_remaining(),
        }
    }
}

// =============================================================================
// Vault Wallets
// =============================================================================

/// Request body for creating an asset wallet in a vault account.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateVaultWalletRequest {
    /// The ID of the vault account.
    pub vault_account_id: String,
    /// The asset ID (e.g. BTC, ETH, SOL).
    pub asset_id: String,
}

impl Validate for CreateVaultWalletRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("vault_account_id", &self.vault_account_id)?;
        require_non_empty("asset_id", &self.asset_id)
    }
}

/// Deposit address of a newly created asset wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VaultWalletResponse {
    /// The vault account ID.
    pub id: String,
    /// Deposit address of the new wallet.
    pub address: Option<String>,
    /// Legacy address format, for blockchains that have one.
    pub legacy_address: Option<String>,
    /// Tag or memo, for assets that need one.
    pub tag: Option<String>,
}

impl VaultWalletResponse {
    pub fn from_vendor(object: RawObject, vault_account_id: &str) -> Self {
        let mut fields = VendorFields::new(object);
        Self {
            id: fields
                .string("id")
                .unwrap_or_else(|| vault_account_id.to_string()),
            address: fields.string("address"),
            legacy_address: fields.string("legacyAddress"),
            tag: fields.string("tag"),
        }
    }
}

// =============================================================================
// Transactions
// =============================================================================

/// Request body for a transfer between two vault accounts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTransactionRequest {
    /// The asset to transfer (e.g. BTC, ETH, SOL).
    pub asset_id: String,
    pub source_vault_account_id: String,
    pub destination_vault_account_id: String,
    /// Decimal amount, as a string.
    pub amount: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<String>, example = "MEDIUM")]
    pub fee_level: Option<FeeLevel>,
}

impl Validate for CreateTransactionRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("asset_id", &self.asset_id)?;
        require_non_empty("source_vault_account_id", &self.source_vault_account_id)?;
        require_non_empty(
            "destination_vault_account_id",
            &self.destination_vault_account_id,
        )?;
        require_non_empty("amount", &self.amount)
    }
}

/// A transaction as reported by Fireblocks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TransactionResponse {
    /// Fireblocks transaction ID.
    pub id: Option<String>,
    /// Processing status, e.g. `SUBMITTED`, `COMPLETED`.
    pub status: Option<String>,
    pub asset_id: Option<String>,
    /// Requested amount, as Fireblocks reports it.
    #[schema(value_type = Option<Object>)]
    pub amount: Option<Value>,
    /// Source peer, e.g. `{"type": "VAULT_ACCOUNT", "id": "0"}`.
    #[schema(value_type = Option<Object>)]
    pub source: Option<Value>,
    /// Destination peer, same shape as `source`.
    #[schema(value_type = Option<Object>)]
    pub destination: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub fee: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub network_fee: Option<Value>,
    /// Creation time in milliseconds since the Unix epoch.
    #[schema(value_type = Option<Object>)]
    pub created_at: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub last_updated: Option<Value>,
    /// On-chain hash, once broadcast.
    pub tx_hash: Option<String>,
    /// Detail for failed or rejected transactions.
    pub sub_status: Option<String>,
    /// Fireblocks fields not listed above, under their original names.
    #[schema(value_type = Object)]
    pub additional_data: Map<String, Value>,
}

impl TransactionResponse {
    pub fn from_vendor(object: RawObject) -> Self {
        let mut fields = VendorFields::new(object);
        Self {
            id: fields.string("id"),
            status: fields.string("status"),
            asset_id: fields.string("assetId"),
            amount: fields.value("amount"),
            source: fields.value("source"),
            destination: fields.value("destination"),
            fee: fields.value("fee"),
            network_fee: fields.value("networkFee"),
            created_at: fields.value("createdAt"),
            last_updated: fields.value("lastUpdated"),
            tx_hash: fields.string("txHash"),
            sub_status: fields.string("subStatus"),
            additional_data: fields.into_remaining(),
        }
    }
}

// =============================================================================
// Tokens
// =============================================================================

/// Constructor argument for an EVM token contract.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeployFunctionParam {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub internal_type: String,
    #[schema(value_type = Object)]
    pub value: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parameters for EVM networks: deploys a contract template.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvmParams {
    pub contract_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deploy_function_params: Option<Vec<DeployFunctionParam>>,
}

/// Parameters for Stellar and Ripple: links an issued token, no deployment.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StellarRippleParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Request body for token issuance. Exactly one of `evm_params` and
/// `stellar_ripple_params` must be set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateTokenRequest {
    pub vault_account_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_id: Option<String>,
    /// e.g. `ETHEREUM`, `POLYGON`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blockchain_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evm_params: Option<EvmParams>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stellar_ripple_params: Option<StellarRippleParams>,
}

impl CreateTokenRequest {
    /// The `createParams` shape for Fireblocks, or 400 unless exactly one
    /// parameter group is present.
    pub fn create_params(&self) -> Result<CreateTokenParams, ApiError> {
        match (&self.evm_params, &self.stellar_ripple_params) {
            (None, None) => Err(ApiError::bad_request(
                "Either evm_params or stellar_ripple_params must be provided",
            )),
            (Some(_), Some(_)) => Err(ApiError::bad_request(
                "Only one of evm_params or stellar_ripple_params should be provided",
            )),
            (Some(evm), None) => Ok(CreateTokenParams::Evm(EvmTokenCreateParams {
                contract_id: evm.contract_id.clone(),
                deploy_function_params: evm.deploy_function_params.as_ref().map(|params| {
                    params
                        .iter()
                        .map(|param| ParameterWithValue {
                            name: param.name.clone(),
                            param_type: param.param_type.clone(),
                            internal_type: param.internal_type.clone(),
                            value: param.value.clone(),
                            function_value: None,
                            description: param.description.clone(),
                        })
                        .collect()
                }),
            })),
            (None, Some(stellar)) => Ok(CreateTokenParams::StellarRipple(
                StellarRippleCreateParams {
                    issuer_address: stellar.issuer_address.clone(),
                    symbol: stellar.symbol.clone(),
                    name: stellar.name.clone(),
                },
            )),
        }
    }
}

impl Validate for CreateTokenRequest {
    fn validate(&self) -> Result<(), ApiError> {
        require_non_empty("vault_account_id", &self.vault_account_id)?;
        if let Some(evm) = &self.evm_params {
            require_non_empty("evm_params.contract_id", &evm.contract_id)?;
        }
        Ok(())
    }
}

/// Result of a token issuance request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    /// Token link ID.
    pub id: Option<String>,
    /// Issuance status, e.g. `PENDING`, `COMPLETED`.
    pub status: Option<String>,
    /// Asset ID assigned to the token.
    pub asset_id: Option<String>,
    pub blockchain_id: Option<String>,
    /// Vault account that deployed or linked the token.
    pub vault_account_id: Option<String>,
    /// Fireblocks fields not listed above, under their original names.
    #[schema(value_type = Object)]
    pub additional_data: Map<String, Value>,
}

impl TokenResponse {
    pub fn from_vendor(object: RawObject) -> Self {
        let mut fields = VendorFields::new(object);
        Self {
            id: fields.string("id"),
            status: fields.string("status"),
            asset_id: fields.string("assetId"),
            blockchain_id: fields.string("blockchainId"),
            vault_account_id: fields.string("vaultAccountId"),
            additional_data: fields.into_remaining(),
        }
    }
}

// =============================================================================
// Vendor field projection
// =============================================================================

/// Moves named fields out of a vendor object; the rest is `additional_data`.
pub struct VendorFields {
    object: RawObject,
}

impl VendorFields {
    pub fn new(object: RawObject) -> Self {
        Self { object }
    }

    /// Take a field as JSON. A JSON `null` reads as absent.
    pub fn value(&mut self, key: &str) -> Option<Value> {
        self.object.remove(key).filter(|v| !v.is_null())
    }

    /// Take a field as a string. Numbers and booleans are rendered as text;
    /// objects and arrays are kept whole (as their JSON text).
    pub fn string(&mut self, key: &str) -> Option<String> {
        self.value(key).map(|value| match value {
            Value::String(s) => s,
            other => other.to_string(),
        })
    }

    pub fn into_remaining(self) -> Map<String, Value> {
        self.object
    }
}
