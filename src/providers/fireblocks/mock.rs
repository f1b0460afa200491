// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! In-process stand-in for both client generations, used by handler tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use super::{
    types::{
        CreateTokenRequest, CreateVaultAccountRequest, PageQuery, PaginatedAddressResponse,
        TransactionRequest, VaultAccount, VaultAccountsPagedResponse, VaultAccountsQuery,
    },
    ClientManager, FireblocksError, LegacySdkApi, RawObject, VaultsApi,
};

#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    GetPagedVaultAccounts(VaultAccountsQuery),
    GetVaultAccount(String),
    CreateVaultAccount(CreateVaultAccountRequest),
    GetAssetAddresses {
        vault_account_id: String,
        asset_id: String,
        query: PageQuery,
    },
    CreateVaultAsset {
        vault_account_id: String,
        asset_id: String,
    },
    GetVaultAccountAsset {
        vault_account_id: String,
        asset_id: String,
    },
    CreateTransaction(TransactionRequest),
    IssueNewToken(CreateTokenRequest),
}

/// Records every call. Answers with the canned response if one is set,
/// otherwise with a minimal per-method default. A configured failure wins.
#[derive(Default)]
pub struct MockFireblocks {
    calls: Mutex<Vec<MockCall>>,
    response: Mutex<Option<Value>>,
    failure: Mutex<Option<(u16, String)>>,
}

impl MockFireblocks {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn respond_with(self: &Arc<Self>, value: Value) -> Arc<Self> {
        *self.response.lock().unwrap() = Some(value);
        Arc::clone(self)
    }

    pub fn fail_with(self: &Arc<Self>, status: u16, message: &str) -> Arc<Self> {
        *self.failure.lock().unwrap() = Some((status, message.to_string()));
        Arc::clone(self)
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: MockCall, default: Value) -> Result<Value, FireblocksError> {
        self.calls.lock().unwrap().push(call);
        if let Some((status, message)) = self.failure.lock().unwrap().clone() {
            return Err(FireblocksError::Api {
                status,
                code: None,
                message,
            });
        }
        Ok(self.response.lock().unwrap().clone().unwrap_or(default))
    }

    fn typed<T: serde::de::DeserializeOwned>(
        &self,
        call: MockCall,
        default: Value,
    ) -> Result<T, FireblocksError> {
        let value = self.answer(call, default)?;
        serde_json::from_value(value).map_err(|e| FireblocksError::InvalidResponse(e.to_string()))
    }

    fn raw(&self, call: MockCall, default: Value) -> Result<RawObject, FireblocksError> {
        match self.answer(call, default)? {
            Value::Object(map) => Ok(map),
            other => Err(FireblocksError::InvalidResponse(other.to_string())),
        }
    }

    /// Managers preloaded with this mock for both generations.
    pub fn managers(
        self: &Arc<Self>,
    ) -> (ClientManager<dyn VaultsApi>, ClientManager<dyn LegacySdkApi>) {
        let vaults = Arc::clone(self);
        let sdk = Arc::clone(self);
        (
            ClientManager::new("mock", move || Ok(vaults.clone() as Arc<dyn VaultsApi>)),
            ClientManager::new("mock-sdk", move || Ok(sdk.clone() as Arc<dyn LegacySdkApi>)),
        )
    }
}

#[async_trait]
impl VaultsApi for MockFireblocks {
    async fn get_paged_vault_accounts(
        &self,
        query: &VaultAccountsQuery,
    ) -> Result<VaultAccountsPagedResponse, FireblocksError> {
        self.typed(
            MockCall::GetPagedVaultAccounts(query.clone()),
            json!({ "accounts": [], "paging": {} }),
        )
    }

    async fn get_vault_account(
        &self,
        vault_account_id: &str,
    ) -> Result<VaultAccount, FireblocksError> {
        self.typed(
            MockCall::GetVaultAccount(vault_account_id.to_string()),
            json!({ "id": vault_account_id, "name": "mock" }),
        )
    }

    async fn create_vault_account(
        &self,
        request: &CreateVaultAccountRequest,
    ) -> Result<VaultAccount, FireblocksError> {
        self.typed(
            MockCall::CreateVaultAccount(request.clone()),
            json!({
                "id": "42",
                "name": request.name,
                "hiddenOnUI": request.hidden_on_ui,
                "autoFuel": request.auto_fuel,
                "assets": []
            }),
        )
    }

    async fn get_vault_account_asset_addresses_paginated(
        &self,
        vault_account_id: &str,
        asset_id: &str,
        query: &PageQuery,
    ) -> Result<PaginatedAddressResponse, FireblocksError> {
        self.typed(
            MockCall::GetAssetAddresses {
                vault_account_id: vault_account_id.to_string(),
                asset_id: asset_id.to_string(),
                query: query.clone(),
            },
            json!({ "addresses": [] }),
        )
    }
}

#[async_trait]
impl LegacySdkApi for MockFireblocks {
    async fn create_vault_asset(
        &self,
        vault_account_id: &str,
        asset_id: &str,
    ) -> Result<RawObject, FireblocksError> {
        self.raw(
            MockCall::CreateVaultAsset {
                vault_account_id: vault_account_id.to_string(),
                asset_id: asset_id.to_string(),
            },
            json!({ "address": "0xmock" }),
        )
    }

    async fn get_vault_account_asset(
        &self,
        vault_account_id: &str,
        asset_id: &str,
    ) -> Result<RawObject, FireblocksError> {
        self.raw(
            MockCall::GetVaultAccountAsset {
                vault_account_id: vault_account_id.to_string(),
                asset_id: asset_id.to_string(),
            },
            json!({ "total": "0" }),
        )
    }

    async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<RawObject, FireblocksError> {
        self.raw(
            MockCall::CreateTransaction(request.clone()),
            json!({ "id": "tx-1", "status": "SUBMITTED" }),
        )
    }

    async fn issue_new_token(
        &self,
        request: &CreateTokenRequest,
    ) -> Result<RawObject, FireblocksError> {
        self.raw(
            MockCall::IssueNewToken(request.clone()),
            json!({ "id": "tok-1", "status": "PENDING" }),
        )
    }
}
