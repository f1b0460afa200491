// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Typed Fireblocks client (current API generation).

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{
    signer::RequestSigner,
    transport::Transport,
    types::{
        CreateVaultAccountRequest, PageQuery, PaginatedAddressResponse, VaultAccount,
        VaultAccountsPagedResponse, VaultAccountsQuery,
    },
    FireblocksError,
};
use crate::config::FireblocksConfig;

const USER_AGENT: &str = concat!("fireblocks-service/", env!("CARGO_PKG_VERSION"), " (typed)");

/// Vault operations served by the typed client.
#[async_trait]
pub trait VaultsApi: Send + Sync {
    async fn get_paged_vault_accounts(
        &self,
        query: &VaultAccountsQuery,
    ) -> Result<VaultAccountsPagedResponse, FireblocksError>;

    async fn get_vault_account(&self, vault_account_id: &str)
        -> Result<VaultAccount, FireblocksError>;

    async fn create_vault_account(
        &self,
        request: &CreateVaultAccountRequest,
    ) -> Result<VaultAccount, FireblocksError>;

    async fn get_vault_account_asset_addresses_paginated(
        &self,
        vault_account_id: &str,
        asset_id: &str,
        query: &PageQuery,
    ) -> Result<PaginatedAddressResponse, FireblocksError>;
}

#[derive(Debug, Clone)]
pub struct FireblocksClient {
    transport: Transport,
}

impl FireblocksClient {
    /// Build the client from configuration, reading the private key from disk.
    pub fn from_config(config: &FireblocksConfig) -> Result<Self, FireblocksError> {
        let secret_key = config.load_secret()?;
        Self::new(config, &secret_key)
    }

    pub fn new(config: &FireblocksConfig, secret_key: &str) -> Result<Self, FireblocksError> {
        let signer = RequestSigner::new(config.api_key.clone(), secret_key)?;
        let base_url = format!("{}/v1", config.base_path.host());
        let transport = Transport::new(&base_url, signer, config.timeout, USER_AGENT)?;
        Ok(Self { transport })
    }
}

#[async_trait]
impl VaultsApi for FireblocksClient {
    async fn get_paged_vault_accounts(
        &self,
        query: &VaultAccountsQuery,
    ) -> Result<VaultAccountsPagedResponse, FireblocksError> {
        let value = self
            .transport
            .get(&["vault", "accounts_paged"], &query.to_query_pairs())
            .await?;
        parse("vault accounts page", value)
    }

    async fn get_vault_account(
        &self,
        vault_account_id: &str,
    ) -> Result<VaultAccount, FireblocksError> {
        let value = self
            .transport
            .get(&["vault", "accounts", vault_account_id], &[])
            .await?;
        parse("vault account", value)
    }

    async fn create_vault_account(
        &self,
        request: &CreateVaultAccountRequest,
    ) -> Result<VaultAccount, FireblocksError> {
        let value = self.transport.post(&["vault", "accounts"], request).await?;
        parse("vault account", value)
    }

    async fn get_vault_account_asset_addresses_paginated(
        &self,
        vault_account_id: &str,
        asset_id: &str,
        query: &PageQuery,
    ) -> Result<PaginatedAddressResponse, FireblocksError> {
        let value = self
            .transport
            .get(
                &["vault", "accounts", vault_account_id, asset_id, "addresses_paginated"],
                &query.to_query_pairs(),
            )
            .await?;
        parse("address page", value)
    }
}

fn parse<T: DeserializeOwned>(what: &str, value: Value) -> Result<T, FireblocksError> {
    serde_json::from_value(value)
        .map_err(|e| FireblocksError::InvalidResponse(format!("unexpected {what} shape: {e}")))
}
