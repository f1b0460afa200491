// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Legacy Fireblocks client.
//!
//! Mirrors the older SDK surface: responses come back as untyped JSON objects
//! and callers pick out the fields they need.

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::{
    signer::RequestSigner,
    transport::Transport,
    types::{CreateTokenRequest, TransactionRequest},
    FireblocksError,
};
use crate::config::FireblocksConfig;

const USER_AGENT: &str = concat!("fireblocks-service/", env!("CARGO_PKG_VERSION"), " (sdk)");

/// A JSON object exactly as Fireblocks returned it.
pub type RawObject = Map<String, Value>;

#[async_trait]
pub trait LegacySdkApi: Send + Sync {
    /// Create (activate) an asset wallet inside a vault account.
    async fn create_vault_asset(
        &self,
        vault_account_id: &str,
        asset_id: &str,
    ) -> Result<RawObject, FireblocksError>;

    async fn get_vault_account_asset(
        &self,
        vault_account_id: &str,
        asset_id: &str,
    ) -> Result<RawObject, FireblocksError>;

    async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<RawObject, FireblocksError>;

    async fn issue_new_token(&self, request: &CreateTokenRequest)
        -> Result<RawObject, FireblocksError>;
}

#[derive(Debug, Clone)]
pub struct FireblocksSdk {
    transport: Transport,
}

impl FireblocksSdk {
    pub fn from_config(config: &FireblocksConfig) -> Result<Self, FireblocksError> {
        let private_key = config.load_secret()?;
        Self::new(config, &private_key)
    }

    pub fn new(config: &FireblocksConfig, private_key: &str) -> Result<Self, FireblocksError> {
        let signer = RequestSigner::new(config.api_key.clone(), private_key)?;
        let transport = Transport::new(config.base_path.host(), signer, config.timeout, USER_AGENT)?;
        Ok(Self { transport })
    }
}

#[async_trait]
impl LegacySdkApi for FireblocksSdk {
    async fn create_vault_asset(
        &self,
        vault_account_id: &str,
        asset_id: &str,
    ) -> Result<RawObject, FireblocksError> {
        let value = self
            .transport
            .post(
                &["v1", "vault", "accounts", vault_account_id, asset_id],
                &Map::new(),
            )
            .await?;
        into_object(value)
    }

    async fn get_vault_account_asset(
        &self,
        vault_account_id: &str,
        asset_id: &str,
    ) -> Result<RawObject, FireblocksError> {
        let value = self
            .transport
            .get(&["v1", "vault", "accounts", vault_account_id, asset_id], &[])
            .await?;
        into_object(value)
    }

    async fn create_transaction(
        &self,
        request: &TransactionRequest,
    ) -> Result<RawObject, FireblocksError> {
        let value = self.transport.post(&["v1", "transactions"], request).await?;
        into_object(value)
    }

    async fn issue_new_token(
        &self,
        request: &CreateTokenRequest,
    ) -> Result<RawObject, FireblocksError> {
        let value = self
            .transport
            .post(&["v1", "tokenization", "tokens"], request)
            .await?;
        into_object(value)
    }
}

fn into_object(value: Value) -> Result<RawObject, FireblocksError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(FireblocksError::InvalidResponse(format!(
            "expected a JSON object, got {other}"
        ))),
    }
}
