// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Client lifecycle management.
//!
//! A [`ClientManager`] owns at most one shared client handle. The first
//! [`ClientManager::get_client`] call builds it through the factory; later
//! calls hand out the same `Arc`. Construction happens under the write lock,
//! so concurrent first calls build exactly one handle.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::info;

use super::{FireblocksClient, FireblocksError, FireblocksSdk, LegacySdkApi, VaultsApi};
use crate::config::FireblocksConfig;

type Factory<C> = Box<dyn Fn() -> Result<Arc<C>, FireblocksError> + Send + Sync>;

pub struct ClientManager<C: ?Sized> {
    name: &'static str,
    factory: Factory<C>,
    client: RwLock<Option<Arc<C>>>,
}

impl<C: ?Sized + Send + Sync> ClientManager<C> {
    pub fn new<F>(name: &'static str, factory: F) -> Self
    where
        F: Fn() -> Result<Arc<C>, FireblocksError> + Send + Sync + 'static,
    {
        Self {
            name,
            factory: Box::new(factory),
            client: RwLock::new(None),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the shared client, constructing it on first use.
    pub async fn get_client(&self) -> Result<Arc<C>, FireblocksError> {
        if let Some(client) = self.client.read().await.as_ref() {
            return Ok(Arc::clone(client));
        }

        let mut slot = self.client.write().await;
        // Another caller may have built it while we waited for the lock.
        if let Some(client) = slot.as_ref() {
            return Ok(Arc::clone(client));
        }

        let client = (self.factory)()?;
        info!(client = self.name, "Fireblocks client initialized");
        *slot = Some(Arc::clone(&client));
        Ok(client)
    }

    /// Release the handle, if any. The next `get_client` builds a new one.
    pub async fn close_client(&self) {
        if self.client.write().await.take().is_some() {
            info!(client = self.name, "Fireblocks client closed");
        }
    }

    pub async fn is_initialized(&self) -> bool {
        self.client.read().await.is_some()
    }
}

/// Manager for the typed client, built from `config` on first use.
pub fn vaults_manager(config: FireblocksConfig) -> ClientManager<dyn VaultsApi> {
    ClientManager::new("fireblocks", move || {
        let client = FireblocksClient::from_config(&config)?;
        Ok(Arc::new(client) as Arc<dyn VaultsApi>)
    })
}

/// Manager for the legacy client, built from `config` on first use.
pub fn sdk_manager(config: FireblocksConfig) -> ClientManager<dyn LegacySdkApi> {
    ClientManager::new("fireblocks-sdk", move || {
        let client = FireblocksSdk::from_config(&config)?;
        Ok(Arc::new(client) as Arc<dyn LegacySdkApi>)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BasePath, ConfigError};
    use std::{
        io::Write,
        sync::atomic::{AtomicUsize, Ordering},
        time::Duration,
    };

    fn counting_manager(counter: Arc<AtomicUsize>) -> ClientManager<String> {
        ClientManager::new("test", move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(format!("client-{n}")))
        })
    }

    #[tokio::test]
    async fn get_client_returns_same_instance() {
        let counter = Arc::new(AtomicUsize::new(0));
        let manager = counting_manager(counter.clone());

        let first = manager.get_client().await.unwrap();
        let second = manager.get_client().await.unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(manager.is_initialized().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_calls_construct_once() {
        let counter = Arc::new(AtomicUsize::new(0));
        let manager = Arc::new(counting_manager(counter.clone()));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let manager = manager.clone();
                tokio::spawn(async move { manager.get_client().await.unwrap() })
            })
            .collect();

        let mut clients = Vec::new();
        for handle in handles {
            clients.push(handle.await.unwrap());
        }

        assert_eq!(counter.load(Ordering::SeqCst), 1);
        assert!(clients.iter().all(|c| Arc::ptr_eq(c, &clients[0])));
    }

    #[tokio::test]
    async fn close_resets_and_next_call_rebuilds() {
        let counter = Arc::new(AtomicUsize::new(0));
        let manager = counting_manager(counter.clone());

        let first = manager.get_client().await.unwrap();
        manager.close_client().await;
        assert!(!manager.is_initialized().await);

        let second = manager.get_client().await.unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(*second, "client-1");
    }

    #[tokio::test]
    async fn close_on_uninitialized_manager_is_noop() {
        let manager = counting_manager(Arc::new(AtomicUsize::new(0)));
        manager.close_client().await;
        manager.close_client().await;
        assert!(!manager.is_initialized().await);
    }

    #[tokio::test]
    async fn construction_failure_propagates_and_leaves_manager_empty() {
        let manager: ClientManager<String> = ClientManager::new("broken", || {
            Err(FireblocksError::Config(ConfigError::MissingVar(
                "FIREBLOCKS_SECRET_KEY_PATH",
            )))
        });

        let err = manager.get_client().await.unwrap_err();
        assert!(err.to_string().contains("FIREBLOCKS_SECRET_KEY_PATH"));
        assert!(!manager.is_initialized().await);
    }

    #[tokio::test]
    async fn real_managers_build_from_secret_file() {
        let mut key = tempfile::NamedTempFile::new().unwrap();
        write!(key, "{}", crate::providers::fireblocks::signer::tests::TEST_PRIVATE_KEY).unwrap();

        let config = FireblocksConfig {
            api_key: "api-key".into(),
            secret_key_path: Some(key.path().to_path_buf()),
            base_path: BasePath::Sandbox,
            timeout: Duration::from_secs(5),
        };

        let vaults = vaults_manager(config.clone());
        let sdk = sdk_manager(config);
        assert!(vaults.get_client().await.is_ok());
        assert!(sdk.get_client().await.is_ok());
        assert_eq!(vaults.name(), "fireblocks");
        assert_eq!(sdk.name(), "fireblocks-sdk");
    }
}
