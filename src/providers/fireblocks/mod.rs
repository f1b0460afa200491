// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! # Fireblocks Integration
//!
//! Two client generations talk to the same REST API:
//!
//! - [`FireblocksClient`] returns typed models ([`VaultsApi`]). Its base path
//!   already ends in `/v1`. Used for vault accounts and address listing.
//! - [`FireblocksSdk`] returns raw JSON objects ([`LegacySdkApi`]) and adds the
//!   `/v1` prefix per call. Used for wallets, balances, transfers and tokens.
//!
//! Both sign every request through [`signer::RequestSigner`] and share the
//! [`transport::Transport`]. Each is held by a [`ClientManager`] that builds
//! the handle once and can release it at shutdown.

pub mod client;
pub mod manager;
pub mod sdk;
pub mod signer;
pub mod transport;
pub mod types;

#[cfg(test)]
pub(crate) mod fake_vendor;
#[cfg(test)]
pub(crate) mod mock;

pub use client::{FireblocksClient, VaultsApi};
pub use manager::ClientManager;
pub use sdk::{FireblocksSdk, LegacySdkApi, RawObject};

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum FireblocksError {
    #[error("Fireblocks configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fireblocks request signing failed: {0}")]
    Signing(String),

    #[error("Fireblocks request failed: {0}")]
    Transport(String),

    #[error("Fireblocks API returned {status}: {message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    #[error("Fireblocks response was invalid: {0}")]
    InvalidResponse(String),
}

impl FireblocksError {
    /// True when Fireblocks answered with HTTP 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FireblocksError::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_vendor_404_counts_as_not_found() {
        let not_found = FireblocksError::Api {
            status: 404,
            code: None,
            message: "Vault account not found".into(),
        };
        assert!(not_found.is_not_found());

        let bad_request = FireblocksError::Api {
            status: 400,
            code: Some(1003),
            message: "not found in whitelist".into(),
        };
        assert!(!bad_request.is_not_found());

        assert!(!FireblocksError::Transport("404 page".into()).is_not_found());
    }
}
