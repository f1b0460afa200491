// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Fireblocks Service - REST façade over the Fireblocks custody platform
//!
//! Exposes a small internal API for vault accounts, asset wallets, balances,
//! deposit addresses, vault-to-vault transfers and token issuance. Each route
//! validates its input, makes one signed call to Fireblocks and returns a
//! normalized snake_case response.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum) and the OpenAPI document
//! - `config` - Environment configuration and logging setup
//! - `providers::fireblocks` - Request signing, the two client generations and their lifecycle managers
//! - `server` - Listener, optional TLS and graceful shutdown

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod providers;
pub mod server;
pub mod state;
