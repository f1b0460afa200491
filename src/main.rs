// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

use std::process::ExitCode;

use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use fireblocks_service::{
    api::router,
    config::{self, FireblocksConfig, ServerConfig},
    providers::fireblocks::manager::{sdk_manager, vaults_manager},
    server,
    state::AppState,
};

#[tokio::main]
async fn main() -> ExitCode {
    config::load_dotenv();
    config::init_tracing();

    // Install the ring crypto provider for rustls (must be done before any TLS operations)
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        error!("Failed to install rustls crypto provider");
        return ExitCode::FAILURE;
    }

    let fireblocks = match FireblocksConfig::from_env().and_then(|c| c.validate().map(|_| c)) {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid Fireblocks configuration");
            return ExitCode::FAILURE;
        }
    };
    let server_config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid server configuration");
            return ExitCode::FAILURE;
        }
    };

    let state = AppState::new(vaults_manager(fireblocks.clone()), sdk_manager(fireblocks));

    // Build both clients before accepting traffic.
    if let Err(e) = state.vaults.get_client().await {
        error!(client = state.vaults.name(), error = %e, "Failed to initialize Fireblocks client");
        return ExitCode::FAILURE;
    }
    if let Err(e) = state.sdk.get_client().await {
        error!(client = state.sdk.name(), error = %e, "Failed to initialize Fireblocks client");
        return ExitCode::FAILURE;
    }
    info!(
        clients = ?[state.vaults.name(), state.sdk.name()],
        "Fireblocks clients ready"
    );

    let shutdown = CancellationToken::new();
    tokio::spawn(server::cancel_on_signal(shutdown.clone()));

    let result = server::serve(router(state.clone()), &server_config, shutdown).await;

    state.vaults.close_client().await;
    state.sdk.close_client().await;

    match result {
        Ok(()) => {
            info!("Fireblocks service stopped");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "HTTP server failed");
            ExitCode::FAILURE
        }
    }
}
