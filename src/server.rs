// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! HTTP(S) listener and shutdown wiring.

use std::{io, time::Duration};

use axum::Router;
use axum_server::{tls_rustls::RustlsConfig, Handle};
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::config::{ServerConfig, TlsPaths};

/// How long in-flight requests may run after shutdown starts.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(10);

/// Serve `app` until `shutdown` is cancelled, then drain.
///
/// Plain HTTP unless the config carries TLS paths.
pub async fn serve(
    app: Router,
    config: &ServerConfig,
    shutdown: CancellationToken,
) -> io::Result<()> {
    let handle = Handle::new();
    tokio::spawn({
        let handle = handle.clone();
        async move {
            shutdown.cancelled().await;
            info!(drain_secs = DRAIN_TIMEOUT.as_secs(), "Shutting down HTTP server");
            handle.graceful_shutdown(Some(DRAIN_TIMEOUT));
        }
    });

    let service = app.into_make_service();
    match &config.tls {
        Some(tls) => {
            let rustls = load_tls(tls).await?;
            info!(addr = %config.addr, "Fireblocks service listening on https (docs at /docs)");
            axum_server::bind_rustls(config.addr, rustls)
                .handle(handle)
                .serve(service)
                .await
        }
        None => {
            info!(addr = %config.addr, "Fireblocks service listening on http (docs at /docs)");
            axum_server::bind(config.addr)
                .handle(handle)
                .serve(service)
                .await
        }
    }
}

async fn load_tls(paths: &TlsPaths) -> io::Result<RustlsConfig> {
    for path in [&paths.cert, &paths.key] {
        if !path.exists() {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("TLS file not found: {}", path.display()),
            ));
        }
    }
    RustlsConfig::from_pem_file(&paths.cert, &paths.key).await
}

/// Cancel `token` on Ctrl-C or SIGTERM.
pub async fn cancel_on_signal(token: CancellationToken) {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C"),
        _ = terminate => info!("Received SIGTERM"),
    }
    token.cancel();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn missing_tls_files_are_reported() {
        let paths = TlsPaths {
            cert: PathBuf::from("/nonexistent/cert.pem"),
            key: PathBuf::from("/nonexistent/key.pem"),
        };
        let err = load_tls(&paths).await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
        assert!(err.to_string().contains("cert.pem"));
    }

    #[tokio::test]
    async fn serve_returns_after_cancellation() {
        let config = ServerConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            tls: None,
        };
        let shutdown = CancellationToken::new();
        shutdown.cancel();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            serve(Router::new(), &config, shutdown),
        )
        .await;
        assert!(matches!(result, Ok(Ok(()))));
    }
}
