//! examdesk-server: HTTP surface of examdesk.
//!
//! | Route | Method |
//! |---|---|
//! | `/` | GET |
//! | `/start-exam/{exam_file}` | GET |
//! | `/submit-exam` | POST |
//! | `/results` | GET |
//!
//! Handlers share nothing mutable: all per-user state travels in the signed
//! session cookie.

pub mod error;
pub mod handlers;
pub mod session;
pub mod state;

use anyhow::{Context, Result};
use axum::routing::{get, post};
use axum::Router;

use examdesk_core::config::ExamdeskConfig;

pub use state::AppState;

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/start-exam/:exam_file", get(handlers::start_exam))
        .route("/submit-exam", post(handlers::submit_exam))
        .route("/results", get(handlers::show_results))
        .with_state(state)
}

/// Bind to `config.bind` and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: ExamdeskConfig) -> Result<()> {
    let bind = config.bind.clone();
    let exams_dir = config.exams_dir.clone();
    let state = AppState::new(config)?;

    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    let addr = listener.local_addr()?;
    tracing::info!("serving exams from {} on http://{addr}", exams_dir.display());

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("failed to listen for Ctrl-C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
