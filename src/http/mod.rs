//! # HTTP Facade
//!
//! JSON endpoints over the intent router and the reminder store.
//!
//! - **Version**: 1.0.0
//! - **Since**: 0.1.0

pub mod routes;

use anyhow::{Context, Result};
use axum::{
    routing::{delete, get, post},
    Router,
};
use log::info;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::commands::IntentRouter;
use crate::features::ReminderScheduler;

pub use routes::ApiError;

/// Shared state handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<IntentRouter>,
}

impl AppState {
    pub fn new(router: Arc<IntentRouter>) -> Self {
        Self { router }
    }

    pub fn reminders(&self) -> &ReminderScheduler {
        &self.router.context().reminders
    }
}

/// Build the axum router for the facade
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health))
        .route("/command", post(routes::command))
        .route(
            "/api/reminders",
            get(routes::list_reminders).post(routes::create_reminder),
        )
        .route("/api/reminders/{id}", delete(routes::delete_reminder))
        .with_state(state)
}

/// Bind `addr` and serve until the process exits
pub async fn serve(addr: &str, state: AppState) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind HTTP listener on {addr}"))?;
    info!("🌐 HTTP facade listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .await
        .context("HTTP server stopped unexpectedly")
}
