//! Shared, read-only router state.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use examdesk_core::clock::{Clock, SystemClock};
use examdesk_core::config::ExamdeskConfig;
use examdesk_core::session::GradingPolicy;

/// Everything a handler needs, built once at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ExamdeskConfig>,
    pub clock: Arc<dyn Clock>,
    key: Key,
}

impl AppState {
    /// Build the state from a validated config, using the system clock.
    pub fn new(config: ExamdeskConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: ExamdeskConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        let key = Key::derive_from(config.secret_key.as_bytes());
        Ok(Self {
            config: Arc::new(config),
            clock,
            key,
        })
    }

    pub fn grading_policy(&self) -> GradingPolicy {
        GradingPolicy {
            institution: self.config.institution.clone(),
            pass_threshold: self.config.pass_threshold,
        }
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.key.clone()
    }
}
