//! Session state carried in a signed, expiring cookie.
//!
//! The cookie holds the JSON-encoded [`ExamSession`] and the time it was
//! written. Nothing is stored server-side, so sessions survive restarts as
//! long as the signing secret stays the same.

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use serde::{Deserialize, Serialize};

use examdesk_core::session::ExamSession;

use crate::error::ServerError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    /// Epoch seconds of the last write.
    written_at: f64,
    session: ExamSession,
}

/// Read the caller's session.
///
/// A missing, forged, undecodable or expired cookie all read as
/// [`ExamSession::NoSession`].
pub fn load(jar: &SignedCookieJar, state: &AppState) -> ExamSession {
    let config = &state.config;

    // `get` only returns cookies whose signature verifies
    let Some(cookie) = jar.get(&config.session_cookie) else {
        tracing::debug!("no valid session cookie");
        return ExamSession::NoSession;
    };

    let stored: StoredSession = match serde_json::from_str(cookie.value()) {
        Ok(stored) => stored,
        Err(e) => {
            tracing::warn!("discarding undecodable session cookie: {e}");
            return ExamSession::NoSession;
        }
    };

    let age = state.clock.now() - stored.written_at;
    if age > config.session_lifetime_secs as f64 {
        tracing::debug!(age_secs = age, "session cookie expired");
        return ExamSession::NoSession;
    }

    stored.session
}

/// Write `session` to the jar, restarting the expiry window.
pub fn store(
    jar: SignedCookieJar,
    state: &AppState,
    session: &ExamSession,
) -> Result<SignedCookieJar, ServerError> {
    let config = &state.config;
    let stored = StoredSession {
        written_at: state.clock.now(),
        session: session.clone(),
    };
    let value = serde_json::to_string(&stored)
        .map_err(|e| ServerError::Internal(anyhow::anyhow!("failed to encode session: {e}")))?;
    let max_age = i64::try_from(config.session_lifetime_secs).map_err(|_| {
        ServerError::Internal(anyhow::anyhow!(
            "session lifetime out of range: {}",
            config.session_lifetime_secs
        ))
    })?;

    let cookie = Cookie::build((config.session_cookie.clone(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age));

    Ok(jar.add(cookie))
}
