//! OAuth session state and the token lifecycle.
//!
//! A [`Session`] is the per-user server-side record of one completed
//! authorization: the access/refresh token pair and the absolute expiry
//! instant. Sessions live in the in-memory [`SessionStore`], keyed by a
//! random id carried in an `HttpOnly` cookie, and are handed to handlers
//! through an axum `Extension`. The [`gate`] function is the single place
//! that decides whether a protected route may call upstream or must
//! redirect into the login or refresh flow first.

use std::{collections::HashMap, sync::Arc};

use axum::http::{HeaderMap, header};
use tokio::sync::Mutex;

use crate::types::TokenResponse;

/// Name of the cookie carrying the session id.
pub const SESSION_COOKIE: &str = "session_id";

/// Per-user OAuth state, created by the callback exchange and replaced on
/// refresh. `expires_at` is an absolute unix timestamp in seconds.
#[derive(Debug, Clone)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: i64,
}

/// Derived usability of the stored access token; never stored itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenState {
    Valid,
    Expired,
}

/// Outcome of gating a protected route on the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Authenticated with a usable access token.
    Proceed(String),
    /// No session; the caller must start the login flow.
    Login,
    /// The stored token has expired; the caller must refresh first.
    Refresh,
}

impl Session {
    /// Builds the session a successful code exchange establishes:
    /// the token pair plus `expires_at = now + expires_in`.
    pub fn from_token_response(response: &TokenResponse, now: i64) -> Self {
        Session {
            access_token: response.access_token.clone(),
            refresh_token: response.refresh_token.clone().unwrap_or_default(),
            expires_at: now + response.expires_in,
        }
    }

    /// Applies a refresh response: new access token and expiry. The stored
    /// refresh token survives when the provider omits a replacement.
    pub fn refreshed(&self, response: &TokenResponse, now: i64) -> Self {
        Session {
            access_token: response.access_token.clone(),
            refresh_token: response
                .refresh_token
                .clone()
                .unwrap_or_else(|| self.refresh_token.clone()),
            expires_at: now + response.expires_in,
        }
    }

    /// The token is valid up to and including `expires_at`.
    pub fn token_state(&self, now: i64) -> TokenState {
        if now > self.expires_at {
            TokenState::Expired
        } else {
            TokenState::Valid
        }
    }
}

/// Decides what a protected route does with the resolved session.
pub fn gate(session: Option<&Session>, now: i64) -> Gate {
    match session {
        None => Gate::Login,
        Some(session) => match session.token_state(now) {
            TokenState::Expired => Gate::Refresh,
            TokenState::Valid => Gate::Proceed(session.access_token.clone()),
        },
    }
}

/// In-memory session store shared across requests.
///
/// Clones share the same underlying map. Sessions disappear when a refresh
/// fails or the process exits; nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<Mutex<HashMap<String, Session>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &str) -> Option<Session> {
        self.inner.lock().await.get(id).cloned()
    }

    pub async fn insert(&self, id: String, session: Session) {
        self.inner.lock().await.insert(id, session);
    }

    pub async fn remove(&self, id: &str) {
        self.inner.lock().await.remove(id);
    }
}

/// Builds the `Set-Cookie` value establishing a session.
///
/// No `Max-Age`: the cookie lives as long as the browser session, matching
/// the lifetime of the server-side record.
pub fn build_session_cookie(id: &str) -> String {
    format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, id)
}

/// Extracts a single cookie value from a `Cookie` header.
pub fn extract_cookie_value(header: &str, name: &str) -> Option<String> {
    header.split(';').map(str::trim).find_map(|pair| {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next()?.trim();
        let value = parts.next()?.trim();
        (key == name).then(|| value.to_string())
    })
}

/// Resolves the request's session id from its `Cookie` header, if any.
pub fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(header::COOKIE)?
        .to_str()
        .ok()
        .and_then(|header| extract_cookie_value(header, SESSION_COOKIE))
}
