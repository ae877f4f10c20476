use std::collections::HashMap;

use axum::{
    Extension,
    extract::Query,
    http::{HeaderMap, header},
    response::{AppendHeaders, IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::{
    error::AppError,
    session::{self, Session, SessionStore},
    spotify, success, utils, warning,
};

/// Starts the authorization flow by sending the browser to the provider's
/// consent screen.
pub async fn login() -> Redirect {
    Redirect::to(&spotify::auth::authorize_url())
}

/// Completes the authorization flow.
///
/// A provider error becomes `AuthorizationDenied`, a missing `code`
/// parameter `MissingCode`. Otherwise the code is exchanged for a token
/// pair, a fresh session is stored, and the browser is sent to the menu
/// with the session cookie set.
pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(store): Extension<SessionStore>,
) -> Response {
    if let Some(reason) = params.get("error") {
        warning!("Authorization denied by provider: {}", reason);
        return AppError::AuthorizationDenied(reason.clone()).into_response();
    }

    let Some(code) = params.get("code") else {
        return AppError::MissingCode.into_response();
    };

    match spotify::auth::exchange_code(code).await {
        Ok(token) => {
            let session = Session::from_token_response(&token, Utc::now().timestamp());
            let session_id = utils::generate_session_id();
            store.insert(session_id.clone(), session).await;
            success!("Authentication successful; session established.");
            (
                AppendHeaders([(
                    header::SET_COOKIE,
                    session::build_session_cookie(&session_id),
                )]),
                Redirect::to("/menu"),
            )
                .into_response()
        }
        Err(err) => {
            warning!("Token exchange failed: {}", err);
            err.into_response()
        }
    }
}

/// Exchanges the stored refresh token for a fresh access token.
///
/// Requests without a session go back to `/login`. On success the session
/// is replaced (keeping the old refresh token if the provider omitted a new
/// one) and the browser continues to the `next` destination. On failure
/// the session is removed (the user must log in again) and the error
/// payload is surfaced.
pub async fn refresh(
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
    Extension(store): Extension<SessionStore>,
) -> Response {
    let Some(session_id) = session::session_id(&headers) else {
        return Redirect::to("/login").into_response();
    };
    let Some(current) = store.get(&session_id).await else {
        return Redirect::to("/login").into_response();
    };

    match spotify::auth::refresh_token(&current.refresh_token).await {
        Ok(token) => {
            let updated = current.refreshed(&token, Utc::now().timestamp());
            store.insert(session_id, updated).await;
            Redirect::to(next_destination(&params)).into_response()
        }
        Err(err) => {
            warning!("Token refresh failed: {}", err);
            store.remove(&session_id).await;
            err.into_response()
        }
    }
}

/// Destination to continue to after a successful refresh.
///
/// Only same-site paths are accepted; anything else falls back to the
/// playlists view.
fn next_destination(params: &HashMap<String, String>) -> &str {
    match params.get("next") {
        Some(next) if next.starts_with('/') && !next.starts_with("//") => next,
        _ => "/playlists",
    }
}
