use axum::{
    Extension, Json,
    http::HeaderMap,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use crate::{
    render,
    session::{self, Gate, SessionStore},
    spotify,
};

pub async fn playlists(headers: HeaderMap, Extension(store): Extension<SessionStore>) -> Response {
    let token = match bearer_or_redirect(&headers, &store, "/playlists").await {
        Ok(token) => token,
        Err(redirect) => return redirect.into_response(),
    };

    match spotify::playlists::get_playlists(&token).await {
        Ok(playlists) => render::playlists_page(&playlists).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn recently_played(
    headers: HeaderMap,
    Extension(store): Extension<SessionStore>,
) -> Response {
    let token = match bearer_or_redirect(&headers, &store, "/recently-played").await {
        Ok(token) => token,
        Err(redirect) => return redirect.into_response(),
    };

    match spotify::player::get_recently_played(&token).await {
        Ok(tracks) => render::recently_played_page(&tracks).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn top_artists(headers: HeaderMap, Extension(store): Extension<SessionStore>) -> Response {
    let token = match bearer_or_redirect(&headers, &store, "/top-artists").await {
        Ok(token) => token,
        Err(redirect) => return redirect.into_response(),
    };

    match spotify::top::get_top_artists(&token).await {
        Ok(artists) => render::top_artists_page(&artists).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn top_songs(headers: HeaderMap, Extension(store): Extension<SessionStore>) -> Response {
    let token = match bearer_or_redirect(&headers, &store, "/top-songs").await {
        Ok(token) => token,
        Err(redirect) => return redirect.into_response(),
    };

    match spotify::top::get_top_tracks(&token).await {
        Ok(tracks) => render::top_songs_page(&tracks).into_response(),
        Err(err) => err.into_response(),
    }
}

/// The valid recommendation seed genres, as raw JSON rather than a page.
pub async fn available_genres(
    headers: HeaderMap,
    Extension(store): Extension<SessionStore>,
) -> Response {
    let token = match bearer_or_redirect(&headers, &store, "/available-genres").await {
        Ok(token) => token,
        Err(redirect) => return redirect.into_response(),
    };

    match spotify::recommendations::get_genre_seeds(&token).await {
        Ok(genres) => Json(genres).into_response(),
        Err(err) => err.into_response(),
    }
}

pub async fn recommendations(
    headers: HeaderMap,
    Extension(store): Extension<SessionStore>,
) -> Response {
    let token = match bearer_or_redirect(&headers, &store, "/recommendations").await {
        Ok(token) => token,
        Err(redirect) => return redirect.into_response(),
    };

    match spotify::recommendations::get_recommendations(&token).await {
        Ok(tracks) => render::recommendations_page(&tracks).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Gates a protected route.
///
/// Resolves the request's session from its cookie and hands back a usable
/// bearer token, or the redirect that restores one: `/login` when there is
/// no session, the refresh flow (remembering `route`) when the token has
/// expired. An expired token never reaches the upstream API.
async fn bearer_or_redirect(
    headers: &HeaderMap,
    store: &SessionStore,
    route: &str,
) -> Result<String, Redirect> {
    let session = match session::session_id(headers) {
        Some(id) => store.get(&id).await,
        None => None,
    };

    match session::gate(session.as_ref(), Utc::now().timestamp()) {
        Gate::Proceed(token) => Ok(token),
        Gate::Login => Err(Redirect::to("/login")),
        Gate::Refresh => Err(Redirect::to(&format!("/refresh-token?next={}", route))),
    }
}
