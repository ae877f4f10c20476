use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr};

use crate::{api, error, session::SessionStore};

pub async fn start_server(addr: &str, store: SessionStore) {
    let app = Router::new()
        .route("/", get(api::index))
        .route("/login", get(api::login))
        .route("/callback", get(api::callback))
        .route("/menu", get(api::menu))
        .route("/playlists", get(api::playlists))
        .route("/recently-played", get(api::recently_played))
        .route("/top-artists", get(api::top_artists))
        .route("/top-songs", get(api::top_songs))
        .route("/available-genres", get(api::available_genres))
        .route("/recommendations", get(api::recommendations))
        .route("/refresh-token", get(api::refresh))
        .route("/health", get(api::health))
        .layer(Extension(store));

    let addr = match SocketAddr::from_str(addr) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
