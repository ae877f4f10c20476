//! # API Module
//!
//! HTTP handlers for the application's own routes, built on
//! [Axum](https://docs.rs/axum). Three groups:
//!
//! - **Authorization flow**: [`login`] redirects the browser to the
//!   provider's consent screen, [`callback`] exchanges the returned code and
//!   establishes the session, [`refresh`] exchanges the stored refresh token
//!   when the access token has expired.
//! - **Resource views**: [`playlists`], [`recently_played`],
//!   [`top_artists`], [`top_songs`], [`recommendations`] render the user's
//!   listening data as HTML; [`available_genres`] answers with the raw seed
//!   list as JSON. Each is gated on a valid session: unauthenticated
//!   requests are redirected to `/login`, expired ones to the refresh flow.
//! - **Pages & monitoring**: [`index`] and [`menu`] are static navigation
//!   pages; [`health`] reports status and version for monitoring.
//!
//! Failures surface as JSON payloads shaped `{"error", "details"}` through
//! [`crate::error::AppError`]; redirects are reserved for the
//! missing/expired-session cases.

mod auth;
mod health;
mod pages;
mod views;

pub use auth::{callback, login, refresh};
pub use health::health;
pub use pages::{index, menu};
pub use views::{
    available_genres, playlists, recently_played, recommendations, top_artists, top_songs,
};
