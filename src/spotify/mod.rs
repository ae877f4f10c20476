//! # Spotify Integration Module
//!
//! This module is the outbound half of the application: everything that
//! talks to Spotify's OAuth endpoints and Web API lives here, leaving the
//! inbound handlers in [`crate::api`] free of HTTP-client concerns.
//!
//! ## Architecture
//!
//! ```text
//! Handler layer (api)
//!        ↓
//! Spotify integration layer
//!     ├── Authentication (authorization-code grants)
//!     ├── Playlists (me/playlists)
//!     ├── Player (me/player/recently-played)
//!     ├── Top items (me/top/artists, me/top/tracks)
//!     └── Recommendations (seeds + recommendations)
//!        ↓
//! HTTP layer (reqwest, JSON)
//!        ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication strategy
//!
//! The confidential-client authorization-code flow: the authorization URL
//! carries `client_id`, `response_type=code`, the scope list, the redirect
//! URI and `show_dialog=true`; both token grants (`authorization_code`,
//! `refresh_token`) are form-encoded POSTs carrying the client id and
//! secret. Token lifetime bookkeeping lives in [`crate::session`], not
//! here; these functions only perform the exchanges.
//!
//! ## Fetcher contract
//!
//! Every resource fetcher follows one algorithm: a single authenticated GET
//! through [`client::get_json`], a non-success status surfaced as a
//! structured error carrying the provider's payload, and a projection of
//! the response into the flat view models of [`crate::types`]. There are no
//! retries and no pagination; each view reads one page at a fixed limit.
//!
//! The recommendations fetcher is the one composite: it gathers seeds from
//! the user's top track and top artist (degrading to empty seed lists when
//! those sub-requests fail), ranks and filters genre seeds, and only then
//! issues the strict final call.

pub mod auth;
pub mod player;
pub mod playlists;
pub mod recommendations;
pub mod top;

mod client;
