//! Configuration management for the listening dashboard.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the working directory. All
//! provider endpoints and OAuth credentials come from the environment; the
//! process refuses to start when a required value is absent.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (bind address and authorization scope only)

use std::env;

/// Environment variables that must be present before the server starts.
const REQUIRED_VARS: [&str; 6] = [
    "SPOTIFY_CLIENT_ID",
    "SPOTIFY_CLIENT_SECRET",
    "SPOTIFY_REDIRECT_URI",
    "SPOTIFY_AUTH_URL",
    "SPOTIFY_TOKEN_URL",
    "SPOTIFY_API_URL",
];

const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:3000";

/// Authorization scope requested when `SPOTIFY_SCOPE` is not set.
///
/// The superset of permissions the application's views need: profile and
/// email for the provider consent screen, listening history and top items
/// for the resource views, and playlist read access for `/playlists`.
const DEFAULT_SCOPE: &str = "user-read-private user-read-email \
    user-read-recently-played user-top-read playlist-read-private \
    playlist-read-collaborative";

/// Loads environment variables and verifies the required ones are present.
///
/// Reads a `.env` file from the working directory when one exists, then
/// checks every variable in `REQUIRED_VARS`. An error here is fatal: the
/// caller terminates the process, so a misconfigured deployment fails at
/// startup rather than on the first request.
///
/// # Errors
///
/// Returns an error message naming every missing variable.
///
/// # Example
///
/// ```
/// use tunescope::config;
///
/// if let Err(e) = config::load_env() {
///     eprintln!("Configuration error: {}", e);
/// }
/// ```
pub fn load_env() -> Result<(), String> {
    dotenv::dotenv().ok();

    let missing: Vec<&str> = REQUIRED_VARS
        .iter()
        .copied()
        .filter(|var| env::var(var).is_err())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "Missing environment variable(s): {}",
            missing.join(", ")
        ))
    }
}

/// Returns the address and port the HTTP server binds to.
///
/// Reads `SERVER_ADDRESS`, defaulting to `0.0.0.0:3000`.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

/// Returns the Spotify API client ID.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set;
/// unreachable after a successful [`load_env`].
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set;
/// unreachable after a successful [`load_env`].
///
/// # Security Note
///
/// The client secret must never appear in logs or rendered pages.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the OAuth redirect URI registered with the provider.
///
/// This must match the redirect URI configured in the Spotify application
/// settings, e.g. `http://localhost:3000/callback`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_REDIRECT_URI` environment variable is not set;
/// unreachable after a successful [`load_env`].
pub fn spotify_redirect_uri() -> String {
    env::var("SPOTIFY_REDIRECT_URI").expect("SPOTIFY_REDIRECT_URI must be set")
}

/// Returns the provider's OAuth authorization endpoint.
///
/// Users are redirected here to grant permissions, e.g.
/// `https://accounts.spotify.com/authorize`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_AUTH_URL` environment variable is not set;
/// unreachable after a successful [`load_env`].
pub fn spotify_auth_url() -> String {
    env::var("SPOTIFY_AUTH_URL").expect("SPOTIFY_AUTH_URL must be set")
}

/// Returns the provider's OAuth token endpoint.
///
/// Authorization codes and refresh tokens are exchanged here, e.g.
/// `https://accounts.spotify.com/api/token`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_TOKEN_URL` environment variable is not set;
/// unreachable after a successful [`load_env`].
pub fn spotify_token_url() -> String {
    env::var("SPOTIFY_TOKEN_URL").expect("SPOTIFY_TOKEN_URL must be set")
}

/// Returns the Spotify Web API base URL, without a trailing slash.
///
/// All resource fetchers build their endpoints on top of this value, e.g.
/// `https://api.spotify.com/v1`.
///
/// # Panics
///
/// Panics if the `SPOTIFY_API_URL` environment variable is not set;
/// unreachable after a successful [`load_env`].
pub fn spotify_api_url() -> String {
    env::var("SPOTIFY_API_URL").expect("SPOTIFY_API_URL must be set")
}

/// Returns the authorization scope requested during login.
///
/// Reads `SPOTIFY_SCOPE`, defaulting to the six-scope superset the views
/// need. The value is a space-separated scope list as the provider expects.
pub fn spotify_scope() -> String {
    env::var("SPOTIFY_SCOPE").unwrap_or_else(|_| DEFAULT_SCOPE.to_string())
}
