//! Personalized Spotify Listening Dashboard
//!
//! This library implements a small web application that walks a user through
//! the Spotify OAuth 2.0 authorization-code flow, keeps the resulting tokens
//! in a server-side session, and renders personalized listening data fetched
//! from the Spotify Web API: playlists, recently played tracks, top artists,
//! top songs, and recommendations.
//!
//! # Modules
//!
//! - `api` - HTTP handlers for the application's own routes
//! - `config` - Configuration management and environment variables
//! - `error` - Error taxonomy and HTTP response mapping
//! - `render` - HTML rendering boundary for the view models
//! - `server` - HTTP server wiring and startup
//! - `session` - OAuth session state and token lifecycle
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers

pub mod api;
pub mod config;
pub mod error;
pub mod render;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// Prints an informational message with a blue bullet point.
///
/// Used for general status updates such as startup progress. Accepts the
/// same arguments as `println!`.
///
/// # Example
///
/// ```
/// info!("Listening on {}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Signals successful completion of an operation, such as an established
/// session after the OAuth callback.
///
/// # Example
///
/// ```
/// success!("Authentication successful");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Reserved for unrecoverable startup failures such as missing configuration
/// or an unusable bind address. Code after this macro will not execute.
///
/// # Example
///
/// ```
/// error!("Missing environment variable: {}", var_name);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable conditions that are also surfaced to the caller,
/// such as a failed upstream call.
///
/// # Example
///
/// ```
/// warning!("Token refresh failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
