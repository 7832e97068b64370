//! Personal Spotify backend library
//!
//! This library provides the pieces of a small single-user backend for the
//! Spotify Web API: the OAuth authorization-code flow, an in-memory refresh
//! token, a recently-played proxy and a job that overwrites a playlist with the
//! user's current top tracks.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers and the axum router
//! - `cli` - One-shot command implementations used by the binary
//! - `config` - Configuration flags, environment variables and `.env` loading
//! - `error` - Request-level error type and its HTTP mapping
//! - `management` - Token lifecycle and the track/playlist operations
//! - `server` - HTTP server startup and shutdown
//! - `spotify` - Spotify Web API client and its trait seam
//! - `types` - Upstream payloads and response DTOs
//! - `utils` - Small formatting helpers

pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used on startup and CLI paths where any error ends the program. Request
/// handling uses [`error::AppError`] instead.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
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
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for fatal startup and CLI errors. Request handlers must never call
/// this; they log with [`warning!`] and return an error response.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable failures such as a rejected token exchange or an
/// upstream API error on a single request.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
