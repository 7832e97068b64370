//! Configuration management for the toptracks backend.
//!
//! Configuration is read once at startup and never changes afterwards. Values
//! come from, in order of priority:
//! 1. Command-line flags
//! 2. Environment variables
//! 3. `.env` files (working directory first, then the local data directory)
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

use clap::Args;

pub const APP_DIR: &str = "toptracks";

/// Loads environment variables from `.env` files.
///
/// Looks for `.env` in the current working directory and then in the
/// platform-specific local data directory under `toptracks/.env`. Variables
/// that are already set are never overridden, and a missing file is not an
/// error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/toptracks/.env`
/// - macOS: `~/Library/Application Support/toptracks/.env`
/// - Windows: `%LOCALAPPDATA%/toptracks/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    async_fs::create_dir_all(&path)
        .await
        .map_err(|e| e.to_string())?;
    path.push(".env");

    let local = env::current_dir()
        .map_err(|e| e.to_string())?
        .join(".env");

    for candidate in [local, path] {
        if candidate.is_file() {
            dotenv::from_path(&candidate)
                .map_err(|e| format!("{}: {}", candidate.display(), e))?;
        }
    }

    Ok(())
}

#[derive(Clone, Debug, Args)]
pub struct Config {
    /// Spotify application client ID
    #[arg(long, env = "SPOTIFY_CLIENT_ID")]
    pub client_id: String,

    /// Spotify application client secret
    #[arg(long, env = "SPOTIFY_CLIENT_SECRET", hide_env_values = true)]
    pub client_secret: String,

    /// Redirect URI registered with the Spotify application
    #[arg(
        long,
        env = "SPOTIFY_REDIRECT_URI",
        default_value = "http://localhost:3000/callback"
    )]
    pub redirect_uri: String,

    /// Scopes requested at login
    #[arg(
        long,
        env = "SPOTIFY_SCOPE",
        default_value = "user-read-recently-played,user-top-read,playlist-modify-public,playlist-modify-private",
        value_delimiter = ','
    )]
    pub scope: Vec<String>,

    /// Refresh token to start with, e.g. one printed by a previous login
    #[arg(long, env = "SPOTIFY_REFRESH_TOKEN", hide_env_values = true)]
    pub refresh_token: Option<String>,

    /// Playlist overwritten with the current top tracks
    #[arg(long, env = "SPOTIFY_PLAYLIST_ID")]
    pub playlist_id: Option<String>,

    /// Shared secret that reveals the full refresh token on the landing page
    #[arg(long, env = "SECRET_KEY", hide_env_values = true)]
    pub secret_key: Option<String>,

    /// Origin allowed to call the JSON endpoints from a browser
    #[arg(long, env = "ALLOWED_ORIGIN")]
    pub allowed_origin: Option<String>,

    /// Host to listen on
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Directory served under /public
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Spotify authorize endpoint
    #[arg(
        long,
        env = "SPOTIFY_AUTH_URL",
        default_value = "https://accounts.spotify.com/authorize"
    )]
    pub auth_url: String,

    /// Spotify token endpoint
    #[arg(
        long,
        env = "SPOTIFY_TOKEN_URL",
        default_value = "https://accounts.spotify.com/api/token"
    )]
    pub token_url: String,

    /// Spotify Web API base URL
    #[arg(long, env = "SPOTIFY_API_URL", default_value = "https://api.spotify.com/v1")]
    pub api_url: String,

    /// Timeout for each outbound request in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECS", default_value_t = 10)]
    pub http_timeout_secs: u64,
}

impl Config {
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
