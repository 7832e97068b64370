//! # CLI Module
//!
//! Command implementations behind the `toptracks` binary. Apart from
//! [`serve`], every command runs once and exits, which makes them suitable for
//! cron jobs and quick checks from a terminal.
//!
//! - [`serve`] - run the HTTP backend
//! - [`update_playlist`] - overwrite the playlist with the current top tracks
//! - [`recent`] - print recently played tracks as a table
//! - [`auth_url`] - print the Spotify authorize URL
//!
//! One-shot commands need a refresh token from configuration since nothing is
//! persisted between runs. Fatal errors end the process through [`error!`].

mod auth;
mod playlist;
mod recent;

pub use auth::auth_url;
pub use playlist::update_playlist;
pub use recent::recent;

use crate::{config::Config, error, server};

pub async fn serve(config: Config) {
    if let Err(e) = server::start_api_server(config).await {
        error!("Server failed: {}", e);
    }
}
