//! # Spotify Integration Module
//!
//! The integration layer between toptracks and the Spotify Web API. Everything
//! that talks HTTP to Spotify lives here; the rest of the crate only sees the
//! [`SpotifyApi`] trait.
//!
//! ```text
//! Route handlers / CLI
//!          ↓
//! Management (TokenManager, tracks, playlist)
//!          ↓
//! SpotifyApi trait  ←  SpotifyClient (reqwest) | test doubles
//!          ↓
//! Spotify Accounts service + Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - authorization code and refresh token grants
//! - `GET /me/player/recently-played` - recently played tracks
//! - `GET /me/top/tracks` - the user's top tracks for a time range
//! - `PUT /playlists/{playlist_id}/tracks` - replace a playlist's items
//!
//! No call is retried. A failed request surfaces as a [`SpotifyError`] and
//! the caller decides what to do with it.

pub mod auth;
mod client;

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::types::{
    RecentlyPlayedResponse, SnapshotResponse, TimeRange, TokenGrant, TokenResponse,
    TopTracksResponse,
};

pub use client::SpotifyClient;

#[derive(Error, Debug)]
pub enum SpotifyError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("response is missing {0}")]
    MissingField(&'static str),
}

/// The Spotify operations this backend depends on.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Trades a grant for tokens at the accounts service.
    async fn exchange_token(&self, grant: TokenGrant) -> Result<TokenResponse, SpotifyError>;

    async fn recently_played(
        &self,
        access_token: &str,
        limit: u32,
    ) -> Result<RecentlyPlayedResponse, SpotifyError>;

    async fn top_tracks(
        &self,
        access_token: &str,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<TopTracksResponse, SpotifyError>;

    /// Overwrites every item of the playlist with `uris`, in order.
    async fn replace_playlist_tracks(
        &self,
        access_token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<SnapshotResponse, SpotifyError>;
}
