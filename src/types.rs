use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::utils;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: Option<String>,
    pub scope: Option<String>,
    pub expires_in: Option<u64>,
    pub refresh_token: Option<String>,
}

/// Grant sent to the token endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenGrant {
    AuthorizationCode { code: String, redirect_uri: String },
    RefreshToken(String),
}

/// Top items window. Only the roughly four-week window is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRange {
    ShortTerm,
}

impl TimeRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedArtist {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimplifiedAlbum {
    pub id: Option<String>,
    pub name: String,
    pub release_date: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullTrack {
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    pub artists: Vec<SimplifiedArtist>,
    pub album: SimplifiedAlbum,
    pub duration_ms: u64,
    #[serde(default)]
    pub explicit: bool,
    pub popularity: Option<u32>,
    pub preview_url: Option<String>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
    #[serde(default)]
    pub available_markets: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayHistory {
    pub played_at: DateTime<Utc>,
    pub track: FullTrack,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentlyPlayedResponse {
    pub items: Vec<PlayHistory>,
    pub next: Option<String>,
    pub limit: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<FullTrack>,
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplacePlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistDto {
    pub id: Option<String>,
    pub name: String,
    pub external_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlbumDto {
    pub id: Option<String>,
    pub name: String,
    pub release_date: Option<String>,
    pub images: Vec<ImageDto>,
    pub external_url: Option<String>,
}

/// A recently played track as returned by `/recent-tracks`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub played_at: DateTime<Utc>,
    pub id: Option<String>,
    pub name: String,
    pub uri: String,
    pub artists: Vec<ArtistDto>,
    pub album: AlbumDto,
    pub duration_ms: u64,
    pub duration_minutes: String,
    pub explicit: bool,
    pub popularity: Option<u32>,
    pub preview_url: Option<String>,
    pub external_url: Option<String>,
    pub available_markets_count: usize,
}

impl From<PlayHistory> for TrackDto {
    fn from(item: PlayHistory) -> Self {
        let track = item.track;
        TrackDto {
            played_at: item.played_at,
            id: track.id,
            name: track.name,
            uri: track.uri,
            artists: track
                .artists
                .into_iter()
                .map(|artist| ArtistDto {
                    id: artist.id,
                    name: artist.name,
                    external_url: artist.external_urls.spotify,
                })
                .collect(),
            album: AlbumDto {
                id: track.album.id,
                name: track.album.name,
                release_date: track.album.release_date,
                images: track
                    .album
                    .images
                    .into_iter()
                    .map(|image| ImageDto {
                        url: image.url,
                        height: image.height,
                        width: image.width,
                    })
                    .collect(),
                external_url: track.album.external_urls.spotify,
            },
            duration_ms: track.duration_ms,
            duration_minutes: utils::duration_minutes(track.duration_ms),
            explicit: track.explicit,
            popularity: track.popularity,
            preview_url: track.preview_url,
            external_url: track.external_urls.spotify,
            available_markets_count: track.available_markets.len(),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "Played at")]
    pub played_at: String,
    #[tabled(rename = "Track")]
    pub name: String,
    #[tabled(rename = "Artists")]
    pub artists: String,
    #[tabled(rename = "Minutes")]
    pub duration: String,
}

impl From<&TrackDto> for TrackTableRow {
    fn from(track: &TrackDto) -> Self {
        TrackTableRow {
            played_at: track.played_at.format("%Y-%m-%d %H:%M").to_string(),
            name: track.name.clone(),
            artists: track
                .artists
                .iter()
                .map(|a| a.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            duration: track.duration_minutes.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecentTracksResponse {
    pub success: bool,
    pub total: usize,
    pub tracks: Vec<TrackDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateTopTracksResponse {
    pub success: bool,
    pub message: String,
    pub playlist_id: String,
    pub total_tracks: usize,
}
