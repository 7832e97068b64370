#![allow(dead_code)]

use std::{path::PathBuf, sync::Arc, sync::Mutex};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode},
};
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use tower::ServiceExt;

use toptracks::{
    api::{self, AppState},
    config::Config,
    management::TokenManager,
    spotify::{SpotifyApi, SpotifyError},
    types::{
        ExternalUrls, FullTrack, Image, PlayHistory, RecentlyPlayedResponse, SimplifiedAlbum,
        SimplifiedArtist, SnapshotResponse, TimeRange, TokenGrant, TokenResponse,
        TopTracksResponse,
    },
};

pub const ISSUED_REFRESH_TOKEN: &str = "AQBissued-refresh-token-0123456789";

/// In-memory stand-in for the Spotify API that records every call.
pub struct FakeSpotify {
    pub grants: Mutex<Vec<TokenGrant>>,
    pub recent_limits: Mutex<Vec<u32>>,
    pub top_requests: Mutex<Vec<(u32, TimeRange)>>,
    pub replaced: Mutex<Vec<(String, Vec<String>)>>,
    /// Refresh token handed out for an authorization code.
    pub code_refresh_token: Option<String>,
    /// Refresh token handed out alongside a refreshed access token.
    pub rotated_refresh_token: Option<String>,
    pub reject_refresh: bool,
    pub fail_recent: bool,
    pub top: Vec<FullTrack>,
}

impl Default for FakeSpotify {
    fn default() -> Self {
        FakeSpotify {
            grants: Mutex::new(Vec::new()),
            recent_limits: Mutex::new(Vec::new()),
            top_requests: Mutex::new(Vec::new()),
            replaced: Mutex::new(Vec::new()),
            code_refresh_token: Some(ISSUED_REFRESH_TOKEN.to_string()),
            rotated_refresh_token: None,
            reject_refresh: false,
            fail_recent: false,
            top: (1..=5)
                .map(|i| track(&format!("top{}", i), 180_000 + i * 1_000))
                .collect(),
        }
    }
}

impl FakeSpotify {
    pub fn grants(&self) -> Vec<TokenGrant> {
        self.grants.lock().unwrap().clone()
    }
}

fn rejected() -> SpotifyError {
    SpotifyError::Status {
        status: reqwest::StatusCode::BAD_REQUEST,
        body: r#"{"error":"invalid_grant"}"#.to_string(),
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn exchange_token(&self, grant: TokenGrant) -> Result<TokenResponse, SpotifyError> {
        self.grants.lock().unwrap().push(grant.clone());

        match grant {
            TokenGrant::AuthorizationCode { code, .. } => {
                if code == "bad-code" {
                    return Err(rejected());
                }
                Ok(token_response("access-from-code", self.code_refresh_token.clone()))
            }
            TokenGrant::RefreshToken(refresh_token) => {
                if self.reject_refresh {
                    return Err(rejected());
                }
                Ok(token_response(
                    &format!("access-for-{}", refresh_token),
                    self.rotated_refresh_token.clone(),
                ))
            }
        }
    }

    async fn recently_played(
        &self,
        _access_token: &str,
        limit: u32,
    ) -> Result<RecentlyPlayedResponse, SpotifyError> {
        self.recent_limits.lock().unwrap().push(limit);

        if self.fail_recent {
            return Err(SpotifyError::Status {
                status: reqwest::StatusCode::BAD_GATEWAY,
                body: String::new(),
            });
        }

        Ok(RecentlyPlayedResponse {
            items: vec![PlayHistory {
                played_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap(),
                track: track("recent1", 210_000),
            }],
            next: None,
            limit: Some(limit),
        })
    }

    async fn top_tracks(
        &self,
        _access_token: &str,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<TopTracksResponse, SpotifyError> {
        self.top_requests.lock().unwrap().push((limit, time_range));

        Ok(TopTracksResponse {
            items: self.top.iter().take(limit as usize).cloned().collect(),
            total: Some(self.top.len() as u32),
        })
    }

    async fn replace_playlist_tracks(
        &self,
        _access_token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<SnapshotResponse, SpotifyError> {
        self.replaced
            .lock()
            .unwrap()
            .push((playlist_id.to_string(), uris.to_vec()));

        Ok(SnapshotResponse {
            snapshot_id: "snapshot-1".to_string(),
        })
    }
}

fn token_response(access_token: &str, refresh_token: Option<String>) -> TokenResponse {
    TokenResponse {
        access_token: access_token.to_string(),
        token_type: Some("Bearer".to_string()),
        scope: None,
        expires_in: Some(3600),
        refresh_token,
    }
}

pub fn track(id: &str, duration_ms: u64) -> FullTrack {
    FullTrack {
        id: Some(id.to_string()),
        name: format!("Track {}", id),
        uri: format!("spotify:track:{}", id),
        artists: vec![SimplifiedArtist {
            id: Some(format!("{}-artist", id)),
            name: format!("Artist {}", id),
            external_urls: ExternalUrls {
                spotify: Some(format!("https://open.spotify.com/artist/{}-artist", id)),
            },
        }],
        album: SimplifiedAlbum {
            id: Some(format!("{}-album", id)),
            name: format!("Album {}", id),
            release_date: Some("2024-01-01".to_string()),
            images: vec![Image {
                url: format!("https://i.scdn.co/image/{}", id),
                height: Some(640),
                width: Some(640),
            }],
            external_urls: ExternalUrls::default(),
        },
        duration_ms,
        explicit: false,
        popularity: Some(50),
        preview_url: None,
        external_urls: ExternalUrls {
            spotify: Some(format!("https://open.spotify.com/track/{}", id)),
        },
        available_markets: vec!["DE".to_string(), "US".to_string()],
    }
}

pub fn test_config() -> Config {
    Config {
        client_id: "client".to_string(),
        client_secret: "secret".to_string(),
        redirect_uri: "http://localhost:3000/callback".to_string(),
        scope: vec![
            "user-read-recently-played".to_string(),
            "user-top-read".to_string(),
        ],
        refresh_token: None,
        playlist_id: Some("playlist-1".to_string()),
        secret_key: Some("s3cret".to_string()),
        allowed_origin: None,
        host: "127.0.0.1".to_string(),
        port: 3000,
        public_dir: PathBuf::from("public"),
        auth_url: "https://accounts.spotify.com/authorize".to_string(),
        token_url: "https://accounts.spotify.com/api/token".to_string(),
        api_url: "https://api.spotify.com/v1".to_string(),
        http_timeout_secs: 10,
    }
}

pub fn token_manager(config: Config, fake: Arc<FakeSpotify>) -> TokenManager {
    TokenManager::new(Arc::new(config), fake)
}

pub fn test_app(config: Config, fake: Arc<FakeSpotify>) -> (Router, AppState) {
    let state = AppState::new(token_manager(config, fake));
    let app = api::router(state.clone()).expect("router");
    (app, state)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("json body")
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn send(app: &Router, request: Request<Body>) -> TestResponse {
    let res = app.clone().oneshot(request).await.unwrap();
    let status = res.status();
    let headers = res.headers().clone();
    let bytes = res.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
