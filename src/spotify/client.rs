use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, header::AUTHORIZATION};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    spotify::{SpotifyApi, SpotifyError},
    types::{
        RecentlyPlayedResponse, ReplacePlaylistRequest, SnapshotResponse, TimeRange, TokenGrant,
        TokenResponse, TopTracksResponse,
    },
    utils,
};

/// reqwest-backed [`SpotifyApi`] implementation.
///
/// Holds the client credentials so that callers never build the basic
/// authorization header themselves.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Result<Self, SpotifyError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(SpotifyClient {
            http,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token_url: config.token_url.clone(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Turns a non-2xx response into [`SpotifyError::Status`] and parses the rest.
async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, SpotifyError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SpotifyError::Status { status, body });
    }

    Ok(response.json::<T>().await?)
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn exchange_token(&self, grant: TokenGrant) -> Result<TokenResponse, SpotifyError> {
        let form: Vec<(&str, &str)> = match &grant {
            TokenGrant::AuthorizationCode { code, redirect_uri } => vec![
                ("grant_type", "authorization_code"),
                ("code", code.as_str()),
                ("redirect_uri", redirect_uri.as_str()),
            ],
            TokenGrant::RefreshToken(refresh_token) => vec![
                ("grant_type", "refresh_token"),
                ("refresh_token", refresh_token.as_str()),
            ],
        };

        let res = self
            .http
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                utils::basic_auth_header(&self.client_id, &self.client_secret),
            )
            .form(&form)
            .send()
            .await?;

        parse(res).await
    }

    async fn recently_played(
        &self,
        access_token: &str,
        limit: u32,
    ) -> Result<RecentlyPlayedResponse, SpotifyError> {
        let api_url = format!(
            "{uri}/me/player/recently-played?limit={limit}",
            uri = self.api_url,
            limit = limit
        );

        let res = self
            .http
            .get(&api_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        parse(res).await
    }

    async fn top_tracks(
        &self,
        access_token: &str,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<TopTracksResponse, SpotifyError> {
        let api_url = format!(
            "{uri}/me/top/tracks?limit={limit}&time_range={range}",
            uri = self.api_url,
            limit = limit,
            range = time_range.as_str()
        );

        let res = self
            .http
            .get(&api_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        parse(res).await
    }

    async fn replace_playlist_tracks(
        &self,
        access_token: &str,
        playlist_id: &str,
        uris: &[String],
    ) -> Result<SnapshotResponse, SpotifyError> {
        let api_url = format!(
            "{uri}/playlists/{playlist_id}/tracks",
            uri = self.api_url,
            playlist_id = playlist_id
        );

        // PUT replaces the playlist contents; POST would append.
        let res = self
            .http
            .put(&api_url)
            .bearer_auth(access_token)
            .json(&ReplacePlaylistRequest {
                uris: uris.to_vec(),
            })
            .send()
            .await?;

        parse(res).await
    }
}
