use std::sync::Arc;

use tokio::sync::RwLock;
use url::Url;

use crate::{
    config::Config,
    error::{AppError, Result},
    spotify::{SpotifyApi, SpotifyError, auth::build_authorization_url},
    types::TokenGrant,
};

/// Owns the refresh token and trades it for access tokens.
///
/// The refresh token only lives in memory. It starts from configuration and is
/// replaced whenever a login callback succeeds; nothing ever clears it. Access
/// tokens are requested fresh for every call chain and never stored.
#[derive(Clone)]
pub struct TokenManager {
    config: Arc<Config>,
    spotify: Arc<dyn SpotifyApi>,
    refresh_token: Arc<RwLock<Option<String>>>,
}

impl TokenManager {
    pub fn new(config: Arc<Config>, spotify: Arc<dyn SpotifyApi>) -> Self {
        let initial = config.refresh_token.clone().filter(|t| !t.is_empty());
        TokenManager {
            config,
            spotify,
            refresh_token: Arc::new(RwLock::new(initial)),
        }
    }

    /// Authorize URL for the configured client and redirect URI.
    pub fn authorization_url(&self, scopes: &[String]) -> Result<Url> {
        build_authorization_url(
            &self.config.auth_url,
            &self.config.client_id,
            &self.config.redirect_uri,
            scopes,
        )
        .map_err(|e| AppError::InvalidConfig(format!("authorize url: {}", e)))
    }

    /// Exchanges a login callback code and stores the resulting refresh token.
    ///
    /// On any failure the token held so far stays in place.
    pub async fn exchange_code_for_refresh_token(&self, code: &str) -> Result<String> {
        let grant = TokenGrant::AuthorizationCode {
            code: code.to_string(),
            redirect_uri: self.config.redirect_uri.clone(),
        };

        let token = self
            .spotify
            .exchange_token(grant)
            .await
            .map_err(|e| AppError::UpstreamAuth(e.to_string()))?;

        let refresh_token = token
            .refresh_token
            .filter(|t| !t.is_empty())
            .ok_or(SpotifyError::MissingField("refresh_token"))
            .map_err(|e| AppError::UpstreamAuth(e.to_string()))?;

        *self.refresh_token.write().await = Some(refresh_token.clone());
        Ok(refresh_token)
    }

    /// Requests a new access token with the held refresh token.
    pub async fn get_access_token(&self) -> Result<String> {
        let Some(refresh_token) = self.refresh_token().await else {
            return Err(AppError::UpstreamAuth(
                "no refresh token available, log in first".to_string(),
            ));
        };

        let token = self
            .spotify
            .exchange_token(TokenGrant::RefreshToken(refresh_token))
            .await
            .map_err(|e| AppError::UpstreamAuth(e.to_string()))?;

        if token.access_token.is_empty() {
            return Err(AppError::UpstreamAuth(
                SpotifyError::MissingField("access_token").to_string(),
            ));
        }

        Ok(token.access_token)
    }

    pub async fn refresh_token(&self) -> Option<String> {
        self.refresh_token.read().await.clone()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn spotify(&self) -> &dyn SpotifyApi {
        self.spotify.as_ref()
    }
}
