//! # API Module
//!
//! HTTP endpoints of the toptracks backend, built on [Axum](https://docs.rs/axum).
//!
//! ## Endpoints
//!
//! - [`status`] - `GET /` landing page with the refresh token status
//! - [`login`] - `GET /login` redirects to the Spotify authorize page
//! - [`callback`] - `GET /callback` exchanges the code for a refresh token
//! - [`recent_tracks`] - `GET /recent-tracks` recently played tracks as JSON
//! - [`update_top_tracks`] - `GET /update-top-tracks` overwrites the playlist
//! - [`health`] - `GET /health` liveness and version
//!
//! Static assets are served from the configured public directory under
//! `/public`.
//!
//! Handlers share one [`AppState`]. The only mutable piece of it is the
//! refresh token inside [`TokenManager`].

mod callback;
mod health;
mod login;
mod recent_tracks;
mod status;
mod top_tracks;

use axum::{
    Router,
    http::{HeaderValue, Method},
    routing::get,
};
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::{config::Config, management::TokenManager};

pub use callback::callback;
pub use health::health;
pub use login::login;
pub use recent_tracks::recent_tracks;
pub use status::status;
pub use top_tracks::update_top_tracks;

#[derive(Clone)]
pub struct AppState {
    pub tokens: TokenManager,
}

impl AppState {
    pub fn new(tokens: TokenManager) -> Self {
        AppState { tokens }
    }

    pub fn config(&self) -> &Config {
        self.tokens.config()
    }
}

/// Builds the application router.
///
/// # Errors
///
/// Fails if the configured allowed origin is not a valid header value.
pub fn router(state: AppState) -> crate::Res<Router> {
    let config = state.config();
    let public = ServeDir::new(&config.public_dir);

    let mut app = Router::new()
        .route("/", get(status))
        .route("/login", get(login))
        .route("/callback", get(callback))
        .route("/recent-tracks", get(recent_tracks))
        .route("/update-top-tracks", get(update_top_tracks))
        .route("/health", get(health))
        .nest_service("/public", public);

    if let Some(origin) = config.allowed_origin.as_deref().filter(|o| !o.is_empty()) {
        let cors = CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET]);
        app = app.layer(cors);
    }

    Ok(app.with_state(state))
}
