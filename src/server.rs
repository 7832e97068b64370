use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{
    api::{self, AppState},
    config::Config,
    info,
    management::TokenManager,
    spotify::SpotifyClient,
    warning,
};

/// Builds the shared state from the configuration.
///
/// Fails on a malformed authorize URL so that `/login` cannot break later.
pub fn build_state(config: Config) -> crate::Res<AppState> {
    let config = Arc::new(config);
    let spotify = Arc::new(SpotifyClient::new(&config)?);
    let tokens = TokenManager::new(config, spotify);
    tokens.authorization_url(&tokens.config().scope)?;
    Ok(AppState::new(tokens))
}

/// Binds the listener and serves until Ctrl-C.
pub async fn start_api_server(config: Config) -> crate::Res<()> {
    let addr = SocketAddr::from_str(&config.server_addr())?;
    let state = build_state(config)?;

    if state.tokens.refresh_token().await.is_none() {
        warning!("No refresh token configured, visit /login to authenticate");
    }

    let app = api::router(state)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warning!("Cannot listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
