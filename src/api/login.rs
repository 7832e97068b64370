use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{api::AppState, warning};

/// Sends the browser to the Spotify authorize page with a 302.
pub async fn login(State(state): State<AppState>) -> Response {
    match state.tokens.authorization_url(&state.config().scope) {
        Ok(url) => (StatusCode::FOUND, [(header::LOCATION, url.to_string())]).into_response(),
        Err(e) => {
            warning!("Cannot build authorization url: {}", e);
            e.into_response()
        }
    }
}
