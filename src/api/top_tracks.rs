use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{api::AppState, info, management, warning};

/// Overwrites the configured playlist with the current top tracks.
///
/// Error bodies carry the `playlist_id` next to the usual fields.
pub async fn update_top_tracks(State(state): State<AppState>) -> Response {
    match management::update_top_tracks(&state.tokens).await {
        Ok(res) => {
            info!(
                "Playlist {} now holds {} top tracks",
                res.playlist_id, res.total_tracks
            );
            Json(res).into_response()
        }
        Err(e) => {
            warning!("Failed to update top tracks playlist: {}", e);
            let mut body = e.body();
            body["playlist_id"] = state
                .config()
                .playlist_id
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null);
            (e.status(), Json(body)).into_response()
        }
    }
}
