use axum::{Json, extract::State};

use crate::{
    api::AppState,
    error::AppError,
    management,
    types::RecentTracksResponse,
    warning,
};

pub async fn recent_tracks(
    State(state): State<AppState>,
) -> Result<Json<RecentTracksResponse>, AppError> {
    let tracks = management::recent_tracks(&state.tokens)
        .await
        .inspect_err(|e| warning!("Failed to fetch recent tracks: {}", e))?;

    Ok(Json(RecentTracksResponse {
        success: true,
        total: tracks.len(),
        tracks,
    }))
}
