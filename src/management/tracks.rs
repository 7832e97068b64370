use crate::{
    error::{AppError, Result},
    management::TokenManager,
    types::TrackDto,
};

pub const RECENT_TRACKS_LIMIT: u32 = 30;

/// Fetches the most recently played tracks and reshapes them for clients.
pub async fn recent_tracks(tokens: &TokenManager) -> Result<Vec<TrackDto>> {
    let access_token = tokens.get_access_token().await?;

    let res = tokens
        .spotify()
        .recently_played(&access_token, RECENT_TRACKS_LIMIT)
        .await
        .map_err(|e| AppError::UpstreamApi(e.to_string()))?;

    Ok(res.items.into_iter().map(TrackDto::from).collect())
}
