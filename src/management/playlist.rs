use crate::{
    error::{AppError, Result},
    management::TokenManager,
    types::{TimeRange, UpdateTopTracksResponse},
};

pub const TOP_TRACKS_LIMIT: u32 = 5;
pub const TOP_TRACKS_RANGE: TimeRange = TimeRange::ShortTerm;

/// Replaces the configured playlist with the user's current top tracks.
///
/// The playlist ends up holding exactly the fetched tracks, in the order
/// Spotify ranks them. Anything that was in it before is gone.
pub async fn update_top_tracks(tokens: &TokenManager) -> Result<UpdateTopTracksResponse> {
    let playlist_id = tokens
        .config()
        .playlist_id
        .clone()
        .filter(|id| !id.is_empty())
        .ok_or(AppError::PlaylistNotConfigured)?;

    let access_token = tokens.get_access_token().await?;
    let spotify = tokens.spotify();

    let top = spotify
        .top_tracks(&access_token, TOP_TRACKS_LIMIT, TOP_TRACKS_RANGE)
        .await
        .map_err(|e| AppError::UpstreamApi(e.to_string()))?;

    let uris: Vec<String> = top.items.into_iter().map(|track| track.uri).collect();

    spotify
        .replace_playlist_tracks(&access_token, &playlist_id, &uris)
        .await
        .map_err(|e| AppError::UpstreamApi(e.to_string()))?;

    Ok(UpdateTopTracksResponse {
        success: true,
        message: format!("Playlist updated with top {} tracks", uris.len()),
        playlist_id,
        total_tracks: uris.len(),
    })
}
