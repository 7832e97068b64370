use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{config::Config, error, management, server, success};

pub async fn update_playlist(config: Config) {
    let state = match server::build_state(config) {
        Ok(state) => state,
        Err(e) => error!("Cannot initialize client: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Updating top tracks playlist...");
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = management::update_top_tracks(&state.tokens).await;
    pb.finish_and_clear();

    match result {
        Ok(res) => success!(
            "Playlist {} updated with {} tracks",
            res.playlist_id,
            res.total_tracks
        ),
        Err(e) => error!("Failed to update playlist: {}", e),
    }
}
