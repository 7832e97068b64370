use tabled::{Table, settings::Style};

use crate::{config::Config, error, info, management, server, types::TrackTableRow};

pub async fn recent(config: Config) {
    let state = match server::build_state(config) {
        Ok(state) => state,
        Err(e) => error!("Cannot initialize client: {}", e),
    };

    let tracks = match management::recent_tracks(&state.tokens).await {
        Ok(tracks) => tracks,
        Err(e) => error!("Failed to fetch recent tracks: {}", e),
    };

    if tracks.is_empty() {
        info!("No recently played tracks");
        return;
    }

    let rows: Vec<TrackTableRow> = tracks.iter().map(TrackTableRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}
