mod auth;
pub mod playlist;
pub mod tracks;

pub use auth::TokenManager;
pub use playlist::update_top_tracks;
pub use tracks::recent_tracks;
