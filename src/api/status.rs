use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{api::AppState, utils};

#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub key: Option<String>,
}

/// Landing page showing whether a refresh token is held.
///
/// The full token is only shown when `key` matches the configured secret.
/// This is a convenience for copying the token into the environment, not an
/// access control.
pub async fn status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> Html<String> {
    let token = state.tokens.refresh_token().await;
    let reveal = utils::secret_matches(params.key.as_deref(), state.config().secret_key.as_deref());

    let shown = match (&token, reveal) {
        (Some(t), true) => t.clone(),
        _ => utils::token_preview(token.as_deref()),
    };
    let state_label = if token.is_some() {
        "Authenticated"
    } else {
        "Not authenticated"
    };

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>toptracks</title>
  <link rel="stylesheet" href="/public/style.css">
</head>
<body>
  <main>
    <h1>toptracks</h1>
    <p class="state">{state_label}</p>
    <p>Refresh token: <code>{token}</code></p>
    <p><a class="button" href="/login">Log in with Spotify</a></p>
  </main>
</body>
</html>
"#,
        state_label = state_label,
        token = utils::escape_html(&shown),
    ))
}
