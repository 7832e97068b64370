use axum::{extract::State, response::Json};
use serde_json::{Value, json};

use crate::api::AppState;

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let authenticated = state.tokens.refresh_token().await.is_some();

    Json(json!({
        "status": "ok",
        "authenticated": authenticated,
        "version": env!("CARGO_PKG_VERSION")
    }))
}
