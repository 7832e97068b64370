use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing authorization code")]
    MissingAuthorizationCode,
    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),
    #[error("Token exchange failed: {0}")]
    UpstreamAuth(String),
    #[error("Spotify API request failed: {0}")]
    UpstreamApi(String),
    #[error("No playlist configured")]
    PlaylistNotConfigured,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingAuthorizationCode | AppError::AuthorizationDenied(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::UpstreamAuth(_)
            | AppError::UpstreamApi(_)
            | AppError::PlaylistNotConfigured
            | AppError::InvalidConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn body(&self) -> Value {
        json!({
            "success": false,
            "error": self.to_string(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
