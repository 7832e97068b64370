use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

use crate::{api::AppState, error::AppError, success, warning};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub error: Option<String>,
}

const LOGIN_SUCCESS_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Login successful</title>
  <link rel="stylesheet" href="/public/style.css">
</head>
<body>
  <main>
    <h2>Authentication successful.</h2>
    <p>The refresh token is held in memory until the server restarts.</p>
    <p><a href="/">Back to status</a></p>
  </main>
</body>
</html>
"#;

/// Completes the login by trading the code for a refresh token.
///
/// A request without a code never touches the held token.
pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> Result<Html<&'static str>, AppError> {
    if let Some(reason) = params.error {
        warning!("Authorization denied by provider: {}", reason);
        return Err(AppError::AuthorizationDenied(reason));
    }

    let Some(code) = params.code.filter(|c| !c.is_empty()) else {
        warning!("Callback hit without an authorization code");
        return Err(AppError::MissingAuthorizationCode);
    };

    match state.tokens.exchange_code_for_refresh_token(&code).await {
        Ok(_) => {
            success!("Refresh token stored");
            Ok(Html(LOGIN_SUCCESS_PAGE))
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Err(e)
        }
    }
}
