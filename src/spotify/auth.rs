use url::{ParseError, Url};

/// Builds the Spotify authorize URL the user is redirected to at login.
///
/// Adds `response_type=code`, `client_id`, `scope` (space separated) and
/// `redirect_uri` to `auth_url`. Values are URL-encoded. No I/O happens here,
/// so the same input always yields the same URL.
///
/// # Errors
///
/// Returns an error if `auth_url` is not a valid absolute URL.
///
/// # Example
///
/// ```
/// let url = build_authorization_url(
///     "https://accounts.spotify.com/authorize",
///     "client-id",
///     "http://localhost:3000/callback",
///     &["user-top-read".to_string()],
/// )?;
/// ```
pub fn build_authorization_url(
    auth_url: &str,
    client_id: &str,
    redirect_uri: &str,
    scopes: &[String],
) -> Result<Url, ParseError> {
    let scope = scopes.join(" ");
    Url::parse_with_params(
        auth_url,
        &[
            ("response_type", "code"),
            ("client_id", client_id),
            ("scope", scope.as_str()),
            ("redirect_uri", redirect_uri),
        ],
    )
}
