use base64::{Engine, engine::general_purpose::STANDARD};

pub const TOKEN_PREVIEW_LEN: usize = 10;

/// Builds the value of a basic `Authorization` header for the token endpoint.
pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Formats a duration in milliseconds as minutes with two decimals.
///
/// `210000` becomes `"3.50"`. Halfway values round up, so `187500` becomes
/// `"3.13"`.
pub fn duration_minutes(duration_ms: u64) -> String {
    let centi = (duration_ms * 100 + 30_000) / 60_000;
    format!("{}.{:02}", centi / 100, centi % 100)
}

/// Shortened form of a token that is safe to show on a public page.
pub fn token_preview(token: Option<&str>) -> String {
    match token {
        Some(t) if !t.is_empty() => {
            let head: String = t.chars().take(TOKEN_PREVIEW_LEN).collect();
            format!("{}...", head)
        }
        _ => "Not available".to_string(),
    }
}

/// Whether the supplied key unlocks the full token.
///
/// Plain string comparison. An unset or empty secret never matches.
pub fn secret_matches(provided: Option<&str>, secret: Option<&str>) -> bool {
    match (provided, secret) {
        (Some(p), Some(s)) if !s.is_empty() => p == s,
        _ => false,
    }
}

/// Escapes text for inclusion in an HTML page.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
