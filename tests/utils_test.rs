use toptracks::types::{PlayHistory, TrackDto, TrackTableRow};
use toptracks::utils::*;

#[test]
fn test_duration_minutes() {
    assert_eq!(duration_minutes(210_000), "3.50");
    assert_eq!(duration_minutes(0), "0.00");
    assert_eq!(duration_minutes(60_000), "1.00");
    assert_eq!(duration_minutes(185_000), "3.08");
    assert_eq!(duration_minutes(359_999), "6.00");

    // Exact halfway values round up
    assert_eq!(duration_minutes(7_500), "0.13");
    assert_eq!(duration_minutes(187_500), "3.13");
    assert_eq!(duration_minutes(232_500), "3.88");
}

#[test]
fn test_token_preview() {
    assert_eq!(token_preview(Some("AQBcdefghijklmnop")), "AQBcdefghi...");
    assert_eq!(token_preview(Some("short")), "short...");
    assert_eq!(token_preview(Some("")), "Not available");
    assert_eq!(token_preview(None), "Not available");

    // Never more than ten characters of the token
    let preview = token_preview(Some("0123456789abcdef"));
    assert_eq!(preview.trim_end_matches("...").len(), TOKEN_PREVIEW_LEN);
}

#[test]
fn test_secret_matches() {
    assert!(secret_matches(Some("s3cret"), Some("s3cret")));
    assert!(!secret_matches(Some("S3CRET"), Some("s3cret")));
    assert!(!secret_matches(None, Some("s3cret")));
    assert!(!secret_matches(Some(""), Some("")));
    assert!(!secret_matches(Some("anything"), None));
}

#[test]
fn test_basic_auth_header() {
    assert_eq!(
        basic_auth_header("client", "secret"),
        "Basic Y2xpZW50OnNlY3JldA=="
    );
}

#[test]
fn test_escape_html() {
    assert_eq!(
        escape_html(r#"<a href="x">&'</a>"#),
        "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
    );
    assert_eq!(escape_html("plain"), "plain");
}

const PLAY_HISTORY: &str = r#"{
  "played_at": "2024-05-01T12:30:00.123Z",
  "context": null,
  "track": {
    "id": "4iV5W9uYEdYUVa79Axb7Rh",
    "name": "Never Gonna Give You Up",
    "uri": "spotify:track:4iV5W9uYEdYUVa79Axb7Rh",
    "duration_ms": 213573,
    "explicit": false,
    "popularity": 77,
    "preview_url": null,
    "external_urls": { "spotify": "https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh" },
    "available_markets": ["DE", "GB", "US"],
    "artists": [
      {
        "id": "0gxyHStUsqpMadRV0Di1Qt",
        "name": "Rick Astley",
        "external_urls": { "spotify": "https://open.spotify.com/artist/0gxyHStUsqpMadRV0Di1Qt" }
      }
    ],
    "album": {
      "id": "6N9PS4QXF1D0OWPk0Sxtb4",
      "name": "Whenever You Need Somebody",
      "release_date": "1987-11-12",
      "images": [{ "url": "https://i.scdn.co/image/abc", "height": 640, "width": 640 }],
      "external_urls": { "spotify": "https://open.spotify.com/album/6N9PS4QXF1D0OWPk0Sxtb4" }
    }
  }
}"#;

#[test]
fn test_track_dto_from_play_history() {
    let item: PlayHistory = serde_json::from_str(PLAY_HISTORY).unwrap();
    let dto = TrackDto::from(item);

    assert_eq!(dto.id.as_deref(), Some("4iV5W9uYEdYUVa79Axb7Rh"));
    assert_eq!(dto.duration_ms, 213_573);
    assert_eq!(dto.duration_minutes, "3.56");
    assert_eq!(dto.available_markets_count, 3);
    assert_eq!(dto.popularity, Some(77));
    assert_eq!(dto.preview_url, None);
    assert_eq!(dto.artists.len(), 1);
    assert_eq!(dto.artists[0].name, "Rick Astley");
    assert_eq!(dto.album.release_date.as_deref(), Some("1987-11-12"));
    assert_eq!(dto.album.images[0].width, Some(640));
    assert_eq!(
        dto.external_url.as_deref(),
        Some("https://open.spotify.com/track/4iV5W9uYEdYUVa79Axb7Rh")
    );

    let json = serde_json::to_value(&dto).unwrap();
    for key in [
        "playedAt",
        "durationMs",
        "durationMinutes",
        "previewUrl",
        "externalUrl",
        "availableMarketsCount",
    ] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    assert_eq!(json["album"]["releaseDate"], "1987-11-12");

    let row = TrackTableRow::from(&dto);
    assert_eq!(row.played_at, "2024-05-01 12:30");
    assert_eq!(row.artists, "Rick Astley");
}

#[test]
fn test_track_without_optional_fields() {
    // Local files come back without ids, markets or popularity
    let json = r#"{
      "played_at": "2024-05-01T12:30:00Z",
      "track": {
        "id": null,
        "name": "Local file",
        "uri": "spotify:local:::Local+file:200",
        "duration_ms": 200000,
        "popularity": null,
        "preview_url": null,
        "artists": [{ "id": null, "name": "Someone" }],
        "album": { "id": null, "name": "", "release_date": null }
      }
    }"#;

    let dto = TrackDto::from(serde_json::from_str::<PlayHistory>(json).unwrap());
    assert_eq!(dto.id, None);
    assert!(!dto.explicit);
    assert_eq!(dto.available_markets_count, 0);
    assert_eq!(dto.external_url, None);
    assert_eq!(dto.duration_minutes, "3.33");
}
