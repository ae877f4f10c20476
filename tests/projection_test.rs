use axum::{http::StatusCode, response::IntoResponse};
use serde_json::{Value, json};

use tunescope::error::{AppError, UpstreamDetail};
use tunescope::spotify::{player, playlists, recommendations, top};
use tunescope::types::{
    PlaylistsResponse, RecentlyPlayedResponse, RecommendationsResponse, TokenResponse,
    TopArtistsResponse, TopTracksResponse,
};

#[test]
fn test_playlist_projection_tolerates_missing_images_and_null_entries() {
    let response: PlaylistsResponse = serde_json::from_value(json!({
        "items": [
            {
                "name": "Road Trip",
                "images": [],
                "owner": { "display_name": "ana" },
                "tracks": { "total": 42 },
                "external_urls": { "spotify": "https://open.spotify.com/playlist/1" }
            },
            null,
            {
                "name": "No Art",
                "images": null,
                "owner": { "display_name": null },
                "tracks": { "total": 0 },
                "external_urls": { "spotify": "https://open.spotify.com/playlist/2" }
            }
        ]
    }))
    .unwrap();

    let views = playlists::simplify_playlists(response);

    // The null entry is skipped, not an error
    assert_eq!(views.len(), 2);

    assert_eq!(views[0].name, "Road Trip");
    assert_eq!(views[0].image, None);
    assert_eq!(views[0].owner, "ana");
    assert_eq!(views[0].total_tracks, 42);
    assert_eq!(views[0].spotify_url, "https://open.spotify.com/playlist/1");

    assert_eq!(views[1].image, None);
    assert_eq!(views[1].owner, "");
}

#[test]
fn test_recently_played_projection() {
    let response: RecentlyPlayedResponse = serde_json::from_value(json!({
        "items": [{
            "track": {
                "id": "t1",
                "name": "Song",
                "artists": [
                    { "id": "a1", "name": "Alpha" },
                    { "id": "a2", "name": "Beta" }
                ],
                "album": {
                    "name": "Album",
                    "images": [{ "url": "https://img.example/cover" }]
                },
                "duration_ms": 215000,
                "external_urls": { "spotify": "https://open.spotify.com/track/t1" }
            },
            "played_at": "2024-05-01T10:00:00Z"
        }]
    }))
    .unwrap();

    let views = player::simplify_recently_played(response);

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].track_name, "Song");
    assert_eq!(views[0].artist_name, "Alpha, Beta");
    assert_eq!(views[0].album_name, "Album");
    assert_eq!(
        views[0].image_url,
        Some("https://img.example/cover".to_string())
    );
    assert_eq!(views[0].played_at, "2024-05-01T10:00:00Z");
}

#[test]
fn test_top_artist_without_genres_projects_empty_genre_string() {
    let response: TopArtistsResponse = serde_json::from_value(json!({
        "items": [{
            "id": "a1",
            "name": "Alpha",
            "images": [],
            "external_urls": { "spotify": "https://open.spotify.com/artist/a1" }
        }]
    }))
    .unwrap();

    let views = top::simplify_top_artists(response);

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].artist_name, "Alpha");
    assert_eq!(views[0].genres, "");
    assert_eq!(views[0].image_url, None);
}

#[test]
fn test_top_track_duration_in_whole_seconds() {
    let response: TopTracksResponse = serde_json::from_value(json!({
        "items": [{
            "id": "t1",
            "name": "Song",
            "artists": [{ "id": "a1", "name": "Alpha" }],
            "album": { "name": "Album", "images": [] },
            "duration_ms": 215999,
            "external_urls": { "spotify": "https://open.spotify.com/track/t1" }
        }]
    }))
    .unwrap();

    let views = top::simplify_top_tracks(response);

    assert_eq!(views[0].duration_secs, 215);
}

#[test]
fn test_recommendations_projection() {
    let response: RecommendationsResponse = serde_json::from_value(json!({
        "tracks": [{
            "id": "t9",
            "name": "Suggested",
            "artists": [{ "id": "a9", "name": "Gamma" }],
            "album": { "name": "Elsewhere", "images": null },
            "duration_ms": 180000,
            "external_urls": { "spotify": "https://open.spotify.com/track/t9" }
        }]
    }))
    .unwrap();

    let views = recommendations::simplify_recommendations(response);

    assert_eq!(views.len(), 1);
    assert_eq!(views[0].track_name, "Suggested");
    assert_eq!(views[0].artist_name, "Gamma");
    assert_eq!(views[0].image_url, None);
}

#[test]
fn test_token_response_tolerates_omitted_refresh_token() {
    let response: TokenResponse = serde_json::from_value(json!({
        "access_token": "abc",
        "token_type": "Bearer",
        "expires_in": 3600
    }))
    .unwrap();

    assert_eq!(response.access_token, "abc");
    assert_eq!(response.refresh_token, None);
    assert_eq!(response.expires_in, 3600);
}

#[test]
fn test_error_status_mapping() {
    let denied = AppError::AuthorizationDenied("access_denied".to_string());
    assert_eq!(denied.into_response().status(), StatusCode::BAD_REQUEST);

    assert_eq!(
        AppError::MissingCode.into_response().status(),
        StatusCode::BAD_REQUEST
    );

    let upstream = AppError::UpstreamFetchFailed {
        context: "playlists",
        detail: UpstreamDetail {
            status: Some(401),
            body: Value::String("The access token expired".to_string()),
        },
    };
    assert_eq!(upstream.into_response().status(), StatusCode::BAD_GATEWAY);
}
