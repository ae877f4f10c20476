//! HTML rendering boundary.
//!
//! The resource handlers hand their simplified records to this module and
//! get a complete page back: a heading, a list, a link back to the menu.
//! All user-controlled strings pass through [`escape`] before landing in
//! markup.

use axum::response::Html;

use crate::types::{
    PlaylistView, RecentTrackView, RecommendedTrackView, TopArtistView, TopTrackView,
};

pub fn index_page() -> Html<String> {
    page(
        "Tunescope",
        "<p>Explore your personalized Spotify listening data.</p>\
         <p><a href=\"/login\">Log in with Spotify</a></p>"
            .to_string(),
    )
}

pub fn menu_page() -> Html<String> {
    page(
        "Menu",
        "<ul>\
         <li><a href=\"/playlists\">Your playlists</a></li>\
         <li><a href=\"/recently-played\">Recently played</a></li>\
         <li><a href=\"/top-artists\">Top artists</a></li>\
         <li><a href=\"/top-songs\">Top songs</a></li>\
         <li><a href=\"/recommendations\">Recommendations</a></li>\
         </ul>"
            .to_string(),
    )
}

pub fn playlists_page(playlists: &[PlaylistView]) -> Html<String> {
    let items: String = playlists
        .iter()
        .map(|playlist| {
            format!(
                "<li>{image}<a href=\"{url}\">{name}</a> by {owner} ({total} tracks)</li>",
                image = image_tag(&playlist.image),
                url = escape(&playlist.spotify_url),
                name = escape(&playlist.name),
                owner = escape(&playlist.owner),
                total = playlist.total_tracks,
            )
        })
        .collect();
    page("Your playlists", list(items))
}

pub fn recently_played_page(tracks: &[RecentTrackView]) -> Html<String> {
    let items: String = tracks
        .iter()
        .map(|track| {
            format!(
                "<li>{image}<a href=\"{url}\">{name}</a> by {artists} — {album} (played {played_at})</li>",
                image = image_tag(&track.image_url),
                url = escape(&track.spotify_url),
                name = escape(&track.track_name),
                artists = escape(&track.artist_name),
                album = escape(&track.album_name),
                played_at = escape(&track.played_at),
            )
        })
        .collect();
    page("Recently played", list(items))
}

pub fn top_artists_page(artists: &[TopArtistView]) -> Html<String> {
    let items: String = artists
        .iter()
        .map(|artist| {
            format!(
                "<li>{image}<a href=\"{url}\">{name}</a> ({genres})</li>",
                image = image_tag(&artist.image_url),
                url = escape(&artist.spotify_url),
                name = escape(&artist.artist_name),
                genres = escape(&artist.genres),
            )
        })
        .collect();
    page("Top artists", list(items))
}

pub fn top_songs_page(tracks: &[TopTrackView]) -> Html<String> {
    let items: String = tracks
        .iter()
        .map(|track| {
            format!(
                "<li>{image}<a href=\"{url}\">{name}</a> by {artists} — {album} ({duration})</li>",
                image = image_tag(&track.image_url),
                url = escape(&track.spotify_url),
                name = escape(&track.track_name),
                artists = escape(&track.artist_name),
                album = escape(&track.album_name),
                duration = format_duration(track.duration_secs),
            )
        })
        .collect();
    page("Top songs", list(items))
}

pub fn recommendations_page(tracks: &[RecommendedTrackView]) -> Html<String> {
    let items: String = tracks
        .iter()
        .map(|track| {
            format!(
                "<li>{image}<a href=\"{url}\">{name}</a> by {artists} — {album}</li>",
                image = image_tag(&track.image_url),
                url = escape(&track.spotify_url),
                name = escape(&track.track_name),
                artists = escape(&track.artist_name),
                album = escape(&track.album_name),
            )
        })
        .collect();
    page("Recommendations", list(items))
}

fn page(title: &str, body: String) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\
         <html><head><meta charset=\"utf-8\"><title>{title}</title></head>\
         <body><h1>{title}</h1>{body}\
         <p><a href=\"/menu\">Back to menu</a></p></body></html>",
        title = escape(title),
        body = body,
    ))
}

fn list(items: String) -> String {
    format!("<ul>{}</ul>", items)
}

fn image_tag(url: &Option<String>) -> String {
    match url {
        Some(url) => format!("<img src=\"{}\" alt=\"\" width=\"96\"> ", escape(url)),
        None => String::new(),
    }
}

fn format_duration(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
