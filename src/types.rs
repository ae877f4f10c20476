use serde::{Deserialize, Serialize};

/// Successful payload of the provider's token endpoint.
///
/// `refresh_token` is optional because refresh responses may omit it, in
/// which case the previously stored one stays in effect.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: i64,
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumRef {
    pub name: String,
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistsResponse {
    #[serde(default)]
    pub items: Vec<Option<Playlist>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Playlist {
    pub name: String,
    pub images: Option<Vec<Image>>,
    pub owner: PlaylistOwner,
    pub tracks: PlaylistTracks,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistOwner {
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistTracks {
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecentlyPlayedResponse {
    #[serde(default)]
    pub items: Vec<PlayHistoryItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayHistoryItem {
    pub track: Track,
    pub played_at: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album: AlbumRef,
    pub duration_ms: u64,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopArtistsResponse {
    #[serde(default)]
    pub items: Vec<Artist>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub images: Option<Vec<Image>>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub items: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    #[serde(default)]
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenreSeedsResponse {
    #[serde(default)]
    pub genres: Vec<String>,
}

/// Flat projection of a playlist for display.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistView {
    pub name: String,
    pub image: Option<String>,
    pub owner: String,
    pub total_tracks: u64,
    pub spotify_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecentTrackView {
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub image_url: Option<String>,
    pub played_at: String,
    pub spotify_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopArtistView {
    pub artist_name: String,
    pub genres: String,
    pub image_url: Option<String>,
    pub spotify_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopTrackView {
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub image_url: Option<String>,
    pub duration_secs: u64,
    pub spotify_url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedTrackView {
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub image_url: Option<String>,
    pub spotify_url: String,
}
