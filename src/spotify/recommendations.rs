use crate::{
    config,
    error::AppError,
    types::{
        Artist, GenreSeedsResponse, RecommendationsResponse, RecommendedTrackView,
        TopArtistsResponse, TopTracksResponse, Track,
    },
    utils,
};

use super::client::get_json;

const RECOMMENDATIONS_LIMIT: u32 = 100;
const SEED_SOURCE_LIMIT: u32 = 1;

/// Retrieves the provider's list of genres accepted as recommendation
/// seeds.
///
/// # Errors
///
/// Returns [`AppError::UpstreamFetchFailed`] with the provider's status and
/// payload for any non-success response.
pub async fn get_genre_seeds(token: &str) -> Result<Vec<String>, AppError> {
    let api_url = format!(
        "{uri}/recommendations/available-genre-seeds",
        uri = &config::spotify_api_url()
    );
    let response = get_json::<GenreSeedsResponse>(&api_url, token, "available genres").await?;
    Ok(response.genres)
}

/// Retrieves personalized recommendations seeded from the user's taste.
///
/// Gathers up to three seed categories: the single top track, the single
/// top artist, and the artist's genre tags ranked by frequency, filtered
/// against the valid-seed list and falling back to a fixed default set.
/// The seed sub-requests degrade to empty seed lists on failure; the genre
/// fallback keeps the final query valid. Only the final recommendations
/// call is strict.
///
/// # Errors
///
/// Returns [`AppError::UpstreamFetchFailed`] with the provider's status and
/// payload when the final recommendations call answers non-success.
pub async fn get_recommendations(token: &str) -> Result<Vec<RecommendedTrackView>, AppError> {
    let top_tracks = top_seed_tracks(token).await;
    let top_artists = top_seed_artists(token).await;

    let seed_tracks: Vec<String> = top_tracks.iter().map(|track| track.id.clone()).collect();
    let seed_artists: Vec<String> = top_artists.iter().map(|artist| artist.id.clone()).collect();

    let genres: Vec<String> = top_artists
        .iter()
        .flat_map(|artist| artist.genres.iter().cloned())
        .collect();
    let valid_genres = get_genre_seeds(token).await.unwrap_or_default();
    let seed_genres = utils::select_seed_genres(&genres, &valid_genres);

    let mut params: Vec<String> = Vec::new();
    if !seed_artists.is_empty() {
        params.push(format!("seed_artists={}", seed_artists.join(",")));
    }
    if !seed_genres.is_empty() {
        params.push(format!("seed_genres={}", seed_genres.join(",")));
    }
    if !seed_tracks.is_empty() {
        params.push(format!("seed_tracks={}", seed_tracks.join(",")));
    }
    params.push(format!("limit={}", RECOMMENDATIONS_LIMIT));

    let api_url = format!(
        "{uri}/recommendations?{query}",
        uri = &config::spotify_api_url(),
        query = params.join("&")
    );
    let response = get_json::<RecommendationsResponse>(&api_url, token, "recommendations").await?;
    Ok(simplify_recommendations(response))
}

/// Projects recommended tracks into flat records.
pub fn simplify_recommendations(response: RecommendationsResponse) -> Vec<RecommendedTrackView> {
    response
        .tracks
        .into_iter()
        .map(|track| {
            let artist_name = utils::join_artist_names(&track.artists);
            let image_url = utils::primary_image(&track.album.images);
            RecommendedTrackView {
                track_name: track.name,
                artist_name,
                album_name: track.album.name,
                image_url,
                spotify_url: track.external_urls.spotify,
            }
        })
        .collect()
}

async fn top_seed_tracks(token: &str) -> Vec<Track> {
    let api_url = format!(
        "{uri}/me/top/tracks?limit={limit}",
        uri = &config::spotify_api_url(),
        limit = SEED_SOURCE_LIMIT
    );
    get_json::<TopTracksResponse>(&api_url, token, "top tracks")
        .await
        .map(|response| response.items)
        .unwrap_or_default()
}

async fn top_seed_artists(token: &str) -> Vec<Artist> {
    let api_url = format!(
        "{uri}/me/top/artists?limit={limit}",
        uri = &config::spotify_api_url(),
        limit = SEED_SOURCE_LIMIT
    );
    get_json::<TopArtistsResponse>(&api_url, token, "top artists")
        .await
        .map(|response| response.items)
        .unwrap_or_default()
}
