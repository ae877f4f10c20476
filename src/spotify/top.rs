use crate::{
    config,
    error::AppError,
    types::{TopArtistView, TopArtistsResponse, TopTrackView, TopTracksResponse},
    utils,
};

use super::client::get_json;

const TOP_ITEMS_LIMIT: u32 = 50;
const TOP_TRACKS_TIME_RANGE: &str = "medium_term";

/// Retrieves the user's most listened artists.
///
/// # Errors
///
/// Returns [`AppError::UpstreamFetchFailed`] with the provider's status and
/// payload for any non-success response; no partial list is produced.
pub async fn get_top_artists(token: &str) -> Result<Vec<TopArtistView>, AppError> {
    let api_url = format!(
        "{uri}/me/top/artists?limit={limit}",
        uri = &config::spotify_api_url(),
        limit = TOP_ITEMS_LIMIT
    );
    let response = get_json::<TopArtistsResponse>(&api_url, token, "top artists").await?;
    Ok(simplify_top_artists(response))
}

/// Retrieves the user's most listened tracks over the medium term.
///
/// # Errors
///
/// Returns [`AppError::UpstreamFetchFailed`] with the provider's status and
/// payload for any non-success response; no partial list is produced.
pub async fn get_top_tracks(token: &str) -> Result<Vec<TopTrackView>, AppError> {
    let api_url = format!(
        "{uri}/me/top/tracks?limit={limit}&time_range={time_range}",
        uri = &config::spotify_api_url(),
        limit = TOP_ITEMS_LIMIT,
        time_range = TOP_TRACKS_TIME_RANGE
    );
    let response = get_json::<TopTracksResponse>(&api_url, token, "top tracks").await?;
    Ok(simplify_top_tracks(response))
}

/// Projects artists into flat records; an artist without genre tags gets an
/// empty genre string, one without images gets no image.
pub fn simplify_top_artists(response: TopArtistsResponse) -> Vec<TopArtistView> {
    response
        .items
        .into_iter()
        .map(|artist| {
            let image_url = utils::primary_image(&artist.images);
            TopArtistView {
                artist_name: artist.name,
                genres: artist.genres.join(", "),
                image_url,
                spotify_url: artist.external_urls.spotify,
            }
        })
        .collect()
}

/// Projects tracks into flat records, converting the duration to whole
/// seconds.
pub fn simplify_top_tracks(response: TopTracksResponse) -> Vec<TopTrackView> {
    response
        .items
        .into_iter()
        .map(|track| {
            let artist_name = utils::join_artist_names(&track.artists);
            let image_url = utils::primary_image(&track.album.images);
            TopTrackView {
                track_name: track.name,
                artist_name,
                album_name: track.album.name,
                image_url,
                duration_secs: track.duration_ms / 1000,
                spotify_url: track.external_urls.spotify,
            }
        })
        .collect()
}
