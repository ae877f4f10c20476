use crate::{
    config,
    error::AppError,
    types::{RecentTrackView, RecentlyPlayedResponse},
    utils,
};

use super::client::get_json;

const RECENTLY_PLAYED_LIMIT: u32 = 50;

/// Retrieves the user's listening history, newest first.
///
/// Issues a single authenticated GET against `me/player/recently-played`
/// with a fixed limit of 50; no cursor pagination beyond that page.
///
/// # Errors
///
/// Returns [`AppError::UpstreamFetchFailed`] with the provider's status and
/// payload for any non-success response; no partial list is produced.
pub async fn get_recently_played(token: &str) -> Result<Vec<RecentTrackView>, AppError> {
    let api_url = format!(
        "{uri}/me/player/recently-played?limit={limit}",
        uri = &config::spotify_api_url(),
        limit = RECENTLY_PLAYED_LIMIT
    );
    let response =
        get_json::<RecentlyPlayedResponse>(&api_url, token, "recently played tracks").await?;
    Ok(simplify_recently_played(response))
}

/// Projects play-history items into flat track records, joining artist
/// names and tolerating albums without cover art.
pub fn simplify_recently_played(response: RecentlyPlayedResponse) -> Vec<RecentTrackView> {
    response
        .items
        .into_iter()
        .map(|item| {
            let artist_name = utils::join_artist_names(&item.track.artists);
            let image_url = utils::primary_image(&item.track.album.images);
            RecentTrackView {
                track_name: item.track.name,
                artist_name,
                album_name: item.track.album.name,
                image_url,
                played_at: item.played_at,
                spotify_url: item.track.external_urls.spotify,
            }
        })
        .collect()
}
