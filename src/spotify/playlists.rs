use crate::{
    config,
    error::AppError,
    types::{PlaylistView, PlaylistsResponse},
    utils,
};

use super::client::get_json;

/// Retrieves the current user's playlists, projected for display.
///
/// Issues a single authenticated GET against `me/playlists` and reshapes
/// the payload with [`simplify_playlists`].
///
/// # Errors
///
/// Returns [`AppError::UpstreamFetchFailed`] with the provider's status and
/// payload for any non-success response; no partial list is produced.
pub async fn get_playlists(token: &str) -> Result<Vec<PlaylistView>, AppError> {
    let api_url = format!("{uri}/me/playlists", uri = &config::spotify_api_url());
    let response = get_json::<PlaylistsResponse>(&api_url, token, "playlists").await?;
    Ok(simplify_playlists(response))
}

/// Projects the provider payload into flat playlist records.
///
/// The provider may interleave `null` entries in `items`; those are
/// skipped. A missing or empty cover image array projects to `None`.
pub fn simplify_playlists(response: PlaylistsResponse) -> Vec<PlaylistView> {
    response
        .items
        .into_iter()
        .flatten()
        .map(|playlist| {
            let image = utils::primary_image(&playlist.images);
            PlaylistView {
                name: playlist.name,
                image,
                owner: playlist.owner.display_name.unwrap_or_default(),
                total_tracks: playlist.tracks.total,
                spotify_url: playlist.external_urls.spotify,
            }
        })
        .collect()
}
