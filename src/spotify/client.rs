use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{AppError, UpstreamDetail};

/// Single authenticated GET against the provider API.
///
/// Every resource fetcher funnels through here: one bearer-token request,
/// any non-success status surfaced as [`AppError::UpstreamFetchFailed`]
/// carrying the provider's status and payload, and the success body
/// deserialized into the typed response. Failures are never retried.
pub(crate) async fn get_json<T: DeserializeOwned>(
    url: &str,
    token: &str,
    context: &'static str,
) -> Result<T, AppError> {
    let client = Client::new();
    let response = client
        .get(url)
        .bearer_auth(token)
        .send()
        .await
        .map_err(|err| AppError::UpstreamFetchFailed {
            context,
            detail: UpstreamDetail::from_transport(&err),
        })?;

    if !response.status().is_success() {
        return Err(AppError::UpstreamFetchFailed {
            context,
            detail: UpstreamDetail::from_response(response).await,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|err| AppError::UpstreamFetchFailed {
            context,
            detail: UpstreamDetail::from_transport(&err),
        })
}
