use reqwest::Client;

use crate::{
    config,
    error::{AppError, UpstreamDetail},
    types::TokenResponse,
};

/// Builds the provider authorization URL the login route redirects to.
///
/// Carries the client id, `response_type=code`, the configured scope list,
/// the redirect URI and `show_dialog=true` so the consent screen is shown
/// even for previously authorized users. Scope and redirect URI contain
/// characters that must be query-encoded.
///
/// # Example
///
/// ```
/// use axum::response::Redirect;
///
/// let redirect = Redirect::to(&authorize_url());
/// ```
pub fn authorize_url() -> String {
    format!(
        "{auth_url}?client_id={client_id}&response_type=code&scope={scope}&redirect_uri={redirect_uri}&show_dialog=true",
        auth_url = &config::spotify_auth_url(),
        client_id = urlencoding::encode(&config::spotify_client_id()),
        scope = urlencoding::encode(&config::spotify_scope()),
        redirect_uri = urlencoding::encode(&config::spotify_redirect_uri()),
    )
}

/// Exchanges an authorization code for an access/refresh token pair.
///
/// Posts the `authorization_code` grant with the code, redirect URI and
/// client credentials to the provider's token endpoint. The authorization
/// code is single-use and short-lived, so the exchange happens directly in
/// the callback handler.
///
/// # Errors
///
/// Returns [`AppError::TokenExchangeFailed`] carrying the provider's status
/// and payload for any non-success response, and for transport failures
/// where no response arrived.
pub async fn exchange_code(code: &str) -> Result<TokenResponse, AppError> {
    let client_id = config::spotify_client_id();
    let client_secret = config::spotify_client_secret();
    let redirect_uri = config::spotify_redirect_uri();

    let client = Client::new();
    let response = client
        .post(config::spotify_token_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri.as_str()),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|err| AppError::TokenExchangeFailed(UpstreamDetail::from_transport(&err)))?;

    if !response.status().is_success() {
        return Err(AppError::TokenExchangeFailed(
            UpstreamDetail::from_response(response).await,
        ));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|err| AppError::TokenExchangeFailed(UpstreamDetail::from_transport(&err)))
}

/// Exchanges a refresh token for a fresh access token.
///
/// Posts the `refresh_token` grant with the client credentials. The
/// response may omit a new refresh token; deciding whether to keep the old
/// one is the session's concern, not this function's.
///
/// # Errors
///
/// Returns [`AppError::TokenRefreshFailed`] carrying the provider's status
/// and payload for any non-success response, and for transport failures
/// where no response arrived.
pub async fn refresh_token(refresh_token: &str) -> Result<TokenResponse, AppError> {
    let client_id = config::spotify_client_id();
    let client_secret = config::spotify_client_secret();

    let client = Client::new();
    let response = client
        .post(config::spotify_token_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
        ])
        .send()
        .await
        .map_err(|err| AppError::TokenRefreshFailed(UpstreamDetail::from_transport(&err)))?;

    if !response.status().is_success() {
        return Err(AppError::TokenRefreshFailed(
            UpstreamDetail::from_response(response).await,
        ));
    }

    response
        .json::<TokenResponse>()
        .await
        .map_err(|err| AppError::TokenRefreshFailed(UpstreamDetail::from_transport(&err)))
}
