use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// JSON body returned for every failed request.
///
/// `details` carries the upstream status and decoded payload when the
/// failure originated at the provider.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// Status and decoded payload of a failed provider call.
#[derive(Debug, Clone)]
pub struct UpstreamDetail {
    pub status: Option<u16>,
    pub body: Value,
}

impl UpstreamDetail {
    /// Captures the status and body of a non-success provider response.
    ///
    /// The body is decoded as JSON when possible and kept as a raw string
    /// otherwise, so the caller always sees what the provider sent.
    pub async fn from_response(response: reqwest::Response) -> Self {
        let status = Some(response.status().as_u16());
        let body = match response.text().await {
            Ok(text) => serde_json::from_str(&text).unwrap_or(Value::String(text)),
            Err(_) => Value::Null,
        };
        UpstreamDetail { status, body }
    }

    /// Captures a transport-level failure where no usable response arrived.
    pub fn from_transport(err: &reqwest::Error) -> Self {
        UpstreamDetail {
            status: err.status().map(|status| status.as_u16()),
            body: Value::String(err.to_string()),
        }
    }

    fn into_value(self) -> Value {
        json!({ "status": self.status, "body": self.body })
    }
}

/// Everything that can go wrong between the browser and the provider.
///
/// None of these are retried or recovered locally; each maps to a JSON
/// error payload. The only locally recovered condition, an expired access
/// token, never reaches this type: the route gate redirects to the refresh
/// flow before any upstream call is made.
#[derive(Debug, Error)]
pub enum AppError {
    /// The provider reported an error on the authorization callback.
    #[error("{0}")]
    AuthorizationDenied(String),

    /// The callback was reached without a `code` query parameter.
    #[error("Authorization code not provided")]
    MissingCode,

    #[error("Failed to fetch token")]
    TokenExchangeFailed(UpstreamDetail),

    #[error("Failed to refresh token")]
    TokenRefreshFailed(UpstreamDetail),

    /// A resource call answered with a non-success status.
    #[error("Failed to fetch {context}")]
    UpstreamFetchFailed {
        context: &'static str,
        detail: UpstreamDetail,
    },
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::AuthorizationDenied(_) | AppError::MissingCode => StatusCode::BAD_REQUEST,
            AppError::TokenExchangeFailed(_)
            | AppError::TokenRefreshFailed(_)
            | AppError::UpstreamFetchFailed { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.to_string();
        let details = match self {
            AppError::TokenExchangeFailed(detail)
            | AppError::TokenRefreshFailed(detail)
            | AppError::UpstreamFetchFailed { detail, .. } => Some(detail.into_value()),
            AppError::AuthorizationDenied(_) | AppError::MissingCode => None,
        };

        (status, Json(ErrorResponse { error, details })).into_response()
    }
}
