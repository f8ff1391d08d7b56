//! Failure taxonomy for the autocomplete upstream.
//!
//! Every failure talking to the autocomplete service is folded into
//! [`UpstreamError`] and surfaced to HTTP callers as an explicit
//! `502 Bad Gateway` with a JSON body, so an empty city list always means
//! "no cities matched" and never "the upstream broke".

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Errors produced while calling or decoding the autocomplete service.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The request never completed: connect failure, timeout, or a broken
    /// body stream.
    #[error("autocomplete service unreachable: {0}")]
    Unavailable(#[source] reqwest::Error),

    /// The service answered with something other than 200.
    #[error("autocomplete service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not valid JSON.
    #[error("autocomplete response is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    /// The response JSON has no `RESULTS` array.
    #[error("autocomplete response has no RESULTS array")]
    MissingResults,
}

impl UpstreamError {
    /// Stable machine-readable tag for the response body.
    pub fn kind(&self) -> &'static str {
        match self {
            UpstreamError::Unavailable(_) | UpstreamError::Status(_) => "upstream_unavailable",
            UpstreamError::Malformed(_) | UpstreamError::MissingResults => "upstream_malformed",
        }
    }
}

impl IntoResponse for UpstreamError {
    fn into_response(self) -> Response {
        tracing::warn!(error = %self, kind = self.kind(), "autocomplete upstream failure");
        let body = Json(json!({
            "error": self.kind(),
            "detail": self.to_string(),
        }));
        (StatusCode::BAD_GATEWAY, body).into_response()
    }
}
