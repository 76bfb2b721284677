use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not determine the remote address")]
    MissingRemoteAddress,

    #[error("failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "Request failed");

        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
