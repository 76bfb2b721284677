use axum::http::{Method, StatusCode, Uri};
use tracing::debug;

/// Answers CORS preflight requests; the headers come from the CORS layer.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed(method: Method) -> StatusCode {
    debug!(method = %method, "Method not allowed");
    StatusCode::METHOD_NOT_ALLOWED
}

pub async fn not_found(uri: Uri) -> StatusCode {
    debug!(path = uri.path(), "No such path");
    StatusCode::NOT_FOUND
}
