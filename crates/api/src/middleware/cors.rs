use crate::state::AppState;
use crate::utils::{last_header, origin_host};
use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN,
        },
        HeaderValue,
    },
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Grants cross-origin reads to the three configured sites and nobody
/// else. Only successful responses carry the headers.
pub async fn cors_for_sites(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let allowed_origin = allowed_origin(&state, &request);

    let mut response = next.run(request).await;

    if let Some(origin) = allowed_origin {
        if response.status().is_success() {
            let headers = response.headers_mut();
            headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET"));
            headers.insert(
                ACCESS_CONTROL_ALLOW_HEADERS,
                HeaderValue::from_static("Content-Type"),
            );
        }
    }

    response
}

fn allowed_origin(state: &AppState, request: &Request) -> Option<HeaderValue> {
    let headers = request.headers();
    let host = origin_host(headers)?;

    if !state.sites.is_site_host(&host) {
        debug!(origin_host = %host, "Origin is not one of our sites");
        return None;
    }

    last_header(headers, "origin").and_then(|origin| HeaderValue::from_str(origin).ok())
}
