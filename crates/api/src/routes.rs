use crate::handlers;
use crate::middleware::cors_for_sites;
use crate::state::AppState;
use axum::{middleware, routing::get, Router};

pub fn create_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/",
            get(handlers::check_ip)
                .head(handlers::method_not_allowed)
                .options(handlers::preflight)
                .fallback(handlers::method_not_allowed),
        )
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(state.clone(), cors_for_sites))
        .with_state(state)
}
