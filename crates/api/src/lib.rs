pub mod dto;
pub mod errors;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;
pub mod utils;

pub use routes::create_routes;
pub use state::{AppState, Sites};
