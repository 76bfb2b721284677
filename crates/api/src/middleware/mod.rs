pub mod cors;

pub use cors::cors_for_sites;
