pub mod check_ip;
pub mod fallback;

pub use check_ip::check_ip;
pub use fallback::{method_not_allowed, not_found, preflight};
