pub mod escape;
pub mod nav_urls;
pub mod negotiation;
pub mod request;

pub use nav_urls::NavUrls;
pub use negotiation::negotiate_format;
pub use request::{last_header, origin_host, remote_address, request_host};
