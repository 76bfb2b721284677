pub mod query;
pub mod upstream;

pub use query::{query_server, QueryAttemptResult};
pub use upstream::{UpstreamResolver, PUBLIC_RESOLVERS};
