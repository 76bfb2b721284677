mod dns_resolver;

pub use dns_resolver::{DnsResolution, DnsResolver};

// Re-export for convenience
pub use checkip_domain::DnsQuery;
