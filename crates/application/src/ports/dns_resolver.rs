use async_trait::async_trait;
use checkip_domain::{DnsQuery, DomainError};
use std::net::IpAddr;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DnsResolution {
    pub addresses: Arc<Vec<IpAddr>>,
    /// Server that produced the answer, when known.
    pub upstream_server: Option<String>,
}

impl DnsResolution {
    pub fn new(addresses: Vec<IpAddr>) -> Self {
        Self {
            addresses: Arc::new(addresses),
            upstream_server: None,
        }
    }

    pub fn from_upstream(addresses: Vec<IpAddr>, upstream_server: impl Into<String>) -> Self {
        Self {
            addresses: Arc::new(addresses),
            upstream_server: Some(upstream_server.into()),
        }
    }
}

/// Looks up the address records of one name and type.
///
/// Implementations return `Ok` only with at least one address of the
/// requested family; NXDOMAIN, empty answers and transport trouble are all
/// `Err`.
#[async_trait]
pub trait DnsResolver: Send + Sync {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError>;
}
