use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid subnet size: {0}")]
    InvalidSubnet(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Domain not found (NXDOMAIN)")]
    NxDomain,

    #[error("No {record_type} records for {domain}")]
    NoRecords {
        domain: String,
        record_type: &'static str,
    },

    #[error("Upstream answered {rcode} for {domain}")]
    UpstreamFailure { domain: String, rcode: &'static str },

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },

    #[error("All upstream servers are unreachable")]
    TransportAllServersUnreachable,
}

impl DomainError {
    /// Failures that say nothing about the name itself, only about the
    /// path to the server. The next upstream may still answer.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::Transport { .. }
                | DomainError::InvalidDnsResponse(_)
                | DomainError::TransportAllServersUnreachable
        )
    }
}
