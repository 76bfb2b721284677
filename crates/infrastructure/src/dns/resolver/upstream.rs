use super::query::query_server;
use crate::dns::forwarding::ResponseParser;
use async_trait::async_trait;
use checkip_application::ports::{DnsResolution, DnsResolver};
use checkip_domain::{AddressFamily, DnsQuery, DomainError};
use hickory_proto::op::ResponseCode;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Cloudflare first, Google second.
pub const PUBLIC_RESOLVERS: [SocketAddr; 2] = [
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(1, 1, 1, 1)), 53),
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(8, 8, 8, 8)), 53),
];

/// Resolves A/AAAA records against an ordered list of upstream servers.
///
/// Servers are tried in order and each at most once. Only transport
/// failures move on to the next server; any answer the server actually
/// gave (NXDOMAIN, SERVFAIL, an empty section) is final.
pub struct UpstreamResolver {
    servers: Vec<SocketAddr>,
    query_timeout: Duration,
}

impl UpstreamResolver {
    pub fn public(query_timeout: Duration) -> Self {
        Self::with_servers(PUBLIC_RESOLVERS.to_vec(), query_timeout)
    }

    pub fn with_servers(servers: Vec<SocketAddr>, query_timeout: Duration) -> Self {
        info!(
            servers = servers.len(),
            timeout_ms = query_timeout.as_millis() as u64,
            "Upstream DNS resolver created"
        );

        Self {
            servers,
            query_timeout,
        }
    }

    pub fn servers(&self) -> &[SocketAddr] {
        &self.servers
    }
}

#[async_trait]
impl DnsResolver for UpstreamResolver {
    async fn resolve(&self, query: &DnsQuery) -> Result<DnsResolution, DomainError> {
        let mut last_error = None;

        for (position, server) in self.servers.iter().enumerate() {
            let attempt = match query_server(*server, query, self.query_timeout).await {
                Ok(attempt) => attempt,
                Err(e) if e.is_transport_error() => {
                    warn!(
                        server = %server,
                        domain = %query.domain,
                        record_type = %query.record_type,
                        error = %e,
                        position = position,
                        "Failing over"
                    );
                    last_error = Some(e);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let response = attempt.response;

            if response.is_nxdomain() {
                return Err(DomainError::NxDomain);
            }

            if response.rcode != ResponseCode::NoError {
                return Err(DomainError::UpstreamFailure {
                    domain: query.domain.to_string(),
                    rcode: ResponseParser::rcode_to_status(response.rcode),
                });
            }

            let family = query.record_type.family();
            let addresses: Vec<IpAddr> = response
                .addresses
                .into_iter()
                .filter(|ip| matches_family(ip, family))
                .collect();

            if addresses.is_empty() {
                return Err(DomainError::NoRecords {
                    domain: query.domain.to_string(),
                    record_type: query.record_type.as_str(),
                });
            }

            debug!(
                server = %attempt.server_addr,
                protocol = attempt.protocol_used,
                latency_ms = attempt.latency_ms,
                domain = %query.domain,
                record_type = %query.record_type,
                addresses = addresses.len(),
                "Upstream answered"
            );

            return Ok(DnsResolution::from_upstream(
                addresses,
                attempt.server_addr.to_string(),
            ));
        }

        Err(last_error.unwrap_or(DomainError::TransportAllServersUnreachable))
    }
}

fn matches_family(ip: &IpAddr, family: AddressFamily) -> bool {
    match family {
        AddressFamily::V4 => ip.is_ipv4(),
        AddressFamily::V6 => ip.is_ipv6(),
    }
}
