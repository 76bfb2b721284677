use crate::dns::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use crate::dns::transport::Transport;
use checkip_domain::{DnsQuery, DomainError};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::debug;

/// Result of a single-server query attempt
pub struct QueryAttemptResult {
    pub response: DnsResponse,
    pub server_addr: SocketAddr,
    pub protocol_used: &'static str,
    pub latency_ms: u64,
}

/// Execute a DNS query against a single upstream server.
///
/// Build message, send over UDP, parse. A truncated UDP reply is retried
/// once over TCP with whatever is left of the timeout.
pub async fn query_server(
    server_addr: SocketAddr,
    query: &DnsQuery,
    timeout: Duration,
) -> Result<QueryAttemptResult, DomainError> {
    let start = Instant::now();

    let (query_id, query_bytes) = MessageBuilder::build_query(query)?;

    let udp = Transport::udp(server_addr);
    let udp_response = udp.send(&query_bytes, timeout).await?;
    let mut dns_response = parse_reply(&udp_response.bytes, query_id, server_addr)?;
    let mut protocol_used = udp_response.protocol_used;

    if dns_response.truncated {
        debug!(
            server = %server_addr,
            domain = %query.domain,
            "Response truncated (TC bit), retrying via TCP"
        );

        let remaining = tcp_budget(timeout, start.elapsed()).ok_or_else(|| {
            DomainError::TransportTimeout {
                server: server_addr.to_string(),
            }
        })?;

        let tcp = Transport::tcp(server_addr);
        let tcp_response = tcp.send(&query_bytes, remaining).await?;
        dns_response = parse_reply(&tcp_response.bytes, query_id, server_addr)?;
        protocol_used = tcp_response.protocol_used;
    }

    Ok(QueryAttemptResult {
        response: dns_response,
        server_addr,
        protocol_used,
        latency_ms: start.elapsed().as_millis() as u64,
    })
}

/// Time left for the TCP retry, `None` once the UDP leg has used it all.
fn tcp_budget(timeout: Duration, elapsed: Duration) -> Option<Duration> {
    timeout
        .checked_sub(elapsed)
        .filter(|remaining| !remaining.is_zero())
}

fn parse_reply(
    bytes: &[u8],
    expected_id: u16,
    server_addr: SocketAddr,
) -> Result<DnsResponse, DomainError> {
    match ResponseParser::message_id(bytes) {
        Some(id) if id == expected_id => ResponseParser::parse(bytes),
        Some(id) => Err(DomainError::InvalidDnsResponse(format!(
            "reply from {} has ID {} but query used {}",
            server_addr, id, expected_id
        ))),
        None => Err(DomainError::InvalidDnsResponse(format!(
            "reply from {} is too short",
            server_addr
        ))),
    }
}
