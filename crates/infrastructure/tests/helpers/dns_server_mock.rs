use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

const TYPE_A: u16 = 1;
const TYPE_AAAA: u16 = 28;

/// What the mock server does with every query it receives.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Answer A queries with `v4` and AAAA queries with `v6`.
    Records {
        v4: Vec<Ipv4Addr>,
        v6: Vec<Ipv6Addr>,
    },
    NxDomain,
    ServFail,
    /// Never reply.
    Silent,
    /// Reply with a transaction ID that does not match the query.
    WrongId,
    /// Reply over UDP with the TC bit and no answers; the full answer is
    /// only available over TCP on the same port.
    Truncated {
        v4: Vec<Ipv4Addr>,
        v6: Vec<Ipv6Addr>,
    },
}

pub struct MockDnsServer {
    addr: SocketAddr,
    udp_queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(reply: MockReply) -> std::io::Result<Self> {
        let (socket, listener) = bind_pair().await?;
        let addr = socket.local_addr()?;

        let udp_queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_counter = Arc::clone(&udp_queries);
        let tcp_counter = Arc::clone(&tcp_queries);

        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = build_udp_response(&buf[..len], &reply) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = listener.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            tcp_counter.fetch_add(1, Ordering::SeqCst);
                            let reply = reply.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                let response = build_tcp_response(&query, &reply);
                                let len = (response.len() as u16).to_be_bytes();
                                let _ = stream.write_all(&len).await;
                                let _ = stream.write_all(&response).await;
                            });
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            udp_queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn udp_queries(&self) -> usize {
        self.udp_queries.load(Ordering::SeqCst)
    }

    pub fn tcp_queries(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// UDP socket and TCP listener sharing one loopback port.
async fn bind_pair() -> std::io::Result<(UdpSocket, TcpListener)> {
    let mut last_err = None;
    for _ in 0..10 {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        match TcpListener::bind(socket.local_addr()?).await {
            Ok(listener) => return Ok((socket, listener)),
            Err(e) => last_err = Some(e),
        }
    }
    Err(last_err.unwrap_or_else(|| std::io::Error::other("no free port pair")))
}

fn query_type(query: &[u8]) -> Option<u16> {
    // QTYPE and QCLASS are the last four bytes of a single-question query.
    if query.len() < 16 {
        return None;
    }
    let end = query.len();
    Some(u16::from_be_bytes([query[end - 4], query[end - 3]]))
}

fn build_udp_response(query: &[u8], reply: &MockReply) -> Option<Vec<u8>> {
    if query.len() < 12 {
        return None;
    }

    match reply {
        MockReply::Silent => None,
        MockReply::NxDomain => Some(build_response(query, 0x83, &[])),
        MockReply::ServFail => Some(build_response(query, 0x82, &[])),
        MockReply::WrongId => {
            let mut response = build_response(query, 0x80, &[]);
            response[0] ^= 0xFF;
            Some(response)
        }
        MockReply::Records { v4, v6 } => Some(build_response(query, 0x80, &answers(query, v4, v6))),
        MockReply::Truncated { .. } => {
            let mut response = build_response(query, 0x80, &[]);
            response[2] |= 0x02;
            Some(response)
        }
    }
}

fn build_tcp_response(query: &[u8], reply: &MockReply) -> Vec<u8> {
    match reply {
        MockReply::Truncated { v4, v6 } | MockReply::Records { v4, v6 } => {
            build_response(query, 0x80, &answers(query, v4, v6))
        }
        MockReply::NxDomain => build_response(query, 0x83, &[]),
        _ => build_response(query, 0x82, &[]),
    }
}

fn answers(query: &[u8], v4: &[Ipv4Addr], v6: &[Ipv6Addr]) -> Vec<Vec<u8>> {
    match query_type(query) {
        Some(TYPE_A) => v4.iter().map(|ip| ip.octets().to_vec()).collect(),
        Some(TYPE_AAAA) => v6.iter().map(|ip| ip.octets().to_vec()).collect(),
        _ => Vec::new(),
    }
}

/// Header, echoed question, then one answer per rdata with a pointer back
/// to the question name. `rcode_flags` is the second flags byte.
fn build_response(query: &[u8], rcode_flags: u8, rdatas: &[Vec<u8>]) -> Vec<u8> {
    let mut response = Vec::with_capacity(512);

    response.extend_from_slice(&query[0..2]);
    response.push(0x81);
    response.push(rcode_flags);
    response.extend_from_slice(&query[4..6]);
    response.extend_from_slice(&(rdatas.len() as u16).to_be_bytes());
    response.extend_from_slice(&[0x00, 0x00]);
    response.extend_from_slice(&[0x00, 0x00]);

    if query.len() > 12 {
        response.extend_from_slice(&query[12..]);
    }

    let record_type = query_type(query).unwrap_or(TYPE_A).to_be_bytes();
    for rdata in rdatas {
        response.extend_from_slice(&[0xc0, 0x0c]);
        response.extend_from_slice(&record_type);
        response.extend_from_slice(&[0x00, 0x01]);
        response.extend_from_slice(&[0x00, 0x00, 0x00, 0x3c]);
        response.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        response.extend_from_slice(rdata);
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_echoes_id_and_counts_answers() {
        let mut query = vec![0xab, 0xcd, 0x01, 0x00, 0x00, 0x01, 0, 0, 0, 0, 0, 0];
        query.extend_from_slice(&[7, b'e', b'x', b'a', b'm', b'p', b'l', b'e', 3, b'c', b'o', b'm', 0]);
        query.extend_from_slice(&[0x00, 0x01, 0x00, 0x01]);

        let reply = MockReply::Records {
            v4: vec![Ipv4Addr::new(192, 0, 2, 1), Ipv4Addr::new(192, 0, 2, 2)],
            v6: vec![],
        };
        let response = build_udp_response(&query, &reply).unwrap();

        assert_eq!(response[0..2], [0xab, 0xcd]);
        assert_eq!(response[2], 0x81);
        assert_eq!(response[6..8], [0x00, 0x02]);
    }
}
