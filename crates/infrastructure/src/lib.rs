//! checkip infrastructure: talking to upstream DNS servers
pub mod dns;
