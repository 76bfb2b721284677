//! Reading client facts out of (possibly proxied) request headers

use axum::http::HeaderMap;
use checkip_domain::config::SiteUrl;
use std::net::SocketAddr;

/// Value of the last occurrence of a header, if it is valid text.
pub fn last_header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(name)
        .iter()
        .last()
        .and_then(|value| value.to_str().ok())
}

/// Address of the client as the outermost proxy reports it.
///
/// `X-Real-IP` wins, then the first hop of `X-Forwarded-For`, then the
/// socket peer. A peer on an IPv4-mapped IPv6 address is reported in plain
/// IPv4 form.
pub fn remote_address(headers: &HeaderMap, peer: Option<SocketAddr>) -> Option<String> {
    if let Some(real_ip) = last_header(headers, "x-real-ip").map(str::trim) {
        if !real_ip.is_empty() {
            return Some(real_ip.to_string());
        }
    }

    if let Some(forwarded_for) = last_header(headers, "x-forwarded-for") {
        let first_hop = forwarded_for.split(',').next().map(str::trim);
        if let Some(first_hop) = first_hop.filter(|hop| !hop.is_empty()) {
            return Some(first_hop.to_string());
        }
    }

    peer.map(|addr| addr.ip().to_canonical().to_string())
}

pub fn request_host(headers: &HeaderMap) -> Option<&str> {
    last_header(headers, "x-forwarded-host").or_else(|| last_header(headers, "host"))
}

/// Host of the `Origin` header, normalized the same way as site hosts.
pub fn origin_host(headers: &HeaderMap) -> Option<String> {
    let origin = last_header(headers, "origin")?;
    SiteUrl::parse(origin)
        .ok()
        .map(|site| site.host().to_string())
}
