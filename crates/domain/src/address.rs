use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
    V4,
    V6,
}

impl AddressFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddressFamily::V4 => "IPv4",
            AddressFamily::V6 => "IPv6",
        }
    }

    /// Address width in bits, which is also the widest usable prefix.
    pub fn max_prefix(&self) -> u8 {
        match self {
            AddressFamily::V4 => 32,
            AddressFamily::V6 => 128,
        }
    }
}

impl fmt::Display for AddressFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A remote address as it was presented to us, sorted into a family.
///
/// The original text is kept verbatim for display; the parsed address is
/// what subnet checks run against. For IPv6 the parsed address drops any
/// `%zone` suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedAddress {
    V4 { text: String, addr: Ipv4Addr },
    V6 { text: String, addr: Ipv6Addr },
    Unknown(String),
}

impl ClassifiedAddress {
    pub fn classify(text: &str) -> Self {
        if let Ok(addr) = Ipv4Addr::from_str(text) {
            return ClassifiedAddress::V4 {
                text: text.to_string(),
                addr,
            };
        }

        if let Some(addr) = parse_ipv6_with_zone(text) {
            return ClassifiedAddress::V6 {
                text: text.to_string(),
                addr,
            };
        }

        ClassifiedAddress::Unknown(text.to_string())
    }

    pub fn family(&self) -> Option<AddressFamily> {
        match self {
            ClassifiedAddress::V4 { .. } => Some(AddressFamily::V4),
            ClassifiedAddress::V6 { .. } => Some(AddressFamily::V6),
            ClassifiedAddress::Unknown(_) => None,
        }
    }

    /// Family name used in every rendered format.
    pub fn family_label(&self) -> &'static str {
        self.family().map_or("unknown", |family| family.as_str())
    }

    pub fn text(&self) -> &str {
        match self {
            ClassifiedAddress::V4 { text, .. } | ClassifiedAddress::V6 { text, .. } => text,
            ClassifiedAddress::Unknown(text) => text,
        }
    }

    pub fn ip(&self) -> Option<IpAddr> {
        match self {
            ClassifiedAddress::V4 { addr, .. } => Some(IpAddr::V4(*addr)),
            ClassifiedAddress::V6 { addr, .. } => Some(IpAddr::V6(*addr)),
            ClassifiedAddress::Unknown(_) => None,
        }
    }
}

impl fmt::Display for ClassifiedAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.family_label(), self.text())
    }
}

fn parse_ipv6_with_zone(text: &str) -> Option<Ipv6Addr> {
    let (head, zone) = match text.split_once('%') {
        Some((head, zone)) => (head, Some(zone)),
        None => (text, None),
    };

    if let Some(zone) = zone {
        let zone_ok = !zone.is_empty()
            && zone
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !zone_ok {
            return None;
        }
    }

    Ipv6Addr::from_str(head).ok()
}
