use crate::address::AddressFamily;
use crate::errors::DomainError;
use ipnetwork::IpNetwork;
use std::net::IpAddr;

/// Prefix lengths used when comparing the requester with resolved records.
///
/// Both sides are always valid for their family: 1..=32 and 1..=128.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetSizes {
    v4: u8,
    v6: u8,
}

impl Default for SubnetSizes {
    fn default() -> Self {
        Self {
            v4: AddressFamily::V4.max_prefix(),
            v6: AddressFamily::V6.max_prefix(),
        }
    }
}

impl SubnetSizes {
    pub fn new(v4: u8, v6: u8) -> Result<Self, DomainError> {
        Ok(Self {
            v4: check_range(AddressFamily::V4, v4)?,
            v6: check_range(AddressFamily::V6, v6)?,
        })
    }

    /// Takes the already-validated query values, falling back to the full
    /// address width for anything missing.
    pub fn from_valid(v4: Option<u8>, v6: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            v4: v4.unwrap_or(defaults.v4),
            v6: v6.unwrap_or(defaults.v6),
        }
    }

    pub fn v4(&self) -> u8 {
        self.v4
    }

    pub fn v6(&self) -> u8 {
        self.v6
    }

    pub fn for_family(&self, family: AddressFamily) -> u8 {
        match family {
            AddressFamily::V4 => self.v4,
            AddressFamily::V6 => self.v6,
        }
    }

    pub fn parse(family: AddressFamily, raw: &str) -> Result<u8, DomainError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::InvalidSubnet(format!(
                "{} subnet must be a number, got '{}'",
                family, raw
            )));
        }

        let value: u8 = raw.parse().map_err(|_| {
            DomainError::InvalidSubnet(format!("{} subnet out of range: {}", family, raw))
        })?;

        check_range(family, value)
    }
}

fn check_range(family: AddressFamily, value: u8) -> Result<u8, DomainError> {
    if (1..=family.max_prefix()).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::InvalidSubnet(format!(
            "{} subnet must be within 1..={}, got {}",
            family,
            family.max_prefix(),
            value
        )))
    }
}

/// True when the leading `prefix` bits of both addresses are equal.
///
/// Addresses of different families never match, and neither does a prefix
/// that is wider than the address.
pub fn prefix_contains(network: IpAddr, candidate: IpAddr, prefix: u8) -> bool {
    if network.is_ipv4() != candidate.is_ipv4() {
        return false;
    }

    match IpNetwork::new(network, prefix) {
        Ok(net) => net.contains(candidate),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(s: &str) -> IpAddr {
        s.parse().unwrap()
    }

    #[test]
    fn test_prefix_contains_splits_inside_a_byte() {
        assert!(prefix_contains(ip("10.0.0.4"), ip("10.0.0.5"), 31));
        assert!(!prefix_contains(ip("10.0.0.5"), ip("10.0.0.6"), 31));
        assert!(!prefix_contains(ip("10.0.0.4"), ip("10.0.0.5"), 32));
    }

    #[test]
    fn test_prefix_contains_rejects_oversized_prefix() {
        assert!(!prefix_contains(ip("10.0.0.4"), ip("10.0.0.4"), 33));
    }

    #[test]
    fn test_prefix_contains_family_mismatch() {
        assert!(!prefix_contains(ip("::ffff:10.0.0.4"), ip("10.0.0.4"), 1));
    }
}
