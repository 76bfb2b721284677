use checkip_domain::{prefix_contains, AddressFamily, DomainError, SubnetSizes};
use std::net::IpAddr;

fn ip(s: &str) -> IpAddr {
    s.parse().unwrap()
}

#[test]
fn test_defaults_are_full_width() {
    let sizes = SubnetSizes::default();

    assert_eq!(sizes.v4(), 32);
    assert_eq!(sizes.v6(), 128);
}

#[test]
fn test_from_valid_fills_missing_sides() {
    let sizes = SubnetSizes::from_valid(Some(24), None);

    assert_eq!(sizes.for_family(AddressFamily::V4), 24);
    assert_eq!(sizes.for_family(AddressFamily::V6), 128);
}

#[test]
fn test_new_rejects_out_of_range() {
    assert!(SubnetSizes::new(0, 64).is_err());
    assert!(SubnetSizes::new(33, 64).is_err());
    assert!(SubnetSizes::new(24, 129).is_err());
    assert!(SubnetSizes::new(1, 1).is_ok());
    assert!(SubnetSizes::new(32, 128).is_ok());
}

#[test]
fn test_parse_accepts_boundaries() {
    assert_eq!(SubnetSizes::parse(AddressFamily::V4, "1"), Ok(1));
    assert_eq!(SubnetSizes::parse(AddressFamily::V4, "32"), Ok(32));
    assert_eq!(SubnetSizes::parse(AddressFamily::V6, "128"), Ok(128));
}

#[test]
fn test_parse_rejects_junk() {
    for raw in ["", "0", "33", "-1", "+8", "24.5", "abc", "999", " 24"] {
        let result = SubnetSizes::parse(AddressFamily::V4, raw);
        assert!(
            matches!(result, Err(DomainError::InvalidSubnet(_))),
            "expected '{}' to be rejected",
            raw
        );
    }
    assert!(SubnetSizes::parse(AddressFamily::V6, "129").is_err());
}

#[test]
fn test_containment_is_reflexive() {
    let v4 = ip("203.0.113.5");
    for prefix in 1..=32 {
        assert!(prefix_contains(v4, v4, prefix), "/{} should contain itself", prefix);
    }

    let v6 = ip("2001:db8::1");
    for prefix in 1..=128 {
        assert!(prefix_contains(v6, v6, prefix), "/{} should contain itself", prefix);
    }
}

#[test]
fn test_containment_same_slash_24() {
    assert!(!prefix_contains(ip("203.0.113.5"), ip("203.0.113.9"), 32));
    assert!(prefix_contains(ip("203.0.113.5"), ip("203.0.113.9"), 24));
    assert!(!prefix_contains(ip("203.0.113.5"), ip("203.0.114.5"), 24));
}

#[test]
fn test_containment_slash_31_boundary() {
    // .4 and .5 share the first 31 bits, .5 and .6 do not
    assert!(prefix_contains(ip("198.51.100.4"), ip("198.51.100.5"), 31));
    assert!(!prefix_contains(ip("198.51.100.4"), ip("198.51.100.5"), 32));
    assert!(!prefix_contains(ip("198.51.100.5"), ip("198.51.100.6"), 31));
    assert!(prefix_contains(ip("198.51.100.5"), ip("198.51.100.6"), 30));
}

#[test]
fn test_containment_slash_127_boundary() {
    assert!(prefix_contains(ip("2001:db8::"), ip("2001:db8::1"), 127));
    assert!(!prefix_contains(ip("2001:db8::"), ip("2001:db8::1"), 128));
    assert!(!prefix_contains(ip("2001:db8::1"), ip("2001:db8::2"), 127));
}

#[test]
fn test_containment_mid_byte_prefix() {
    // 10.0.0.0/12 ends at 10.15.255.255
    assert!(prefix_contains(ip("10.0.0.1"), ip("10.15.255.255"), 12));
    assert!(!prefix_contains(ip("10.0.0.1"), ip("10.16.0.0"), 12));
}

#[test]
fn test_containment_is_symmetric() {
    let a = ip("2001:db8:abcd::1");
    let b = ip("2001:db8:abcd:ff::7");
    for prefix in [32u8, 48, 56, 64] {
        assert_eq!(
            prefix_contains(a, b, prefix),
            prefix_contains(b, a, prefix),
            "asymmetric at /{}",
            prefix
        );
    }
}

#[test]
fn test_containment_never_crosses_families() {
    assert!(!prefix_contains(ip("203.0.113.5"), ip("::ffff:203.0.113.5"), 1));
    assert!(!prefix_contains(ip("::1"), ip("0.0.0.1"), 1));
}
