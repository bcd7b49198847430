//! Subnet arithmetic on resolved (address, mask) pairs.
//!
//! Results are taken modulo 2^32. For /31 and /32 the host range and host
//! count wrap instead of being corrected.

use super::codec::{Ipv4Address, Ipv4Mask};
use std::ops::RangeInclusive;

/// 10.0.0.0/8, 172.16.0.0/12 and 192.168.0.0/16 as closed intervals.
const PRIVATE_RANGES: [RangeInclusive<u32>; 3] = [
    0x0A00_0000..=0x0AFF_FFFF,
    0xAC10_0000..=0xAC1F_FFFF,
    0xC0A8_0000..=0xC0A8_FFFF,
];

/// Bitwise complement of the mask.
pub fn wildcard(mask: Ipv4Mask) -> u32 {
    !mask
}

/// Get the network address for a given address and mask.
pub fn network(addr: Ipv4Address, mask: Ipv4Mask) -> Ipv4Address {
    addr & mask
}

/// Calculate the broadcast address for a given address and mask.
pub fn broadcast(addr: Ipv4Address, mask: Ipv4Mask) -> Ipv4Address {
    network(addr, mask) | wildcard(mask)
}

pub fn first_host(addr: Ipv4Address, mask: Ipv4Mask) -> Ipv4Address {
    network(addr, mask).wrapping_add(1)
}

pub fn last_host(addr: Ipv4Address, mask: Ipv4Mask) -> Ipv4Address {
    broadcast(addr, mask).wrapping_sub(1)
}

/// Number of usable hosts, `2^(32 - len) - 2` for a prefix mask.
///
/// # Examples
/// ```
/// use ipv4_calc::models::host_count;
/// assert_eq!(host_count(0xFFFFFF00), 254);
/// assert_eq!(host_count(0xFFFFFFFF), u32::MAX);
/// ```
pub fn host_count(mask: Ipv4Mask) -> u32 {
    wildcard(mask).wrapping_sub(1)
}

/// True if `addr` lies in one of the RFC 1918 private ranges.
pub fn is_private(addr: Ipv4Address) -> bool {
    PRIVATE_RANGES.iter().any(|range| range.contains(&addr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{mask_from_prefix, to_integer, MAX_LENGTH};

    fn ip(s: &str) -> u32 {
        to_integer(s).unwrap()
    }

    #[test]
    fn test_wildcard() {
        assert_eq!(wildcard(0xFFFFFF00), 0x000000FF);
        assert_eq!(wildcard(0), u32::MAX);
        assert_eq!(wildcard(u32::MAX), 0);
    }

    #[test]
    fn test_network_and_broadcast() {
        let addr = ip("192.168.1.42");
        assert_eq!(network(addr, mask_from_prefix(24).unwrap()), ip("192.168.1.0"));
        assert_eq!(network(addr, mask_from_prefix(16).unwrap()), ip("192.168.0.0"));
        assert_eq!(network(addr, mask_from_prefix(8).unwrap()), ip("192.0.0.0"));
        assert_eq!(network(addr, mask_from_prefix(32).unwrap()), addr);
        assert_eq!(
            broadcast(addr, mask_from_prefix(24).unwrap()),
            ip("192.168.1.255")
        );
        assert_eq!(
            broadcast(addr, mask_from_prefix(8).unwrap()),
            ip("192.255.255.255")
        );
        assert_eq!(broadcast(addr, mask_from_prefix(0).unwrap()), u32::MAX);
    }

    #[test]
    fn test_network_broadcast_invariants() {
        let addrs = [0, 1, ip("10.1.2.3"), ip("128.0.0.1"), ip("200.7.8.9"), u32::MAX];
        for addr in addrs {
            for bits in 0..=MAX_LENGTH {
                let mask = mask_from_prefix(bits).unwrap();
                let net = network(addr, mask);
                let bcast = broadcast(addr, mask);
                assert_eq!(net & wildcard(mask), 0);
                assert_eq!(bcast, net | wildcard(mask));
                assert!(bcast >= net, "{addr:#x}/{bits}");
            }
        }
    }

    #[test]
    fn test_host_range() {
        let addr = ip("192.168.1.10");
        let mask = mask_from_prefix(24).unwrap();
        assert_eq!(first_host(addr, mask), ip("192.168.1.1"));
        assert_eq!(last_host(addr, mask), ip("192.168.1.254"));

        let top = ip("250.1.1.1");
        let mask = mask_from_prefix(30).unwrap();
        assert_eq!(first_host(top, mask), ip("250.1.1.1"));
        assert_eq!(last_host(top, mask), ip("250.1.1.2"));
    }

    #[test]
    fn test_host_range_wraps() {
        let mask = mask_from_prefix(32).unwrap();
        assert_eq!(first_host(u32::MAX, mask), 0);
        assert_eq!(last_host(0, mask), u32::MAX);
        // /31: first host lands on the broadcast, last host on the network
        let mask = mask_from_prefix(31).unwrap();
        assert_eq!(first_host(ip("10.0.0.4"), mask), ip("10.0.0.5"));
        assert_eq!(last_host(ip("10.0.0.4"), mask), ip("10.0.0.4"));
    }

    #[test]
    fn test_host_count() {
        assert_eq!(host_count(mask_from_prefix(0).unwrap()), 4294967294);
        assert_eq!(host_count(mask_from_prefix(8).unwrap()), 16777214);
        assert_eq!(host_count(mask_from_prefix(16).unwrap()), 65534);
        assert_eq!(host_count(mask_from_prefix(24).unwrap()), 254);
        assert_eq!(host_count(mask_from_prefix(28).unwrap()), 14);
        assert_eq!(host_count(mask_from_prefix(30).unwrap()), 2);
        assert_eq!(host_count(mask_from_prefix(31).unwrap()), 0);
        assert_eq!(host_count(mask_from_prefix(32).unwrap()), 4294967295);
    }

    #[test]
    fn test_is_private() {
        assert!(is_private(ip("10.1.2.3")));
        assert!(is_private(ip("172.16.0.1")));
        assert!(is_private(ip("192.168.1.1")));
        assert!(!is_private(ip("8.8.8.8")));
    }

    #[test]
    fn test_is_private_boundaries() {
        assert!(!is_private(ip("9.255.255.255")));
        assert!(is_private(ip("10.0.0.0")));
        assert!(is_private(ip("10.255.255.255")));
        assert!(!is_private(ip("11.0.0.0")));
        assert!(!is_private(ip("172.15.255.255")));
        assert!(is_private(ip("172.31.255.255")));
        assert!(!is_private(ip("172.32.0.0")));
        assert!(!is_private(ip("192.167.255.255")));
        assert!(is_private(ip("192.168.255.255")));
        assert!(!is_private(ip("192.169.0.0")));
        assert!(!is_private(u32::MAX));
    }
}
