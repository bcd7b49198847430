//! The record produced for one parsed input.

use super::calc::{broadcast, first_host, host_count, is_private, last_host, network, wildcard};
use super::codec::{to_text, Ipv4Address, Ipv4Mask};
use serde::{Serialize, Serializer};

/// Whether a default or fallback value was substituted while parsing.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Status {
    Ok,
    Invalid,
}

impl Status {
    pub fn is_ok(&self) -> bool {
        *self == Status::Ok
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Status::Ok => write!(f, "Ok"),
            Status::Invalid => write!(f, "Invalid"),
        }
    }
}

fn dotted<S>(value: &u32, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&to_text(*value))
}

/// Subnet values derived from one (address, mask) pair.
///
/// Address-valued fields serialize as dotted-decimal text.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct ParseResult {
    #[serde(serialize_with = "dotted")]
    pub address: Ipv4Address,
    #[serde(serialize_with = "dotted")]
    pub mask: Ipv4Mask,
    #[serde(serialize_with = "dotted")]
    pub wildcard: u32,
    #[serde(serialize_with = "dotted")]
    pub network: Ipv4Address,
    #[serde(serialize_with = "dotted")]
    pub broadcast: Ipv4Address,
    #[serde(serialize_with = "dotted")]
    pub first_host: Ipv4Address,
    #[serde(serialize_with = "dotted")]
    pub last_host: Ipv4Address,
    pub host_count: u32,
    pub is_private: bool,
    pub status: Status,
}

impl ParseResult {
    /// Derive every field from an already resolved address and mask.
    pub fn compute(address: Ipv4Address, mask: Ipv4Mask, status: Status) -> ParseResult {
        ParseResult {
            address,
            mask,
            wildcard: wildcard(mask),
            network: network(address, mask),
            broadcast: broadcast(address, mask),
            first_host: first_host(address, mask),
            last_host: last_host(address, mask),
            host_count: host_count(mask),
            is_private: is_private(address),
            status,
        }
    }

    /// The seven address-valued fields with their labels, in display order.
    pub fn fields(&self) -> [(&'static str, u32); 7] {
        [
            ("Address", self.address),
            ("Netmask", self.mask),
            ("Wildcard", self.wildcard),
            ("Network", self.network),
            ("Broadcast", self.broadcast),
            ("HostMin", self.first_host),
            ("HostMax", self.last_host),
        ]
    }

    pub fn address_text(&self) -> String {
        to_text(self.address)
    }

    pub fn mask_text(&self) -> String {
        to_text(self.mask)
    }

    pub fn wildcard_text(&self) -> String {
        to_text(self.wildcard)
    }

    pub fn network_text(&self) -> String {
        to_text(self.network)
    }

    pub fn broadcast_text(&self) -> String {
        to_text(self.broadcast)
    }

    pub fn first_host_text(&self) -> String {
        to_text(self.first_host)
    }

    pub fn last_host_text(&self) -> String {
        to_text(self.last_host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{mask_from_prefix, to_integer};

    #[test]
    fn test_compute() {
        let addr = to_integer("172.20.5.9").unwrap();
        let mask = mask_from_prefix(12).unwrap();
        let result = ParseResult::compute(addr, mask, Status::Ok);

        assert_eq!(result.address_text(), "172.20.5.9");
        assert_eq!(result.mask_text(), "255.240.0.0");
        assert_eq!(result.wildcard_text(), "0.15.255.255");
        assert_eq!(result.network_text(), "172.16.0.0");
        assert_eq!(result.broadcast_text(), "172.31.255.255");
        assert_eq!(result.first_host_text(), "172.16.0.1");
        assert_eq!(result.last_host_text(), "172.31.255.254");
        assert_eq!(result.host_count, 1048574);
        assert!(result.is_private);
        assert!(result.status.is_ok());
    }

    #[test]
    fn test_fields_order() {
        let result = ParseResult::compute(0x0A000005, 0xFF000000, Status::Invalid);
        let labels: Vec<&str> = result.fields().iter().map(|(l, _)| *l).collect();
        assert_eq!(
            labels,
            vec!["Address", "Netmask", "Wildcard", "Network", "Broadcast", "HostMin", "HostMax"]
        );
        assert_eq!(result.fields()[3].1, 0x0A000000);
        assert!(!result.status.is_ok());
        assert_eq!(result.status.to_string(), "Invalid");
    }

    #[test]
    fn test_serialize() {
        let result = ParseResult::compute(0xC0A8010A, 0xFFFFFF00, Status::Ok);
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["address"], "192.168.1.10");
        assert_eq!(json["mask"], "255.255.255.0");
        assert_eq!(json["wildcard"], "0.0.0.255");
        assert_eq!(json["broadcast"], "192.168.1.255");
        assert_eq!(json["host_count"], 254);
        assert_eq!(json["is_private"], true);
        assert_eq!(json["status"], "Ok");
    }
}
