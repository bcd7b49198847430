//! Dotted-decimal encoding and prefix mask generation.
//!
//! Addresses and masks are plain `u32` values, most significant octet first.
//! All arithmetic is unsigned, so the upper half of the address space
//! (128.0.0.0 and above) needs no special handling.

use crate::error::CodecError;
use std::net::Ipv4Addr;

/// An IPv4 address as an unsigned 32-bit value.
pub type Ipv4Address = u32;

/// A subnet mask as an unsigned 32-bit value.
pub type Ipv4Mask = u32;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Decode dotted-decimal text into a `u32`.
///
/// Expects exactly four `.`-separated decimal groups, each in 0..=255.
///
/// # Examples
/// ```
/// use ipv4_calc::models::to_integer;
/// assert_eq!(to_integer("192.168.1.10").unwrap(), 0xC0A8010A);
/// assert!(to_integer("192.168.1").is_err());
/// ```
pub fn to_integer(text: &str) -> Result<Ipv4Address, CodecError> {
    let parts: Vec<&str> = text.split('.').collect();
    if parts.len() != 4 {
        return Err(CodecError::Format(text.to_string()));
    }

    let mut value: u32 = 0;
    for part in parts {
        // u8::from_str accepts a leading '+'
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CodecError::Format(text.to_string()));
        }
        let octet: u8 = part
            .parse()
            .map_err(|_| CodecError::Format(text.to_string()))?;
        value = (value << 8) | u32::from(octet);
    }
    Ok(value)
}

/// Encode a `u32` as dotted-decimal text.
pub fn to_text(value: Ipv4Address) -> String {
    Ipv4Addr::from(value).to_string()
}

/// Convert a CIDR prefix length to a subnet mask.
///
/// # Examples
/// ```
/// use ipv4_calc::models::mask_from_prefix;
/// assert_eq!(mask_from_prefix(24).unwrap(), 0xFFFFFF00);
/// assert!(mask_from_prefix(33).is_err());
/// ```
pub fn mask_from_prefix(bits: u8) -> Result<Ipv4Mask, CodecError> {
    if bits > MAX_LENGTH {
        Err(CodecError::Range(bits))
    } else {
        Ok(prefix_mask(bits))
    }
}

/// Caller guarantees `bits <= 32`.
fn prefix_mask(bits: u8) -> Ipv4Mask {
    match bits {
        0 => 0,
        MAX_LENGTH => u32::MAX,
        n => u32::MAX << (MAX_LENGTH - n),
    }
}

/// Infer a mask from the legacy class of `address`.
///
/// Class A (leading bit `0`) gives /8, class B (`10`) gives /16 and
/// class C (`110`) gives /24. Everything from 224.0.0.0 up falls back to /28,
/// which is not a real classful rule for classes D and E.
pub fn classful_mask(address: Ipv4Address) -> Ipv4Mask {
    let bits = match address.leading_ones() {
        0 => 8,
        1 => 16,
        2 => 24,
        _ => 28,
    };
    prefix_mask(bits)
}
