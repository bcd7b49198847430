//! Free-form input parsing.
//!
//! Accepts `A.B.C.D`, `A.B.C.D/N` and `A.B.C.D/E.F.G.H`. Rejected parts are
//! replaced by defaults and the result is flagged [`Status::Invalid`].

use crate::models::{
    classful_mask, mask_from_prefix, to_integer, to_text, Ipv4Address, Ipv4Mask, ParseResult,
    Status,
};
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;

/// 127.0.0.1, used when the address part is rejected.
pub const DEFAULT_ADDRESS: Ipv4Address = 0x7F00_0001;

static ADDRESS_REGEX: OnceLock<Regex> = OnceLock::new();
static PREFIX_REGEX: OnceLock<Regex> = OnceLock::new();

/// Four octets in 0..=255, no leading zeros.
fn get_address_regex() -> &'static Regex {
    ADDRESS_REGEX.get_or_init(|| {
        let octet = r"(?:(?:1[0-9]|[1-9]?)[0-9]|2(?:[0-4][0-9]|5[0-5]))";
        Regex::new(&format!(r"^(?:{octet}\.){{3}}{octet}$")).expect("Invalid Regex")
    })
}

/// Prefix length in 0..=32, no leading zeros.
fn get_prefix_regex() -> &'static Regex {
    PREFIX_REGEX.get_or_init(|| Regex::new(r"^(?:3[012]|[12][0-9]|[0-9])$").expect("Invalid Regex"))
}

fn parse_address(text: &str) -> Option<Ipv4Address> {
    if get_address_regex().is_match(text) {
        to_integer(text).ok()
    } else {
        None
    }
}

fn parse_mask(text: &str) -> Option<Ipv4Mask> {
    if get_prefix_regex().is_match(text) {
        let bits: u8 = text.parse().ok()?;
        return mask_from_prefix(bits).ok();
    }
    // Dotted masks are taken as-is, without a contiguity check.
    parse_address(text)
}

/// Parse free-form input into a [`ParseResult`].
///
/// Never fails. A rejected address becomes 127.0.0.1, a rejected or missing
/// mask becomes the classful mask of the address.
///
/// # Examples
/// ```
/// use ipv4_calc::{parse_input, Status};
/// let result = parse_input("192.168.1.10/24");
/// assert_eq!(result.network_text(), "192.168.1.0");
/// assert_eq!(result.status, Status::Ok);
/// ```
pub fn parse_input(text: &str) -> ParseResult {
    let mut status = Status::Ok;
    let mut entry = text.split('/');

    let address_part = entry.next().unwrap_or_default();
    let address = match parse_address(address_part) {
        Some(address) => address,
        None => {
            log::debug!(
                "Rejected address '{part}', using {default}",
                part = address_part.red(),
                default = to_text(DEFAULT_ADDRESS)
            );
            status = Status::Invalid;
            DEFAULT_ADDRESS
        }
    };

    let mask = match entry.next() {
        Some(mask_part) => match parse_mask(mask_part) {
            Some(mask) => mask,
            None => {
                log::debug!(
                    "Rejected mask '{part}', using classful mask",
                    part = mask_part.red()
                );
                status = Status::Invalid;
                classful_mask(address)
            }
        },
        None => classful_mask(address),
    };

    log::trace!(
        "parse_input({text:?}) address={} mask={} status={status}",
        to_text(address),
        to_text(mask)
    );
    ParseResult::compute(address, mask, status)
}
