//! Core IPv4 arithmetic.
//!
//! - [`codec`] - dotted-decimal encoding and mask generation
//! - [`calc`] - subnet values derived from an address and a mask
//! - [`report`] - the [`ParseResult`] record handed to the presentation layer

mod calc;
mod codec;
mod report;

// Re-export public types
pub use calc::{broadcast, first_host, host_count, is_private, last_host, network, wildcard};
pub use codec::{
    classful_mask, mask_from_prefix, to_integer, to_text, Ipv4Address, Ipv4Mask, MAX_LENGTH,
};
pub use report::{ParseResult, Status};
