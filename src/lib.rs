//! IPv4 subnet calculator.
//!
//! [`parse_input`] turns text such as `192.168.1.10/24`, `10.0.0.5` or
//! `200.1.1.1/255.255.255.0` into a [`ParseResult`] holding the network,
//! broadcast, wildcard, host range, host count and private-range flag.
//! The strict building blocks live in [`models`].

pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
mod parser;

pub use error::CodecError;
pub use input::{input_from_query, read_lines};
pub use models::{ParseResult, Status};
pub use parser::{parse_input, DEFAULT_ADDRESS};
