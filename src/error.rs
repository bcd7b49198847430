//! Errors raised by the strict codec functions.

use thiserror::Error;

/// Failure of a direct codec call.
///
/// [`crate::parse_input`] never returns this; it substitutes defaults and
/// flags the result [`crate::Status::Invalid`] instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Text did not decode to four octets in 0..=255.
    #[error("invalid dotted-decimal address: {0:?}")]
    Format(String),
    /// Prefix length outside 0..=32.
    #[error("prefix length {0} is outside 0..=32")]
    Range(u8),
}
