// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.

use thiserror::Error;

/// Errors surfaced by the controller and its parsers.
///
/// Playback failures reported by the embedded player are not errors in this
/// sense; they land in the published snapshot as an error code and are purely
/// observational.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller passed a value outside the accepted domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An inbound payload from the player frame could not be decoded.
    #[error("malformed player event: {0}")]
    MalformedEvent(String),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_invalid_argument() {
        let err = Error::InvalidArgument("volume must be between 0 and 100, got 150".to_string());
        assert_eq!(
            format!("{}", err),
            "invalid argument: volume must be between 0 and 100, got 150"
        );
    }

    #[test]
    fn display_formats_malformed_event() {
        let err = Error::MalformedEvent("unknown event name".to_string());
        assert_eq!(format!("{}", err), "malformed player event: unknown event name");
    }

    #[test]
    fn errors_are_comparable() {
        let a = Error::InvalidArgument("x".to_string());
        let b = Error::InvalidArgument("x".to_string());
        assert_eq!(a, b);
        assert_ne!(a, Error::MalformedEvent("x".to_string()));
    }
}
