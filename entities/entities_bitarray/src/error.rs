//! Error Types
//!
//! Shared error type for every bitarray operation in the workspace. The
//! search, trimming and codec layers return this type unchanged, so callers
//! only ever match on one enum.

use thiserror::Error;

/// Result type alias using [`BitarrayError`]
pub type Result<T> = std::result::Result<T, BitarrayError>;

/// Bitarray operation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BitarrayError {
    /// Argument outside its allowed range or not one of the allowed values
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A value that had to be present was not found
    #[error("not found: {0}")]
    NotFound(String),

    /// A count target exceeds what the sequence can provide
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// A value cannot be represented within the requested width
    #[error("overflow: {0}")]
    Overflow(String),
}

impl BitarrayError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        BitarrayError::InvalidArgument(msg.into())
    }

    /// Create a not found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        BitarrayError::NotFound(msg.into())
    }

    /// Create an out of range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        BitarrayError::OutOfRange(msg.into())
    }

    /// Create an overflow error
    pub fn overflow(msg: impl Into<String>) -> Self {
        BitarrayError::Overflow(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_kind_and_message() {
        let err = BitarrayError::overflow("cannot represent 8 bit integer in 4 bits");
        assert_eq!(
            err.to_string(),
            "overflow: cannot represent 8 bit integer in 4 bits"
        );
        let err = BitarrayError::not_found("1 not in bitarray");
        assert_eq!(err.to_string(), "not found: 1 not in bitarray");
    }

    #[test]
    fn test_constructors_select_variant() {
        assert!(matches!(
            BitarrayError::invalid_argument("x"),
            BitarrayError::InvalidArgument(_)
        ));
        assert!(matches!(
            BitarrayError::out_of_range("x"),
            BitarrayError::OutOfRange(_)
        ));
    }

    #[test]
    fn test_error_is_std_error() {
        fn assert_error<E: std::error::Error>(_: &E) {}
        assert_error(&BitarrayError::invalid_argument("bad"));
    }
}
