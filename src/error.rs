use thiserror::Error;

/// Error types for `Utf8Str` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum Utf8StrError {
    /// Capacity doubling cannot reach the requested size
    #[error("Capacity overflow: cannot grow buffer to hold {required} bytes")]
    CapacityOverflow {
        /// Number of bytes the operation needed
        required: usize,
    },
    /// Value is zero or beyond the Unicode range
    #[error("Invalid codepoint: {value:#x} cannot be stored")]
    InvalidCodepoint {
        /// Rejected codepoint value
        value: u32,
    },
    /// A byte sequence could not be decoded as UTF-8
    #[error("Malformed UTF-8 sequence at byte offset {offset}")]
    MalformedSequence {
        /// Byte offset of the sequence's lead byte
        offset: usize,
    },
    /// Invalid parameters provided to a constructor
    #[error("Invalid Utf8Str initialization: {parameter} = {value}")]
    InvalidConfiguration {
        /// Name of the rejected parameter
        parameter: &'static str,
        /// Provided value
        value: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Utf8StrError>;
