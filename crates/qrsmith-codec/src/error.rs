use qrsmith_types::TagCode;
use std::fmt;

/// Result type for qrsmith-codec operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the codec layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Decode could not extract a valid tag, length field, or value
    /// at the given byte offset
    Malformed { offset: usize, reason: String },

    /// Encode resolved a value longer than the tag allows
    ValueTooLong {
        tag: TagCode,
        length: usize,
        max: usize,
    },

    /// A required tag had no static value and no matching sample-data key
    MissingRequiredValue { tag: TagCode, json_key: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Malformed { offset, reason } => {
                write!(f, "malformed TLV at offset {}: {}", offset, reason)
            }
            Error::ValueTooLong { tag, length, max } => {
                write!(
                    f,
                    "value for tag {} is {} bytes, exceeding the limit of {}",
                    tag, length, max
                )
            }
            Error::MissingRequiredValue { tag, json_key } => {
                write!(
                    f,
                    "required tag {} has no value (jsonKey {:?} not supplied)",
                    tag, json_key
                )
            }
        }
    }
}

impl std::error::Error for Error {}
