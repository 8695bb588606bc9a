use std::fmt;

/// Result type for qrsmith-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug)]
pub enum Error {
    /// Tag code is not exactly two decimal digits
    InvalidTagCode(String),

    /// Tag code already used among its siblings
    DuplicateTag(String),

    /// minLength exceeds maxLength
    LengthRange { min: u32, max: u32 },

    /// Arena node reference does not exist
    UnknownNode(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTagCode(code) => {
                write!(f, "invalid tag code {:?}: expected two decimal digits", code)
            }
            Error::DuplicateTag(code) => {
                write!(f, "duplicate tag code {} among siblings", code)
            }
            Error::LengthRange { min, max } => {
                write!(f, "invalid length range: min {} exceeds max {}", min, max)
            }
            Error::UnknownNode(id) => write!(f, "unknown arena node: {}", id),
        }
    }
}

impl std::error::Error for Error {}
