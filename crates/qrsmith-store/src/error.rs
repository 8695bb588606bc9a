use std::fmt;

/// Result type for qrsmith-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the store layer
#[derive(Debug)]
pub enum Error {
    /// Journey id not known to the store
    JourneyNotFound(String),

    /// Template id not known to the store
    TemplateNotFound(u32),

    /// No config binds the given template to the given journey
    ConfigNotFound { journey_id: String, template_id: u32 },

    /// Record with the same identifier already exists
    Duplicate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::JourneyNotFound(id) => write!(f, "journey not found: {}", id),
            Error::TemplateNotFound(id) => write!(f, "template not found: {}", id),
            Error::ConfigNotFound {
                journey_id,
                template_id,
            } => write!(
                f,
                "no config for template {} in journey {}",
                template_id, journey_id
            ),
            Error::Duplicate(id) => write!(f, "record already exists: {}", id),
        }
    }
}

impl std::error::Error for Error {}
