use std::fmt;

/// Result type for tripdeck-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Cycle hours outside the legal 0-11 range
    CycleHoursOutOfRange(f64),

    /// A required trip field was left empty
    MissingField(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::CycleHoursOutOfRange(hours) => {
                write!(f, "cycle hours must be between 0 and 11, got {}", hours)
            }
            Error::MissingField(field) => write!(f, "missing required field: {}", field),
        }
    }
}

impl std::error::Error for Error {}
