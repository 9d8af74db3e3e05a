use std::fmt;

/// Result type for tripdeck-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the client layer
#[derive(Debug)]
pub enum Error {
    /// Transport-level failure (connection refused, DNS, timeout)
    Http(reqwest::Error),

    /// The service answered with a non-2xx status
    Status { status: u16, body: String },

    /// The response body did not match the expected shape
    Decode(serde_json::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(err) => write!(f, "Network error: {}", err),
            Error::Status { status, body } => {
                if body.is_empty() {
                    write!(f, "Server returned HTTP {}", status)
                } else {
                    write!(f, "Server returned HTTP {}: {}", status, body)
                }
            }
            Error::Decode(err) => write!(f, "Unexpected response shape: {}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Http(err) => Some(err),
            Error::Decode(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Status { .. } | Error::Config(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_with_body() {
        let err = Error::Status {
            status: 400,
            body: "{\"current_cycle_hours\":[\"Ensure this value is less than or equal to 11.\"]}"
                .to_string(),
        };
        assert!(err.to_string().starts_with("Server returned HTTP 400"));
    }

    #[test]
    fn test_status_display_empty_body() {
        let err = Error::Status {
            status: 404,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Server returned HTTP 404");
    }
}
