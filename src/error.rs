use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

/// Every failure is returned to the caller as-is. Nothing in this crate
/// retries, so callers are free to layer their own retry policy on top.
#[derive(Debug)]
pub enum Error {
    /// A record could not be serialized into the wire JSON shape.
    EncodeError(String),
    /// No response was received: connection failure or unreadable body.
    TransportError(String),
    /// The API answered with a status >= 400.
    ApiError { status: u16, body: String },
    /// The response body is not valid JSON for the expected shape.
    DecodeError(String),
    /// Zone lookup did not return exactly one zone.
    ZoneLookupError { name: String, count: usize },
    InvalidRecord(String),
    ParseError(String),
    IoError(std::io::Error),
}

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::EncodeError(e) => write!(f, "Encode error: {}", e),
            Error::TransportError(e) => write!(f, "Transport error: {}", e),
            Error::ApiError { status, body } if body.is_empty() => {
                write!(f, "API error: HTTP {}", status)
            }
            Error::ApiError { status, body } => write!(f, "API error: HTTP {}: {}", status, body),
            Error::DecodeError(e) => write!(f, "Decode error: {}", e),
            Error::ZoneLookupError { name, count } => {
                write!(f, "expected 1 zone, got {} for {}", count, name)
            }
            Error::InvalidRecord(e) => write!(f, "Invalid record: {}", e),
            Error::ParseError(e) => write!(f, "Parse error: {}", e),
            Error::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Error {
        Error::TransportError(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::IoError(err)
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Error {
        Error::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status() {
        let err = Error::ApiError {
            status: 429,
            body: String::new(),
        };
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "API error: HTTP 429");

        let err = Error::TransportError("connection refused".to_string());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_zone_lookup_error_display() {
        let err = Error::ZoneLookupError {
            name: "example.com".to_string(),
            count: 2,
        };
        assert_eq!(err.to_string(), "expected 1 zone, got 2 for example.com");
    }
}
