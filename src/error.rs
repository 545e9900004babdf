// SPDX-License-Identifier: MPL-2.0
use std::fmt;

/// Failures surfaced by the artwork API boundary.
///
/// Transport problems, non-success HTTP statuses, and responses that do not
/// match the expected schema are kept as separate variants for diagnostics,
/// but are reported to the user uniformly as "fetch failed".
#[derive(Debug, Clone)]
pub enum Error {
    /// Transport-level failure (DNS, TLS, connection reset, ...).
    Http(String),
    /// The server answered with a non-2xx status code.
    Status(u16),
    /// The response body did not match the expected schema.
    Malformed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "HTTP Error: {}", e),
            Error::Status(code) => write!(f, "HTTP Status: {}", code),
            Error::Malformed(e) => write!(f, "Malformed Response: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Error::Malformed(err.to_string())
        } else if let Some(status) = err.status() {
            Error::Status(status.as_u16())
        } else {
            Error::Http(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_http_error() {
        let err = Error::Http("connection refused".to_string());
        assert_eq!(format!("{}", err), "HTTP Error: connection refused");
    }

    #[test]
    fn display_formats_status_error() {
        let err = Error::Status(503);
        assert_eq!(format!("{}", err), "HTTP Status: 503");
    }

    #[test]
    fn display_formats_malformed_error() {
        let err = Error::Malformed("missing field `pagination`".to_string());
        assert!(format!("{}", err).contains("missing field"));
    }
}
