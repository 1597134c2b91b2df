//! Error types for the remote catalog client.

use thiserror::Error;

/// Errors raised by catalog requests.
///
/// Both kinds are terminal for the single request that raised them and
/// never affect unrelated operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a usable response: connection failure,
    /// timeout, or a body that was not the expected JSON shape.
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-success status. `message` carries
    /// the response body text, which is the best message the server offers.
    #[error("service returned {status}: {message}")]
    Service { status: u16, message: String },
}

impl ApiError {
    /// Message suitable for the UI flash line.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(source) => format!("Request failed: {}", source),
            ApiError::Service { status, message } => {
                if message.trim().is_empty() {
                    format!("Server error (HTTP {})", status)
                } else {
                    format!("Server error (HTTP {}): {}", status, message.trim())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_message_includes_body_text() {
        let err = ApiError::Service {
            status: 400,
            message: "price must be positive".to_string(),
        };
        assert_eq!(
            err.user_message(),
            "Server error (HTTP 400): price must be positive"
        );
    }

    #[test]
    fn service_message_without_body_names_status_only() {
        let err = ApiError::Service {
            status: 502,
            message: "  ".to_string(),
        };
        assert_eq!(err.user_message(), "Server error (HTTP 502)");
    }
}
