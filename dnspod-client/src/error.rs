use serde::Serialize;
use thiserror::Error;

/// Unified error type for every client operation.
///
/// Three families of failure are distinguished:
///
/// - **Transport** ([`Network`](Self::Network), [`Timeout`](Self::Timeout),
///   [`HttpStatus`](Self::HttpStatus)): the request never produced a 2xx response.
/// - **Decode** ([`Decode`](Self::Decode)): a 2xx body that is not the JSON shape
///   the operation expects.
/// - **Remote rejection** ([`Api`](Self::Api)): the envelope decoded but its
///   `status.code` is not `"1"`. The provider's message is kept verbatim.
#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "kind")]
pub enum ClientError {
    /// Connection, TLS or body-read failure.
    #[error("Network error: {detail}")]
    Network {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    #[error("Request timeout: {detail}")]
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The server answered with a non-2xx HTTP status.
    #[error("POST {url}: {status} {message}")]
    HttpStatus {
        /// Full request URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body, or a truncated body snippet.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("Decode error: {detail}")]
    Decode {
        /// Details about the decode failure.
        detail: String,
    },

    /// The provider rejected the request (`status.code != "1"`).
    #[error("{context}: {message}")]
    Api {
        /// Short phrase naming the operation that failed.
        context: String,
        /// Raw status code returned by the provider (may be empty).
        code: String,
        /// Provider status message, untouched.
        message: String,
    },

    /// The client could not be constructed.
    #[error("Configuration error: {detail}")]
    Config {
        /// Details about the configuration problem.
        detail: String,
    },
}

impl ClientError {
    /// Whether the failure happened before a response body was obtained.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Network { .. } | Self::Timeout { .. } | Self::HttpStatus { .. }
        )
    }

    /// Whether the provider decoded the request and refused it.
    #[must_use]
    pub fn is_api_rejection(&self) -> bool {
        matches!(self, Self::Api { .. })
    }

    /// Provider status code for [`Api`](Self::Api) errors.
    #[must_use]
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Self::Api { code, .. } => Some(code.as_str()),
            _ => None,
        }
    }

    pub(crate) fn decode(detail: impl ToString) -> Self {
        Self::Decode {
            detail: detail.to_string(),
        }
    }
}

/// Convenience type alias for `Result<T, ClientError>`.
pub type Result<T> = std::result::Result<T, ClientError>;
