use http::StatusCode;
use thiserror::Error;

/// Message used when the backend gives us nothing better to show.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred";

/// The client's error type.
///
/// Every variant renders as a message fit for display; callers that only
/// care about "what went wrong" can use [`Error::message`] and ignore the
/// variant.
#[derive(Error, Debug)]
pub enum Error {
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Api {
        /// The HTTP status the backend returned.
        status: StatusCode,
        /// The backend's `detail`, or a message synthesized from the status.
        message: String,
    },

    /// The request never produced a response.
    #[error("An error occurred")]
    Transport(#[source] reqwest::Error),

    /// A success response whose body is not the JSON we expected.
    #[error("An error occurred")]
    Decode(#[source] sonic_rs::Error),

    /// A request body could not be serialized.
    #[error("An error occurred")]
    Encode(#[source] sonic_rs::Error),

    /// A token store read or write failed.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The session context was used outside of a session scope.
    #[error("session context used outside of a session scope")]
    OutsideSessionScope,
}

/// A `Result` type that uses `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds the error for a non-success response.
    ///
    /// `detail` is the backend's human-readable message when the body parsed;
    /// `body_parsed` tells the unparseable case apart from a JSON body that
    /// simply had no usable `detail`.
    pub(crate) fn from_response(status: StatusCode, detail: Option<String>, body_parsed: bool) -> Self {
        let message = match detail {
            Some(detail) if !detail.is_empty() => detail,
            _ if body_parsed => format!("HTTP {}", status.as_u16()),
            _ => format!("{} (HTTP {})", GENERIC_ERROR_MESSAGE, status.as_u16()),
        };

        Error::Api { status, message }
    }

    /// The message carried by this error.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The HTTP status, when the backend produced one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected our credentials.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        tracing::error!("Transport error: {}", e);
        Error::Transport(e)
    }
}

impl From<sonic_rs::Error> for Error {
    fn from(e: sonic_rs::Error) -> Self {
        tracing::error!("Response decode error: {}", e);
        Error::Decode(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Storage(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_becomes_the_message() {
        let err = Error::from_response(StatusCode::FORBIDDEN, Some("Not authorized".into()), true);
        assert_eq!(err.message(), "Not authorized");
        assert_eq!(err.status(), Some(StatusCode::FORBIDDEN));
    }

    #[test]
    fn unparseable_body_mentions_status() {
        let err = Error::from_response(StatusCode::BAD_GATEWAY, None, false);
        assert_eq!(err.message(), "An error occurred (HTTP 502)");
    }

    #[test]
    fn json_body_without_detail_falls_back_to_status() {
        let err = Error::from_response(StatusCode::UNPROCESSABLE_ENTITY, None, true);
        assert_eq!(err.message(), "HTTP 422");
        assert!(!err.is_unauthorized());
    }
}
