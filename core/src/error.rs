//! Error types for request serialization, transport and response pipelines.
//!
//! # Design
//! A single `Error` enum covers every failure the library itself can raise.
//! Pipelines are generic over the caller's error type `E: From<Error>`, so a
//! caller that needs its own variants embeds `Error` with `#[from]` and keeps
//! matching on both. Transport and decode failures box their source so the
//! concrete collaborator error can still be recovered with `downcast_ref`.

use bytes::Bytes;

/// Boxed source error carried by collaborator failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by the client, the URL serializer and the built-in stages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request did not serialize into a parseable URL.
    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The response carried no body to work with.
    #[error("response has no body")]
    EmptyBody,

    /// A `validate` stage rejected the value.
    #[error("validation failed: {0}")]
    ValidationFailed(String),

    /// The decode collaborator could not produce the target type.
    #[error("failed to decode response body: {0}")]
    DecodeFailed(#[source] BoxError),

    /// The transport reported a failure before any response arrived.
    #[error("transport failed: {0}")]
    TransportFailed(#[source] BoxError),

    /// `ensure_success` saw a non-2xx status.
    #[error("HTTP {status}")]
    HttpStatus { status: u16, body: Option<Bytes> },

    /// The transport dropped its completion without reporting an outcome.
    #[error("request abandoned before the transport completed")]
    Abandoned,
}

impl Error {
    /// Short, stable name of the variant, used in trace output.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidUrl { .. } => "invalid_url",
            Error::EmptyBody => "empty_body",
            Error::ValidationFailed(_) => "validation_failed",
            Error::DecodeFailed(_) => "decode_failed",
            Error::TransportFailed(_) => "transport_failed",
            Error::HttpStatus { .. } => "http_status",
            Error::Abandoned => "abandoned",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_url_display_names_the_url() {
        let source = url::Url::parse("http://").unwrap_err();
        let err = Error::InvalidUrl {
            url: "http://".to_string(),
            source,
        };
        let message = err.to_string();
        assert!(message.contains("`http://`"), "{message}");
        assert_eq!(err.kind(), "invalid_url");
    }

    #[test]
    fn decode_failed_keeps_source_for_downcast() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = Error::DecodeFailed(Box::new(json_err));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.downcast_ref::<serde_json::Error>().is_some());
    }

    #[test]
    fn http_status_display() {
        let err = Error::HttpStatus {
            status: 503,
            body: None,
        };
        assert_eq!(err.to_string(), "HTTP 503");
    }
}
