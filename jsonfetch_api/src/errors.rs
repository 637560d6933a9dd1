//! Error types for the fetch pipeline.

use std::error::Error as StdError;

/// Errors that can occur while fetching and decoding a document.
///
/// Each stage of the pipeline produces exactly one variant: the transport
/// stage only yields `Network`, the decode stage only yields `Parse`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request could not be completed (DNS, connect, reset, timeout,
    /// malformed HTTP, or an unusable request target).
    #[error("Network error occurred: {0}")]
    Network(String),
    /// The response body is not valid JSON.
    #[error("Failed to parse JSON response: {0}")]
    Parse(String),
    /// The endpoint signalled an application-level error.
    ///
    /// Reserved: nothing in the default request flow produces it.
    #[error("{message}")]
    Response { message: String, code: Option<u16> },
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Parse,
    Response,
}

impl Error {
    /// Wraps a transport failure, keeping its whole cause chain in the message.
    pub fn network(cause: &(dyn StdError + 'static)) -> Self {
        Self::Network(error_chain(cause))
    }

    /// Wraps a JSON parser failure.
    pub fn parse(cause: &(dyn StdError + 'static)) -> Self {
        Self::Parse(error_chain(cause))
    }

    pub fn response(message: impl Into<String>, code: Option<u16>) -> Self {
        Self::Response {
            message: message.into(),
            code,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Response { .. } => ErrorKind::Response,
        }
    }

    /// Status code carried by a `Response` error.
    pub fn code(&self) -> Option<u16> {
        match self {
            Self::Response { code, .. } => *code,
            _ => None,
        }
    }

    /// Whether repeating the same call could plausibly succeed.
    ///
    /// Only network failures qualify; a malformed payload stays malformed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Network(_))
    }
}

/// Joins an error and its `source()` chain with `": "`.
///
/// reqwest reports the interesting part (e.g. "Connection refused") only in
/// the source chain, so the top-level `Display` alone is not enough. A link
/// whose text repeats the previous link's is skipped.
fn error_chain(err: &(dyn StdError + 'static)) -> String {
    let mut prev = err.to_string();
    let mut msg = prev.clone();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if text != prev {
            msg.push_str(": ");
            msg.push_str(&text);
        }
        prev = text;
        source = cause.source();
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Inner;

    impl fmt::Display for Inner {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "Connection refused")
        }
    }

    impl StdError for Inner {}

    #[derive(Debug)]
    struct Outer(Inner);

    /// An error with a fixed message and an optional cause.
    #[derive(Debug)]
    struct Link(&'static str, Option<Box<Link>>);

    impl fmt::Display for Link {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl StdError for Link {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.1.as_deref().map(|l| l as &(dyn StdError + 'static))
        }
    }

    fn chain(links: &[&'static str]) -> Link {
        links
            .iter()
            .rev()
            .fold(None, |cause, text| Some(Link(*text, cause.map(Box::new))))
            .unwrap()
    }

    impl fmt::Display for Outer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "error sending request")
        }
    }

    impl StdError for Outer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn network_message_includes_cause_chain() {
        let err = Error::network(&Outer(Inner));
        assert_eq!(
            err.to_string(),
            "Network error occurred: error sending request: Connection refused"
        );
        assert_eq!(err.kind(), ErrorKind::Network);
        assert!(err.is_retryable());
    }

    #[test]
    fn single_error_message_is_embedded() {
        let io = std::io::Error::other("Failed to connect");
        let err = Error::network(&io);
        assert_eq!(err.to_string(), "Network error occurred: Failed to connect");
    }

    #[test]
    fn adjacent_duplicate_cause_is_skipped() {
        let err = Error::network(&chain(&["client error", "timed out", "timed out"]));
        assert_eq!(
            err.to_string(),
            "Network error occurred: client error: timed out"
        );
    }

    #[test]
    fn cause_contained_in_earlier_text_is_kept() {
        let err = Error::network(&chain(&["connection reset while reading", "reset"]));
        assert_eq!(
            err.to_string(),
            "Network error occurred: connection reset while reading: reset"
        );
    }

    #[test]
    fn parse_message_embeds_parser_error() {
        let cause = serde_json::from_str::<serde_json::Value>("{not valid json}").unwrap_err();
        let err = Error::parse(&cause);
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to parse JSON response: "));
        assert!(msg.contains("line 1"));
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(!err.is_retryable());
        assert_eq!(err.code(), None);
    }

    #[test]
    fn response_error_carries_optional_code() {
        let err = Error::response("Service unavailable", Some(503));
        assert_eq!(err.to_string(), "Service unavailable");
        assert_eq!(err.code(), Some(503));
        assert_eq!(err.kind(), ErrorKind::Response);
        assert!(!err.is_retryable());

        let err = Error::response("Bad payload", None);
        assert_eq!(err.code(), None);
    }
}
