//! Errors raised while turning a ref into a rendered specification page.
use derive_more::{Display, Error};

/// Every way a single specification request can fail.
///
/// None of these are retried. The HTTP layer maps each variant onto a status
/// code, see `server::errors`.
#[derive(Debug, Display, Error)]
pub enum SpecError {
    /// The request carried no usable `ref` query parameter.
    #[display(fmt = "ref must be given")]
    MissingRef,
    /// The ref contains characters outside `[A-Za-z0-9/._-]`.
    #[display(fmt = "invalid ref format: {}", reference)]
    InvalidRef {
        /// The rejected ref, as received.
        reference: String,
    },
    /// The upstream could not be reached or its body could not be read.
    #[display(fmt = "unable to fetch {}: {}", url, source)]
    Transport {
        /// Document URL that was requested.
        url: String,
        /// Underlying client error.
        source: reqwest::Error,
    },
    /// The upstream answered with a non-success status.
    #[display(fmt = "upstream responded with {} for {}", status, url)]
    UpstreamStatus {
        /// Document URL that was requested.
        url: String,
        /// HTTP status returned by the upstream.
        status: u16,
    },
    /// The upstream body is not valid base64.
    #[display(fmt = "upstream document is not valid base64: {}", source)]
    Base64 {
        /// Decoder error.
        source: base64::DecodeError,
    },
    /// The decoded document is not valid UTF-8.
    #[display(fmt = "upstream document is not valid UTF-8: {}", source)]
    Utf8 {
        /// Conversion error.
        source: std::string::FromUtf8Error,
    },
    /// The document has no `<!--...-->` descriptor comment.
    #[display(fmt = "description JSON must exist")]
    MissingDescriptor,
    /// The descriptor comment is empty or is not a JSON object.
    #[display(fmt = "malformed description JSON: {}", reason)]
    MalformedDescriptor {
        /// What was wrong with the descriptor.
        reason: String,
    },
}

impl SpecError {
    /// Whether the error was caused by the incoming request rather than the upstream.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingRef | Self::InvalidRef { .. })
    }
}
