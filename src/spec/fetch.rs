//! Retrieval of the specification document from the upstream repository.
//!
//! The upstream (a Gitiles instance) returns file contents base64 encoded when
//! asked for `?format=TEXT`. The whole body is buffered, then decoded.
use std::time::Duration;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;

use super::refs::Ref;
use super::SpecError;

/// Repository that hosts the Go specification.
pub const DEFAULT_UPSTREAM: &str = "https://go.googlesource.com/go";

/// Path of the specification inside the repository.
pub const DEFAULT_DOCUMENT_PATH: &str = "doc/go_spec.html";

/// Client for the upstream document endpoint.
#[derive(Debug, Clone)]
pub struct Upstream {
    /// Shared HTTP client. Cheap to clone, pools connections internally.
    client: reqwest::Client,
    /// Repository root, e.g. `https://go.googlesource.com/go`
    base: Url,
    /// Path of the document inside the repository
    document_path: String,
}

impl Upstream {
    /// Create a client for the document at `document_path` in the repository at `base`.
    ///
    /// # Errors
    /// Errors if the underlying HTTP client cannot be built (e.g. no TLS backend).
    pub fn new(base: Url, document_path: &str, timeout: Option<Duration>) -> anyhow::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(duration) = timeout {
            builder = builder.timeout(duration);
        }
        Ok(Self {
            client: builder.build()?,
            base,
            document_path: document_path.trim_matches('/').to_owned(),
        })
    }

    /// The URL the document is fetched from at `reference`.
    #[must_use]
    pub fn document_url(&self, reference: &Ref) -> String {
        format!(
            "{}/+/{}/{}?format=TEXT",
            self.base.as_str().trim_end_matches('/'),
            reference.as_str(),
            self.document_path
        )
    }

    /// Fetch the document at `reference` and return it decoded.
    ///
    /// The ref is validated before any network activity.
    ///
    /// # Errors
    /// - [`SpecError::InvalidRef`] if `reference` is not a valid ref
    /// - [`SpecError::Transport`] if the upstream is unreachable or the body can't be read
    /// - [`SpecError::UpstreamStatus`] if the upstream does not answer with a 2xx
    /// - [`SpecError::Base64`] or [`SpecError::Utf8`] if the body does not decode
    #[tracing::instrument(name = "Fetching specification", skip(self))]
    pub async fn fetch(&self, reference: &str) -> Result<String, SpecError> {
        let reference = Ref::parse(reference)?;
        let url = self.document_url(&reference);
        tracing::debug!(url, "Requesting upstream document");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|source| SpecError::Transport {
                    url: url.clone(),
                    source,
                })?;

        let status = response.status();
        tracing::debug!(url, status = status.as_u16(), "Upstream responded");
        if !status.is_success() {
            return Err(SpecError::UpstreamStatus {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| SpecError::Transport { url, source })?;
        decode(&body)
    }
}

/// Decode a base64 `?format=TEXT` body into the document it wraps.
///
/// ASCII whitespace (line wrapping, the trailing newline) is ignored.
///
/// # Errors
/// Errors if `body` is not base64 or the decoded bytes are not UTF-8.
pub fn decode(body: &str) -> Result<String, SpecError> {
    let compact: String = body.split_ascii_whitespace().collect();
    let bytes = STANDARD
        .decode(compact)
        .map_err(|source| SpecError::Base64 { source })?;
    String::from_utf8(bytes).map_err(|source| SpecError::Utf8 { source })
}
