//! Query parameters for the refs endpoint.
use url::form_urlencoded;

/// Every `ref` value found in the query string, in order.
///
/// `?ref=master&ref=go1.22` carries two values; only the first is used.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RefsQuery {
    /// Decoded `ref` values
    pub refs: Vec<String>,
}

impl RefsQuery {
    /// Collect the `ref` values from a raw (still percent-encoded) query string.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let refs = form_urlencoded::parse(query.as_bytes())
            .filter(|(key, _)| key == "ref")
            .map(|(_, value)| value.into_owned())
            .collect();
        Self { refs }
    }

    /// The ref to render: the first value, if it is non-empty.
    #[must_use]
    pub fn first(&self) -> Option<&str> {
        self.refs
            .first()
            .map(String::as_str)
            .filter(|reference| !reference.is_empty())
    }
}
