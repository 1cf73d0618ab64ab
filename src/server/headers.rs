//! Headers used in the Specview server.

/// The ref a rendered page was fetched at.
///
/// Included in every successful response from the `/api/refs` endpoint so the
/// revision can be told apart without parsing the page.
///
/// Example:
///
/// For a URL request: `/api/refs?ref=go1.22.0`
/// the header will be set as:
///
/// `X-Spec-Ref: go1.22.0`
pub const HTTP_X_SPEC_REF: &str = "X-Spec-Ref";
