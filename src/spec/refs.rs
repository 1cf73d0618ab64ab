//! Validation of the revision a specification is requested at.
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::SpecError;

/// A ref that is safe to interpolate into the upstream URL path.
///
/// Branch names, tags and commit hashes all fit; anything that could escape
/// the path segment (`?`, `#`, `%`, whitespace, ...) does not.
///
/// `.` and `/` are allowed anywhere, so `..` segments pass and the resulting
/// URL may resolve to another repository on the same upstream host. Only the
/// host and the query string are protected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ref(String);

impl Ref {
    /// Validate `reference` and wrap it.
    ///
    /// # Errors
    /// Errors with [`SpecError::InvalidRef`] if `reference` is empty or contains
    /// characters outside `[A-Za-z0-9/._-]`.
    pub fn parse(reference: &str) -> Result<Self, SpecError> {
        if validate(reference) {
            Ok(Self(reference.to_owned()))
        } else {
            Err(SpecError::InvalidRef {
                reference: reference.to_owned(),
            })
        }
    }

    /// The validated ref.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[expect(clippy::expect_used, reason = "The pattern is a literal")]
/// Whether `reference` consists solely of ASCII letters, digits, `/`, `.`, `-` and `_`.
#[must_use]
pub fn validate(reference: &str) -> bool {
    lazy_static! {
        static ref RE: Regex =
            Regex::new(r"^[a-zA-Z0-9/.\-_]+$").expect("Failed to compile regex!?!");
    }
    RE.is_match(reference)
}
