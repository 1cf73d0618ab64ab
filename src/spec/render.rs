//! Rendering of a decoded specification document into a full page.
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

use super::theme::Theme;
use super::SpecError;

/// Display metadata embedded at the top of the document as
/// `<!--{"Title": ..., "Subtitle": ...}-->`.
///
/// Fields absent from the JSON render as empty headings.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Descriptor {
    /// Main heading.
    #[serde(rename = "Title")]
    pub title: String,
    /// Secondary heading, also used as the page `<title>`.
    #[serde(rename = "Subtitle")]
    pub subtitle: String,
}

impl Descriptor {
    #[expect(clippy::expect_used, reason = "The pattern is a literal")]
    /// Read the descriptor out of the first HTML comment in `content`.
    ///
    /// # Errors
    /// - [`SpecError::MissingDescriptor`] if `content` has no `<!--...-->` comment
    /// - [`SpecError::MalformedDescriptor`] if the comment is empty or not a JSON object
    pub fn extract(content: &str) -> Result<Self, SpecError> {
        lazy_static! {
            static ref RE: Regex = Regex::new(r"<!--([^>]*)-->").expect("Failed to compile regex!?!");
        }
        let captures = RE.captures(content).ok_or(SpecError::MissingDescriptor)?;
        let raw = captures
            .get(1)
            .map(|capture| capture.as_str())
            .filter(|raw| !raw.trim().is_empty())
            .ok_or_else(|| SpecError::MalformedDescriptor {
                reason: "descriptor comment is empty".to_owned(),
            })?;
        serde_json::from_str(raw).map_err(|err| SpecError::MalformedDescriptor {
            reason: err.to_string(),
        })
    }
}

/// Render `content` as a complete HTML page in `theme`.
///
/// `content` is embedded unmodified, descriptor comment included.
///
/// # Errors
/// Errors if the descriptor can't be read, see [`Descriptor::extract`].
#[tracing::instrument(name = "Rendering page", skip(content), fields(content_len = content.len()))]
pub fn render(content: &str, theme: Theme) -> Result<String, SpecError> {
    let descriptor = Descriptor::extract(content)?;
    tracing::trace!(?descriptor, "Found descriptor");
    Ok(theme.page(&descriptor, content))
}
