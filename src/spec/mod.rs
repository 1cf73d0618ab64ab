//! Fetching, decoding and rendering of the Go language specification.
//!
//! A request flows through these modules in order: [`refs`] validates the
//! requested revision, [`fetch`] pulls the base64 encoded document from the
//! upstream repository and [`render`] wraps the decoded document in one of
//! the [`theme::Theme`] page templates.
pub mod error;
pub mod fetch;
pub mod refs;
pub mod render;
pub mod theme;

pub use error::SpecError;
