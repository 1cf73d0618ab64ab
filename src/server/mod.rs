//! Functionality for serving rendered specification pages.

pub mod api;
pub mod app;
pub mod errors;
pub mod headers;
pub mod tracing;
