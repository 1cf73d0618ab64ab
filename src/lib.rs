//! # Specview
//!
//! Specview renders the Go language specification as it exists at any
//! revision of the upstream Go repository.
//!
//! The upstream serves `doc/go_spec.html` as a base64 encoded text blob.
//! Specview fetches that blob for the requested ref, decodes it, reads the
//! JSON descriptor embedded at the top of the document and wraps the whole
//! thing in a browsable page.

// Lints: everything pedantic is a warning during development, CI denies warnings.
#![warn(
    clippy::all,
    missing_docs,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]
#![allow(
    clippy::blanket_clippy_restriction_lints,
    reason = "Restriction lints are opted into wholesale and allowed one by one below"
)]
#![warn(clippy::restriction)]
#![allow(clippy::implicit_return, reason = "This is idiomatic Rust")]
#![allow(
    clippy::multiple_crate_versions,
    reason = "reqwest and actix pull in overlapping transitive versions"
)]
#![allow(
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    reason = "Not a no-std crate"
)]
#![allow(clippy::mod_module_files, reason = "mod.rs is more conventional")]
#![allow(
    clippy::missing_inline_in_public_items,
    reason = "Rendering is dominated by the upstream round trip, inlining hints buy nothing"
)]
#![allow(
    clippy::exhaustive_structs,
    clippy::exhaustive_enums,
    reason = "Nothing here is meant to be consumed by other crates"
)]
#![allow(
    clippy::question_mark_used,
    reason = "Errors are propagated with `?` throughout"
)]
#![allow(
    clippy::single_call_fn,
    reason = "Handlers are split into small single-use steps"
)]
#![allow(
    clippy::arbitrary_source_item_ordering,
    reason = "Items are ordered by reading flow, not alphabetically"
)]
#![allow(
    clippy::missing_docs_in_private_items,
    reason = "Private helpers are documented where it helps"
)]

pub mod server;
pub mod spec;
pub mod utils;
