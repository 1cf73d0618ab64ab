//! Command line entrypoint and configuration.
pub mod cli;
pub mod config;
