//! Server configuration, read from an optional TOML file.
//!
//! Example `specview.toml`:
//!
//! ```toml
//! [server]
//! bind = "0.0.0.0"
//! port = 8080
//! static_dir = "static"
//!
//! [upstream]
//! base_url = "https://go.googlesource.com/go"
//! document_path = "doc/go_spec.html"
//! timeout_secs = 30
//!
//! [page]
//! theme = "godev"
//! cache_control = "max-age=0, s-maxage=86400"
//! ```
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

use crate::spec::fetch::{DEFAULT_DOCUMENT_PATH, DEFAULT_UPSTREAM};
use crate::spec::theme::Theme;

/// Full configuration. Every table and key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Listener settings
    pub server: Server,
    /// Where the specification is fetched from
    pub upstream: Upstream,
    /// How pages are rendered
    pub page: Page,
}

/// `[server]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Server {
    /// Address to bind to.
    pub bind: String,
    /// Port to listen on.
    pub port: u16,
    /// Directory served at `/`, e.g. for `/src/toc.js`.
    pub static_dir: Option<PathBuf>,
}

impl Default for Server {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_owned(),
            port: 8080,
            static_dir: None,
        }
    }
}

/// `[upstream]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Upstream {
    /// Repository root on the Gitiles host.
    pub base_url: String,
    /// Path of the specification in the repository.
    pub document_path: String,
    /// Overall request timeout. No timeout beyond the transport's if unset.
    pub timeout_secs: Option<u64>,
}

impl Default for Upstream {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM.to_owned(),
            document_path: DEFAULT_DOCUMENT_PATH.to_owned(),
            timeout_secs: None,
        }
    }
}

impl Upstream {
    /// The configured timeout as a `Duration`.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// `[page]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Page {
    /// Page chrome.
    pub theme: Theme,
    /// `Cache-Control` override. Defaults to the theme's directive.
    pub cache_control: Option<String>,
}

impl Page {
    /// The `Cache-Control` value to send with rendered pages.
    #[must_use]
    pub fn cache_control(&self) -> String {
        self.cache_control
            .clone()
            .unwrap_or_else(|| self.theme.default_cache_control().to_owned())
    }
}

impl Config {
    /// Read configuration from the TOML file at `path`.
    ///
    /// # Errors
    /// Errors if the file can't be read or is not valid configuration.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read config file '{}'", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config file '{}'", path.display()))
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    /// Errors if `raw` is not valid TOML or contains unknown keys.
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
