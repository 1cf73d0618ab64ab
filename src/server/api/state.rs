//! Centralized state management for the Actix web server
use std::path::PathBuf;

use anyhow::Context;
use url::Url;

use crate::spec::{fetch::Upstream, theme::Theme};
use crate::utils::config::Config;

/// Global, read-only application state
#[derive(Debug, Clone)]
pub struct App {
    /// Client for the repository hosting the specification
    pub upstream: Upstream,
    /// How rendered pages look and are cached
    pub page: Page,
    /// Directory with static assets served at `/`
    pub static_dir: Option<PathBuf>,
}

/// Rendering settings shared by every request
#[derive(Debug, Clone)]
pub struct Page {
    /// Page chrome
    pub theme: Theme,
    /// `Cache-Control` value sent with rendered pages
    pub cache_control: String,
}

impl App {
    /// Build the application state from resolved configuration.
    ///
    /// # Errors
    /// Errors if the upstream base URL does not parse or the HTTP client can't be built.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let base = Url::parse(&config.upstream.base_url).with_context(|| {
            format!("Invalid upstream URL '{}'", config.upstream.base_url)
        })?;
        let upstream = Upstream::new(
            base,
            &config.upstream.document_path,
            config.upstream.timeout(),
        )?;
        Ok(Self {
            upstream,
            page: Page {
                theme: config.page.theme,
                cache_control: config.page.cache_control(),
            },
            static_dir: config.server.static_dir.clone(),
        })
    }
}
