//! Running the CLI

// Allow exits because in this file we ideally handle all errors with known exit codes
#![allow(clippy::exit)]

use crate::server::api::state::App as AppState;
use crate::server::app::serve;
use crate::spec::theme::Theme;
use crate::utils::config::Config;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Specview renders the Go language specification at any ref of the
/// upstream Go repository.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Flags override its values.
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Specview cli subcommands
    #[command(subcommand)]
    subcommands: Subcommands,
}

///
#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Serve rendered specification pages over HTTP
    Serve {
        /// Address to bind to.
        #[arg(short, long)]
        bind: Option<String>,
        /// Port on which to serve.
        #[arg(short, long)]
        port: Option<u16>,
        /// Page template.
        #[arg(short, long, value_enum)]
        theme: Option<Theme>,
        /// Repository root on the upstream Gitiles host.
        #[arg(short, long)]
        upstream: Option<String>,
        /// `Cache-Control` value for rendered pages. Defaults to the theme's.
        #[arg(long)]
        cache_control: Option<String>,
        /// Directory of static assets (e.g. `src/toc.js`) served at `/`.
        #[arg(short, long)]
        static_dir: Option<PathBuf>,
        /// Upstream request timeout in seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

impl Subcommands {
    /// Layer the flags given on the command line over `config`.
    fn apply(self, mut config: Config) -> Config {
        match self {
            Self::Serve {
                bind,
                port,
                theme,
                upstream,
                cache_control,
                static_dir,
                timeout_secs,
            } => {
                if let Some(bind) = bind {
                    config.server.bind = bind;
                }
                if let Some(port) = port {
                    config.server.port = port;
                }
                if let Some(theme) = theme {
                    config.page.theme = theme;
                }
                if let Some(upstream) = upstream {
                    config.upstream.base_url = upstream;
                }
                if cache_control.is_some() {
                    config.page.cache_control = cache_control;
                }
                if static_dir.is_some() {
                    config.server.static_dir = static_dir;
                }
                if timeout_secs.is_some() {
                    config.upstream.timeout_secs = timeout_secs;
                }
                config
            }
        }
    }
}

/// Log to stdout, at `info` unless `RUST_LOG` says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Main entrypoint to application
pub fn run() {
    init_tracing();
    tracing::debug!("Starting application");
    let cli = Cli::parse();

    let file_config = match cli.config.as_deref() {
        Some(path) => Config::load(path).unwrap_or_else(|err| {
            tracing::error!("Error: {err:?}");
            std::process::exit(1);
        }),
        None => Config::default(),
    };
    let config = cli.subcommands.apply(file_config);

    let state = AppState::from_config(&config).unwrap_or_else(|err| {
        tracing::error!("Unable to initialize app.");
        tracing::error!("Error: {err:?}");
        std::process::exit(1);
    });

    if let Err(err) = serve(state, config.server.bind, config.server.port) {
        tracing::error!("Server stopped: {err}");
        std::process::exit(1);
    }
}
