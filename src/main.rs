//! Development proxy for the firmware web UI.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────┐
//!                         │              webui-proxy              │
//!     Browser             │                                       │
//!     ─── GET / ─────────▶│  static_files ──▶ index.html (disk)   │
//!                         │                                       │
//!     ─── * /api/... ────▶│  routing ──▶ proxy ──▶ response ──────┼──▶ Device
//!     ◀── status/type/body│                  (60 s deadline)      │    (upstream)
//!                         └──────────────────────────────────────┘
//! ```
//!
//! With no arguments the proxy listens on port 8000, serves `./index.html`
//! and forwards to `http://192.168.1.97`.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use webui_dev::config::{load_config, validate_config, ConfigError, DevConfig};
use webui_dev::http::HttpServer;
use webui_dev::lifecycle::{trigger_on_signal, Shutdown};
use webui_dev::observability::init_logging;

#[derive(Parser)]
#[command(name = "webui-proxy")]
#[command(about = "Serve index.html and forward /api/* to the device", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Upstream base URL, e.g. http://192.168.1.97
    #[arg(long)]
    base_url: Option<String>,

    /// Listen port
    #[arg(short, long)]
    port: Option<u16>,

    /// HTML file served at /
    #[arg(long)]
    static_file: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<DevConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => DevConfig::default(),
        };

        if let Some(base_url) = self.base_url {
            config.base_url = base_url;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(static_file) = self.static_file {
            config.static_file_path = static_file;
        }

        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;
    init_logging(&config.log_level);

    tracing::info!(
        bind_address = %config.bind_address(),
        upstream = %config.api_base(),
        upstream_timeout_secs = config.upstream_timeout_secs,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(trigger_on_signal(shutdown));

    let server = HttpServer::new(Arc::new(config));
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
