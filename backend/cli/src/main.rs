use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};

use tracing_subscriber::{layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter};

use rallyscope_config::{
    default_config_file, load_and_prepare, redact, validate, RallyscopeConfig,
};
use rallyscope_core::VideoAnalyzer;
use rallyscope_gateway::{start_server, GatewayState};
use rallyscope_media::UploadStore;
use rallyscope_understanding::GeminiClient;

#[derive(Parser)]
#[command(name = "rallyscope")]
#[command(about = "Rallyscope — badminton video coaching analysis service")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.rallyscope/config.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the analysis server
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Show server status
    Status,
    /// Validate the config and print a redacted snapshot
    CheckConfig,
}

/// RUST_LOG keeps priority once the config is loaded; the configured level
/// only takes over when no env filter was set.
fn configured_level(env_filter: Option<String>, config_level: &str) -> Option<String> {
    match env_filter {
        Some(_) => None,
        None => Some(config_level.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Structured logging goes up before the config is loaded, so load-time
    // events and validation warnings are not dropped. The filter is behind
    // a reload handle so the configured level can be applied afterwards.
    let (filter, filter_handle) = reload::Layer::new(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let config_path = cli.config.clone().unwrap_or_else(default_config_file);
    let config = load_and_prepare(&config_path).await?;

    if let Some(level) =
        configured_level(std::env::var("RUST_LOG").ok(), &config.logging.level)
    {
        let _ = filter_handle.modify(|f| *f = EnvFilter::new(level));
    }

    match cli.command {
        Commands::Serve { port } => {
            let mut config = config;
            if let Some(port) = port {
                config.server.port = port;
            }
            run_server(config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!(
                    "http://localhost:{}/api/health",
                    config.server.port
                ))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("Rallyscope is not running on port {}", config.server.port);
                }
            }
        }
        Commands::CheckConfig => {
            let snapshot = serde_json::to_value(&config)?;
            println!("{}", serde_json::to_string_pretty(&redact(&snapshot))?);

            let report = validate(&config);
            for warning in &report.warnings {
                eprintln!("warning: {warning}");
            }
            if report.is_valid() {
                println!("Config OK");
            } else {
                for err in &report.errors {
                    eprintln!("error: {err}");
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

async fn run_server(config: RallyscopeConfig) -> Result<()> {
    let report = validate(&config);
    if !report.is_valid() {
        for err in &report.errors {
            error!(path = %err.path, message = %err.message, "Config error");
        }
        anyhow::bail!(
            "invalid configuration ({} error(s)); run `rallyscope check-config`",
            report.errors.len()
        );
    }

    info!(
        host = %config.server.host,
        port = config.server.port,
        upload_dir = %config.storage.upload_dir,
        model = %config.gemini.model,
        "Starting Rallyscope"
    );

    let store = Arc::new(UploadStore::new(&config.storage.upload_dir));
    let analyzer: Arc<dyn VideoAnalyzer> = Arc::new(GeminiClient::new(
        &config.gemini.api_key,
        &config.gemini.model,
        &config.gemini.base_url,
    ));
    let state = GatewayState { store, analyzer };

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("invalid server host/port")?;

    start_server(addr, state).await
}
