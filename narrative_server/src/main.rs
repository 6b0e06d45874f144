//! `cyoaweb` - serve a choose-your-own-adventure story over HTTP.
//!
//! Startup sequence:
//!   1. Parse command-line flags
//!   2. Load config (file optional) and apply flag overrides
//!   3. Init logger
//!   4. Load and check the story, build the handler
//!   5. Bind and serve until Ctrl-C

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};

use narrative_server::bootstrap::build_handler;
use narrative_server::config::{Overrides, ServerConfig};
use narrative_server::{http, logger, ServerError};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "cyoaweb")]
#[command(about = "Serve a choose-your-own-adventure story over HTTP")]
#[command(version)]
struct Args {
    /// Port where the server listens [default: 3000]
    #[arg(short, long)]
    port: Option<u16>,

    /// The JSON file with the story [default: gopher.json]
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Page layout file replacing the built-in template
    #[arg(short, long)]
    template: Option<PathBuf>,

    /// Refuse to start if the story has dangling or unreachable chapters
    #[arg(long)]
    strict: bool,

    /// Log level or filter directives (e.g. `debug`, `narrative_server=trace`)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), ServerError> {
    let args = Args::parse();

    let overrides = Overrides {
        port: args.port,
        story_file: args.file,
        template_file: args.template,
        strict: args.strict,
        log_level: args.log_level,
    };
    let config = ServerConfig::load(args.config.as_deref(), overrides)?;

    logger::init(&config.log.level)?;

    let handler = Arc::new(build_handler(&config)?);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!(%bind_addr, "starting cyoa server");

    http::serve(listener, handler, shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
