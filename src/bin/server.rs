//! itemql Server Binary
//!
//! Starts the HTTP endpoint for itemql.

use std::sync::Arc;

use clap::Parser;
use itemql::network::Server;
use itemql::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// itemql Server
#[derive(Parser, Debug)]
#[command(name = "itemql-server")]
#[command(about = "Query endpoint over a JSON item collection")]
#[command(version)]
struct Args {
    /// Data file holding the collection
    #[arg(short, long, default_value = "dummyFile.json")]
    data_file: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    listen: String,

    /// Endpoint path
    #[arg(short, long, default_value = "/Item")]
    endpoint: String,

    /// Fail instead of creating a missing data file
    #[arg(long)]
    no_create: bool,

    /// Largest accepted query document in KB
    #[arg(short = 'm', long, default_value = "64")]
    max_document_kb: usize,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,itemql=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("itemql Server v{}", itemql::VERSION);
    tracing::info!("Data file: {}", args.data_file);
    tracing::info!("Listen address: {}", args.listen);

    // Build config from args
    let config = Config::builder()
        .data_file(&args.data_file)
        .create_if_missing(!args.no_create)
        .listen_addr(&args.listen)
        .endpoint(&args.endpoint)
        .max_document_bytes(args.max_document_kb * 1024)
        .build();

    // Open engine
    let engine = match Engine::open(config.clone()) {
        Ok(e) => Arc::new(e),
        Err(e) => {
            tracing::error!("Failed to open engine: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Engine initialized successfully");

    // Serve until Ctrl+C / SIGTERM
    let server = Server::new(config, engine);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
