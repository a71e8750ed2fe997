//! itemql CLI
//!
//! Runs documents against a data file directly, and seeds sample data.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use itemql::store::sample_collection;
use itemql::{Config, Engine};
use tracing_subscriber::{fmt, EnvFilter};

/// itemql CLI
#[derive(Parser, Debug)]
#[command(name = "itemql-cli")]
#[command(about = "CLI for the itemql data file")]
struct Args {
    /// Data file holding the collection
    #[arg(short, long, default_value = "dummyFile.json")]
    data_file: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Execute a query document and print the response
    Query {
        /// The document, e.g. '{ list { itemindex itemname } }'
        document: String,
    },

    /// Write the sample collection to the data file
    Seed {
        /// Number of sample items
        #[arg(short, long, default_value = "19")]
        count: i64,

        /// Overwrite a non-empty collection
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder().data_file(&args.data_file).build();
    let engine = match Engine::open(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match args.command {
        Commands::Query { document } => {
            let response = engine.execute(&document).await;
            match serde_json::to_string_pretty(&response) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
            if response.is_ok() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Commands::Seed { count, force } => {
            let existing = match engine.resolver().list() {
                Ok(records) => records.len(),
                Err(e) => {
                    eprintln!("Error: {}", e);
                    return ExitCode::FAILURE;
                }
            };
            if existing > 0 && !force {
                eprintln!(
                    "Refusing to overwrite {} existing item(s) in {} (use --force)",
                    existing, args.data_file
                );
                return ExitCode::FAILURE;
            }

            let records = sample_collection(count);
            if let Err(e) = engine.replace_all(&records) {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
            println!("Wrote {} item(s) to {}", records.len(), args.data_file);
            ExitCode::SUCCESS
        }
    }
}
