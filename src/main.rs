use clap::{Parser, Subcommand};
use quantx_api::RestApi;
use quantx_core::DocumentTable;
use quantx_model::{search, train, ModelBundle};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Quantum-inspired semantic search over small tabular datasets
#[derive(Parser, Debug)]
#[command(name = "quantx")]
#[command(about = "Quantum-inspired semantic search", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Train a model bundle from a JSON dataset
    Train {
        /// Path to a JSON array of flat record objects
        #[arg(short, long)]
        dataset: PathBuf,

        /// Output path for the model bundle
        #[arg(short, long, default_value = "quantum_model.bin")]
        model: PathBuf,
    },

    /// Score a query against a trained bundle and print JSON results
    Query {
        /// Path to the model bundle
        #[arg(short, long, default_value = "quantum_model.bin")]
        model: PathBuf,

        /// Free-text query
        query: String,
    },

    /// Serve the query interface over HTTP
    Serve {
        /// Path to the model bundle
        #[arg(short, long, default_value = "quantum_model.bin")]
        model: PathBuf,

        /// HTTP port
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("quantX v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Train { dataset, model } => {
            info!("Loading dataset from {:?}", dataset);
            let raw = std::fs::read_to_string(&dataset)?;
            let records: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
            let table = DocumentTable::from_records(&records)?;

            let bundle = train(table)?;
            bundle.save(&model)?;
            info!("Training complete, model saved to {:?}", model);
        }

        Command::Query { model, query } => {
            let bundle = ModelBundle::load(&model)?;
            let output = search(&bundle, &query)?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }

        Command::Serve { model, port } => {
            let bundle = Arc::new(ModelBundle::load(&model)?);
            info!("Serving {} documents on port {}", bundle.len(), port);

            let sys = actix_web::rt::System::new();
            sys.block_on(RestApi::start(bundle, port))?;
        }
    }

    Ok(())
}
