use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use vecstore::cli::commands::{Cli, Commands};
use vecstore::config::ServerConfig;
use vecstore::domain::values::vector::Vector;
use vecstore::infrastructure::transport::server;
use vecstore::VecStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vecstore=info")),
        )
        .init();

    let cli = Cli::parse();
    if let Err(e) = run_command(cli).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let store = VecStore::new(cli.data_file);

    match cli.command {
        Commands::Serve { addr, search_limit } => {
            if let Err(e) = store.load() {
                tracing::warn!(error = %e, "Failed to load data (starting with empty DB)");
            }
            tracing::info!(entries = store.len(), "Vector engine initialized");

            let config = ServerConfig { addr, search_limit };
            server::run(&config, Arc::new(store), shutdown_signal()).await?;
        }
        Commands::Add { id, values } => {
            store.load()?;
            let vector = Vector::parse_tokens(&values)?;
            let dimension = vector.dimension();
            store.add(id.clone(), vector)?;
            store.save()?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "id": id,
                    "dimension": dimension,
                    "entries": store.len(),
                }))?
            );
        }
        Commands::Search { values, limit } => {
            store.load()?;
            let query = Vector::parse_tokens(&values)?;
            let hits = store.search(&query, limit)?;
            println!("{}", serde_json::to_string_pretty(&hits)?);
        }
        Commands::Stats => {
            store.load()?;
            println!("{}", serde_json::to_string_pretty(&store.stats())?);
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Could not listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
