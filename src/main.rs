//! Docqa CLI entry point.

use anyhow::Result;
use clap::Parser;

use docqa::cli::{commands, Cli, Commands};
use docqa::infrastructure::config::ConfigLoader;
use docqa::infrastructure::{logging, setup};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };
    logging::init(&config.logging);

    let app = setup::build(config)?;

    match cli.command {
        Commands::Init => commands::init::execute(&app, cli.json).await,
        Commands::Ingest { files } => commands::ingest::execute(&app, files, cli.json).await,
        Commands::Query {
            question,
            top_k,
            min_score,
        } => commands::query::execute(&app, question, top_k, min_score, cli.json).await,
        Commands::Serve { port } => commands::serve::execute(app, port).await,
    }
}
