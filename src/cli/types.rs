//! CLI type definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "docqa")]
#[command(about = "Document question answering over a Weaviate vector store", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Load configuration from this file instead of docqa.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check store connectivity and create the collection
    Init,

    /// Ingest PDF documents into the vector store
    Ingest {
        /// Paths to PDF files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Ask a question against the ingested documents
    Query {
        /// The question to answer
        question: String,

        /// Maximum number of chunks to retrieve
        #[arg(short, long)]
        top_k: Option<usize>,

        /// Minimum relevance score in [0.0, 1.0]
        #[arg(short, long)]
        min_score: Option<f32>,
    },

    /// Run the HTTP server
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },
}
