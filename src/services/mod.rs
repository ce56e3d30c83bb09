//! Application services composing the domain ports into the ingestion and
//! query pipelines.

pub mod context;
pub mod ingestion;
pub mod prompts;
pub mod query;
pub mod retrieval;

pub use ingestion::{DocumentSource, IngestionService};
pub use query::QueryService;
pub use retrieval::Retriever;
