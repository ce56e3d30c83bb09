//! Document loading and chunking.

pub mod chunker;
pub mod loader;

pub use chunker::Chunker;
pub use loader::{is_pdf_path, load_pdf, load_pdf_bytes};
