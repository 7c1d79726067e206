//! Retrieval stack for the NimbusWorkspaces support assistant
//!
//! This crate provides the ingest pipeline (loader, splitter, embedding,
//! persistence) and the retrieval side (vector store, retriever, formatter)
//! that back the agent's knowledge base tool.

mod format;
mod ingest;
mod loader;
mod retriever;
mod splitter;
mod store;

#[cfg(test)]
mod tests;

pub use format::format_chunks;
pub use ingest::{ingest_directory, IngestReport};
pub use loader::{ensure_title, load_directory};
pub use retriever::Retriever;
pub use splitter::TextSplitter;
pub use store::LocalVectorStore;

// Re-export core types for convenience
pub use nimbus_core::{
    Chunk, Document, DocumentMetadata, EmbeddingProvider, Error, IndexingConfig, Result,
    SearchConfig, VectorStore,
};
