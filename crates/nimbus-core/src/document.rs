//! Document and chunk types shared by the ingest pipeline and the store

use serde::{Deserialize, Serialize};

/// Metadata attached to a loaded document and carried by every chunk cut
/// from it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    /// Path of the source file, relative to the data root
    pub source: String,
    /// Human-readable title, when one could be derived or was supplied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// A document loaded from the knowledge base directory
///
/// Immutable after creation; consumed by the text splitter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub metadata: DocumentMetadata,
}

/// A bounded-length slice of a source document, the unit of retrieval
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Stable identifier, `{source}#{chunk_index}`
    pub id: String,
    pub content: String,
    pub metadata: DocumentMetadata,
    /// Embedding vector, present once the chunk has been indexed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub embedding: Option<Vec<f32>>,
    /// Similarity score, present on chunks returned from a search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f32>,
}

/// Configuration for document chunking and embedding during ingest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexingConfig {
    /// Maximum chunk length in characters
    pub chunk_size: usize,
    /// Characters shared between consecutive chunks of one document
    pub chunk_overlap: usize,
    /// Number of chunks embedded per provider request
    pub embed_batch_size: usize,
}

impl Default for IndexingConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            chunk_overlap: 100,
            embed_batch_size: 64,
        }
    }
}
