//! Vector store trait and search types

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{Chunk, Result};

/// Configuration for a similarity search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum number of chunks to return
    pub top_k: usize,
    /// Drop results scoring below this value, when set
    pub score_threshold: Option<f32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            top_k: 4,
            score_threshold: None,
        }
    }
}

/// Trait for vector stores
///
/// Holds embedded chunks and answers nearest-neighbour queries over them.
/// An empty store answers every query with an empty result, never an error.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Embed and add chunks to the store, returning how many were added
    async fn add_chunks(&mut self, chunks: Vec<Chunk>) -> Result<usize>;

    /// Return up to `top_k` chunks ranked by similarity to the query
    async fn search(&self, query: &str, config: &SearchConfig) -> Result<Vec<Chunk>>;

    /// Number of chunks held by the store
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
