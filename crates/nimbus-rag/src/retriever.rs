//! Fixed top-k retriever over a vector store

use std::sync::Arc;

use nimbus_core::{Chunk, Result, SearchConfig, VectorStore};

/// Thin wrapper giving the agent a fixed top-k query interface
#[derive(Clone)]
pub struct Retriever {
    store: Arc<dyn VectorStore>,
    top_k: usize,
}

impl Retriever {
    pub fn new(store: Arc<dyn VectorStore>, top_k: usize) -> Self {
        Self { store, top_k }
    }

    /// Return the top-k most similar chunks for the query
    ///
    /// An index with no matches yields an empty vector, not an error.
    pub async fn search(&self, query: &str) -> Result<Vec<Chunk>> {
        let config = SearchConfig {
            top_k: self.top_k,
            score_threshold: None,
        };
        self.store.search(query, &config).await
    }
}
