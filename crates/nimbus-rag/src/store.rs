//! File-backed local vector store

use std::fs;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use nimbus_core::{
    Chunk, EmbeddingProvider, Error, IndexingConfig, Result, SearchConfig, VectorStore,
};

const INDEX_FILE: &str = "index.json";

/// Brute-force cosine vector store with save/load to a directory
///
/// Chunks are embedded through the configured provider when added, scanned
/// linearly on search, and persisted as a single JSON payload. The persisted
/// directory is opaque to every other component; only `save`/`load` touch it.
pub struct LocalVectorStore {
    chunks: Vec<Chunk>,
    embedder: Arc<dyn EmbeddingProvider>,
    embed_batch_size: usize,
}

impl std::fmt::Debug for LocalVectorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalVectorStore")
            .field("chunks", &self.chunks)
            .field("embed_batch_size", &self.embed_batch_size)
            .finish()
    }
}

#[derive(Serialize, Deserialize)]
struct PersistedIndex {
    embedding_model: String,
    chunks: Vec<Chunk>,
}

impl LocalVectorStore {
    /// Create an empty store backed by the given embedding provider
    pub fn new(embedder: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            chunks: Vec::new(),
            embedder,
            embed_batch_size: IndexingConfig::default().embed_batch_size,
        }
    }

    /// Set how many chunks are embedded per provider request
    pub fn with_embed_batch_size(mut self, embed_batch_size: usize) -> Self {
        self.embed_batch_size = embed_batch_size.max(1);
        self
    }

    /// Persist the store to `dir`, replacing any index already there
    pub fn save(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)?;

        let payload = PersistedIndex {
            embedding_model: self.embedder.model_id().to_string(),
            chunks: self.chunks.clone(),
        };
        let encoded =
            serde_json::to_string(&payload).map_err(|e| Error::Serialization(e.to_string()))?;
        fs::write(dir.join(INDEX_FILE), encoded)?;

        Ok(())
    }

    /// Load a store previously written by [`save`](Self::save)
    pub fn load(dir: &Path, embedder: Arc<dyn EmbeddingProvider>) -> Result<Self> {
        let path = dir.join(INDEX_FILE);
        if !path.exists() {
            return Err(Error::MissingResource(
                "Vector store not found. Run `nimbus ingest` before starting the assistant."
                    .to_string(),
            ));
        }

        let raw = fs::read_to_string(&path)?;
        let payload: PersistedIndex =
            serde_json::from_str(&raw).map_err(|e| Error::Serialization(e.to_string()))?;

        Ok(Self {
            chunks: payload.chunks,
            embedder,
            embed_batch_size: IndexingConfig::default().embed_batch_size,
        })
    }

    fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
        if a.len() != b.len() {
            return 0.0;
        }

        let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
        let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        dot_product / (norm_a * norm_b)
    }
}

#[async_trait]
impl VectorStore for LocalVectorStore {
    async fn add_chunks(&mut self, chunks: Vec<Chunk>) -> Result<usize> {
        let mut added = 0;

        for batch in chunks.chunks(self.embed_batch_size) {
            let texts: Vec<String> = batch.iter().map(|chunk| chunk.content.clone()).collect();
            let vectors = self.embedder.embed(&texts).await?;

            for (chunk, vector) in batch.iter().zip(vectors) {
                let mut chunk = chunk.clone();
                chunk.embedding = Some(vector);
                self.chunks.push(chunk);
                added += 1;
            }
        }

        Ok(added)
    }

    async fn search(&self, query: &str, config: &SearchConfig) -> Result<Vec<Chunk>> {
        if self.chunks.is_empty() || config.top_k == 0 {
            return Ok(Vec::new());
        }

        let query_vectors = self.embedder.embed(&[query.to_string()]).await?;
        let query_vector = query_vectors
            .first()
            .ok_or_else(|| Error::Embedding("No embedding returned for query".to_string()))?;

        let mut results: Vec<Chunk> = self
            .chunks
            .iter()
            .filter_map(|chunk| {
                let embedding = chunk.embedding.as_ref()?;
                let score = Self::cosine_similarity(query_vector, embedding);
                let mut scored = chunk.clone();
                scored.score = Some(score);
                Some(scored)
            })
            .filter(|chunk| match config.score_threshold {
                Some(threshold) => chunk.score.unwrap_or(0.0) >= threshold,
                None => true,
            })
            .collect();

        results.sort_by(|a, b| {
            b.score
                .unwrap_or(0.0)
                .partial_cmp(&a.score.unwrap_or(0.0))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        results.truncate(config.top_k);

        Ok(results)
    }

    fn len(&self) -> usize {
        self.chunks.len()
    }
}
