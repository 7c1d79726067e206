//! Full-rebuild ingest pipeline

use std::path::Path;
use std::sync::Arc;

use nimbus_core::{EmbeddingProvider, IndexingConfig, Result, VectorStore};

use crate::loader::load_directory;
use crate::splitter::TextSplitter;
use crate::store::LocalVectorStore;

/// Counts reported after a successful ingest run
#[derive(Debug, Clone, Copy)]
pub struct IngestReport {
    pub files: usize,
    pub chunks: usize,
}

/// Build the persisted index from every file under `data_dir`
///
/// Always a full rebuild: the documents are loaded in sorted order, split
/// into overlapping windows, embedded, and written to `store_dir`,
/// overwriting whatever index was there before.
pub async fn ingest_directory(
    data_dir: &Path,
    store_dir: &Path,
    embedder: Arc<dyn EmbeddingProvider>,
    config: &IndexingConfig,
) -> Result<IngestReport> {
    let documents = load_directory(data_dir)?;
    let files = documents.len();

    let splitter = TextSplitter::new(config)?;
    let mut chunks = Vec::new();
    for document in &documents {
        chunks.extend(splitter.split(document));
    }
    let chunk_count = chunks.len();

    let mut store =
        LocalVectorStore::new(embedder).with_embed_batch_size(config.embed_batch_size);
    store.add_chunks(chunks).await?;
    store.save(store_dir)?;

    Ok(IngestReport {
        files,
        chunks: chunk_count,
    })
}
