//! Integration tests for the retrieval stack

#[cfg(test)]
mod retrieval_tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use insta::assert_snapshot;

    use crate::{
        format_chunks, ingest_directory, Chunk, DocumentMetadata, EmbeddingProvider, Error,
        IndexingConfig, LocalVectorStore, Result, Retriever, SearchConfig, VectorStore,
    };

    /// Deterministic embedder for tests: one dimension per keyword,
    /// valued by occurrence count.
    struct KeywordEmbedder {
        keywords: Vec<&'static str>,
    }

    impl KeywordEmbedder {
        fn new() -> Self {
            Self {
                keywords: vec!["billing", "refund", "password", "workspace", "limit", "invoice"],
            }
        }
    }

    #[async_trait]
    impl EmbeddingProvider for KeywordEmbedder {
        async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
            Ok(texts
                .iter()
                .map(|text| {
                    let lower = text.to_lowercase();
                    self.keywords
                        .iter()
                        .map(|keyword| lower.matches(keyword).count() as f32)
                        .collect()
                })
                .collect())
        }

        fn model_id(&self) -> &str {
            "keyword-test-embedder"
        }
    }

    fn chunk(id: &str, content: &str, source: &str, title: Option<&str>) -> Chunk {
        Chunk {
            id: id.to_string(),
            content: content.to_string(),
            metadata: DocumentMetadata {
                source: source.to_string(),
                title: title.map(str::to_string),
            },
            embedding: None,
            score: None,
        }
    }

    async fn seeded_store() -> LocalVectorStore {
        let mut store = LocalVectorStore::new(Arc::new(KeywordEmbedder::new()));
        store
            .add_chunks(vec![
                chunk(
                    "billing.md#0",
                    "Billing and refund policy for all plans.",
                    "billing.md",
                    Some("Billing FAQ"),
                ),
                chunk(
                    "security.md#0",
                    "Password reset steps for locked accounts.",
                    "security.md",
                    Some("Account security"),
                ),
                chunk(
                    "limits.md#0",
                    "Each workspace has a seat limit per plan.",
                    "limits.md",
                    None,
                ),
            ])
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_search_ranks_by_similarity() {
        let store = seeded_store().await;

        let results = store
            .search("How do refunds work for billing?", &SearchConfig::default())
            .await
            .unwrap();

        assert_eq!(results[0].metadata.source, "billing.md");
        assert!(results[0].score.unwrap() > results[1].score.unwrap_or(0.0));
    }

    #[tokio::test]
    async fn test_search_respects_top_k() {
        let store = seeded_store().await;
        let retriever = Retriever::new(Arc::new(store), 1);

        let results = retriever.search("workspace limit").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].metadata.source, "limits.md");
    }

    #[tokio::test]
    async fn test_empty_store_returns_no_results() {
        let store = LocalVectorStore::new(Arc::new(KeywordEmbedder::new()));
        let results = store
            .search("anything", &SearchConfig::default())
            .await
            .unwrap();
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store_dir = dir.path().join("help_center");

        let store = seeded_store().await;
        store.save(&store_dir).unwrap();

        let loaded =
            LocalVectorStore::load(&store_dir, Arc::new(KeywordEmbedder::new())).unwrap();
        assert_eq!(loaded.len(), 3);

        let results = loaded
            .search("refund", &SearchConfig::default())
            .await
            .unwrap();
        assert_eq!(results[0].metadata.source, "billing.md");
    }

    #[test]
    fn test_load_missing_store_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = LocalVectorStore::load(&dir.path().join("nope"), Arc::new(KeywordEmbedder::new()))
            .unwrap_err();
        assert!(matches!(err, Error::MissingResource(_)));
    }

    #[tokio::test]
    async fn test_ingest_chunk_counts() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        std::fs::create_dir(&data_dir).unwrap();
        std::fs::write(data_dir.join("short.md"), "# Short\nbody").unwrap();
        std::fs::write(
            data_dir.join("long.md"),
            format!("# Long\n{}", "workspace limit details. ".repeat(10)),
        )
        .unwrap();

        let config = IndexingConfig {
            chunk_size: 60,
            chunk_overlap: 10,
            ..IndexingConfig::default()
        };

        let store_dir = dir.path().join("stores/help_center");
        let report = ingest_directory(
            &data_dir,
            &store_dir,
            Arc::new(KeywordEmbedder::new()),
            &config,
        )
        .await
        .unwrap();

        assert_eq!(report.files, 2);
        assert!(report.chunks > report.files);

        let loaded =
            LocalVectorStore::load(&store_dir, Arc::new(KeywordEmbedder::new())).unwrap();
        assert_eq!(loaded.len(), report.chunks);
    }

    #[tokio::test]
    async fn test_ingest_all_short_files_one_chunk_each() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path().join("data");
        std::fs::create_dir(&data_dir).unwrap();
        std::fs::write(data_dir.join("a.md"), "# A\nalpha").unwrap();
        std::fs::write(data_dir.join("b.md"), "# B\nbeta").unwrap();

        let report = ingest_directory(
            &data_dir,
            &dir.path().join("store"),
            Arc::new(KeywordEmbedder::new()),
            &IndexingConfig::default(),
        )
        .await
        .unwrap();

        assert_eq!(report.files, 2);
        assert_eq!(report.chunks, 2);
    }

    #[tokio::test]
    async fn test_formatted_retrieval_snapshot() {
        let store = seeded_store().await;
        let retriever = Retriever::new(Arc::new(store), 2);

        let results = retriever.search("billing refund workspace limit").await.unwrap();
        assert_snapshot!(format_chunks(&results), @r###"
        [1] Billing FAQ — billing.md
        Billing and refund policy for all plans.

        [2] limits.md
        Each workspace has a seat limit per plan.
        "###);
    }
}
