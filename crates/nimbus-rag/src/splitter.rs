//! Fixed-window text splitter

use nimbus_core::{Chunk, Document, Error, IndexingConfig, Result};

/// Splits documents into fixed-size character windows with bounded overlap
///
/// Every chunk carries its parent document's metadata and a stable id of the
/// form `{source}#{index}`.
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
}

impl TextSplitter {
    /// Create a splitter from the indexing configuration
    ///
    /// The overlap must be smaller than the window, otherwise the window
    /// could never advance.
    pub fn new(config: &IndexingConfig) -> Result<Self> {
        if config.chunk_size == 0 {
            return Err(Error::InvalidInput(
                "Chunk size must be greater than zero".to_string(),
            ));
        }
        if config.chunk_overlap >= config.chunk_size {
            return Err(Error::InvalidInput(format!(
                "Chunk overlap ({}) must be smaller than chunk size ({})",
                config.chunk_overlap, config.chunk_size
            )));
        }

        Ok(Self {
            chunk_size: config.chunk_size,
            chunk_overlap: config.chunk_overlap,
        })
    }

    /// Split a document into overlapping windows
    pub fn split(&self, document: &Document) -> Vec<Chunk> {
        let chars: Vec<char> = document.content.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }

        let mut chunks = Vec::new();
        let mut start = 0;

        while start < chars.len() {
            let end = (start + self.chunk_size).min(chars.len());
            let content: String = chars[start..end].iter().collect();

            chunks.push(Chunk {
                id: format!("{}#{}", document.metadata.source, chunks.len()),
                content,
                metadata: document.metadata.clone(),
                embedding: None,
                score: None,
            });

            if end >= chars.len() {
                break;
            }

            start = end - self.chunk_overlap;
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::DocumentMetadata;

    fn config(chunk_size: usize, chunk_overlap: usize) -> IndexingConfig {
        IndexingConfig {
            chunk_size,
            chunk_overlap,
            ..IndexingConfig::default()
        }
    }

    fn document(content: &str) -> Document {
        Document {
            content: content.to_string(),
            metadata: DocumentMetadata {
                source: "faq.md".to_string(),
                title: Some("FAQ".to_string()),
            },
        }
    }

    #[test]
    fn test_short_document_is_one_chunk() {
        let splitter = TextSplitter::new(&config(500, 100)).unwrap();
        let chunks = splitter.split(&document("short content"));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].content, "short content");
        assert_eq!(chunks[0].id, "faq.md#0");
        assert_eq!(chunks[0].metadata.title.as_deref(), Some("FAQ"));
    }

    #[test]
    fn test_windows_respect_size_and_overlap() {
        let splitter = TextSplitter::new(&config(10, 4)).unwrap();
        let text = "abcdefghijklmnopqrstuvwxyz";
        let chunks = splitter.split(&document(text));

        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.content.chars().count() <= 10);
        }
        for pair in chunks.windows(2) {
            let head = &pair[0].content;
            let tail = &pair[1].content;
            let overlap: String = head.chars().skip(head.chars().count() - 4).collect();
            assert!(tail.starts_with(&overlap));
        }

        // Every character of the source text survives, in order.
        let mut reassembled = chunks[0].content.clone();
        for chunk in &chunks[1..] {
            reassembled.push_str(&chunk.content[4..]);
        }
        assert_eq!(reassembled, text);
    }

    #[test]
    fn test_empty_document_has_no_chunks() {
        let splitter = TextSplitter::new(&config(10, 4)).unwrap();
        assert!(splitter.split(&document("")).is_empty());
    }

    #[test]
    fn test_overlap_must_be_smaller_than_window() {
        assert!(matches!(
            TextSplitter::new(&config(100, 100)),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            TextSplitter::new(&config(0, 0)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_chunk_ids_are_sequential() {
        let splitter = TextSplitter::new(&config(5, 1)).unwrap();
        let chunks = splitter.split(&document("0123456789"));
        let ids: Vec<_> = chunks.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["faq.md#0", "faq.md#1", "faq.md#2"]);
    }
}
