//! Human-readable rendering of retrieved chunks

use nimbus_core::Chunk;

/// Render chunks as a numbered block with source/title headers
///
/// Each chunk becomes `[i] title — source` (or `[i] source` without a
/// title) followed by its trimmed content; blocks are joined by a blank
/// line. Zero chunks render as the empty string; any "nothing found"
/// default is the caller's concern.
pub fn format_chunks(chunks: &[Chunk]) -> String {
    let mut formatted = Vec::with_capacity(chunks.len());

    for (idx, chunk) in chunks.iter().enumerate() {
        let header = match chunk.metadata.title.as_deref() {
            Some(title) => format!("[{}] {} — {}", idx + 1, title, chunk.metadata.source),
            None => format!("[{}] {}", idx + 1, chunk.metadata.source),
        };
        let block = format!("{}\n{}", header, chunk.content.trim());
        formatted.push(block.trim().to_string());
    }

    formatted.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_core::DocumentMetadata;

    fn chunk(content: &str, source: &str, title: Option<&str>) -> Chunk {
        Chunk {
            id: format!("{}#0", source),
            content: content.to_string(),
            metadata: DocumentMetadata {
                source: source.to_string(),
                title: title.map(str::to_string),
            },
            embedding: None,
            score: None,
        }
    }

    #[test]
    fn test_empty_input_renders_empty() {
        assert_eq!(format_chunks(&[]), "");
    }

    #[test]
    fn test_header_with_title() {
        let chunks = vec![chunk(
            "Refunds are processed in 3 days.\n",
            "billing.md",
            Some("Billing FAQ"),
        )];
        let rendered = format_chunks(&chunks);
        assert!(rendered.starts_with("[1] Billing FAQ — billing.md"));
        assert_eq!(
            rendered,
            "[1] Billing FAQ — billing.md\nRefunds are processed in 3 days."
        );
    }

    #[test]
    fn test_header_without_title() {
        let chunks = vec![chunk("Plain notes.", "notes.txt", None)];
        assert_eq!(format_chunks(&chunks), "[1] notes.txt\nPlain notes.");
    }

    #[test]
    fn test_blocks_joined_by_blank_line() {
        let chunks = vec![
            chunk("First.", "a.md", Some("A")),
            chunk("Second.", "b.md", None),
        ];
        assert_eq!(
            format_chunks(&chunks),
            "[1] A — a.md\nFirst.\n\n[2] b.md\nSecond."
        );
    }
}
