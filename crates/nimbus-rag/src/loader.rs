//! Knowledge base document loader

use std::fs;
use std::path::Path;

use nimbus_core::{Document, DocumentMetadata, Error, Result};

/// Load every file under `data_dir` as one document each
///
/// Files are enumerated recursively and processed in sorted path order so
/// ingestion is deterministic. The source of each document is its path
/// relative to the data root.
pub fn load_directory(data_dir: &Path) -> Result<Vec<Document>> {
    let pattern = data_dir.join("**/*");
    let pattern = pattern.to_string_lossy();

    let mut files: Vec<_> = glob::glob(&pattern)
        .map_err(|e| Error::InvalidInput(format!("Bad data directory pattern: {}", e)))?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    if files.is_empty() {
        return Err(Error::MissingResource(
            "No documents were found in the data directory. Add markdown or text files and try again."
                .to_string(),
        ));
    }

    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        let content = fs::read_to_string(&path)?;
        let source = path
            .strip_prefix(data_dir)
            .unwrap_or(&path)
            .to_string_lossy()
            .into_owned();

        let mut document = Document {
            content,
            metadata: DocumentMetadata {
                source,
                title: None,
            },
        };
        ensure_title(&mut document);
        documents.push(document);
    }

    Ok(documents)
}

/// Default the title from the first non-empty content line, when absent
///
/// A leading mix of `#` and spaces is stripped so markdown headings read as
/// plain titles. An already-present title is never overwritten.
pub fn ensure_title(document: &mut Document) {
    if document.metadata.title.is_some() {
        return;
    }

    let Some(first_line) = document.content.trim().lines().next() else {
        return;
    };

    let title = first_line
        .trim_start_matches(['#', ' '])
        .trim()
        .to_string();
    if !title.is_empty() {
        document.metadata.title = Some(title);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(content: &str) -> Document {
        Document {
            content: content.to_string(),
            metadata: DocumentMetadata {
                source: "billing.md".to_string(),
                title: None,
            },
        }
    }

    #[test]
    fn test_title_from_markdown_heading() {
        let mut doc = document("# Billing FAQ\n\nRefunds are processed in 3 days.");
        ensure_title(&mut doc);
        assert_eq!(doc.metadata.title.as_deref(), Some("Billing FAQ"));
    }

    #[test]
    fn test_title_from_plain_first_line() {
        let mut doc = document("\n\nWorkspace limits\nEach plan has a seat cap.");
        ensure_title(&mut doc);
        assert_eq!(doc.metadata.title.as_deref(), Some("Workspace limits"));
    }

    #[test]
    fn test_existing_title_is_kept() {
        let mut doc = document("# Something else");
        doc.metadata.title = Some("Billing FAQ".to_string());
        ensure_title(&mut doc);
        assert_eq!(doc.metadata.title.as_deref(), Some("Billing FAQ"));
    }

    #[test]
    fn test_no_title_from_empty_content() {
        let mut doc = document("   \n\n  ");
        ensure_title(&mut doc);
        assert!(doc.metadata.title.is_none());

        let mut doc = document("### \nbody");
        ensure_title(&mut doc);
        assert!(doc.metadata.title.is_none());
    }

    #[test]
    fn test_load_directory_sorted_and_relative() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("guides")).unwrap();
        std::fs::write(dir.path().join("zz-last.md"), "# Last").unwrap();
        std::fs::write(dir.path().join("guides/nested.md"), "# Nested").unwrap();
        std::fs::write(dir.path().join("aa-first.md"), "# First").unwrap();

        let documents = load_directory(dir.path()).unwrap();
        let sources: Vec<_> = documents
            .iter()
            .map(|d| d.metadata.source.as_str())
            .collect();
        assert_eq!(sources, vec!["aa-first.md", "guides/nested.md", "zz-last.md"]);
        assert_eq!(documents[0].metadata.title.as_deref(), Some("First"));
    }

    #[test]
    fn test_load_directory_empty_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_directory(dir.path()).unwrap_err();
        assert!(matches!(err, Error::MissingResource(_)));
    }
}
