//! Core traits and types for the NimbusWorkspaces support assistant
//!
//! This crate defines the fundamental traits and types used across the
//! assistant. It provides capability-facing interfaces for chat providers,
//! embedding providers, and vector stores, making the system test-friendly
//! and keeping the delegated capabilities behind narrow seams.

pub mod config;
pub mod document;
pub mod embedding;
pub mod error;
pub mod llm;
pub mod vector_store;

pub use config::{AgentConfig, DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL};
pub use document::{Chunk, Document, DocumentMetadata, IndexingConfig};
pub use embedding::EmbeddingProvider;
pub use error::{Error, Result};
pub use llm::{ChatMessage, ChatOptions, ChatProvider, ChatResponse, ChatRole, ToolCall, ToolSpec};
pub use vector_store::{SearchConfig, VectorStore};
