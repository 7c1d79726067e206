//! OpenAI-compatible API integration for the NimbusWorkspaces support assistant
//!
//! This crate provides the OpenAI implementation of the ChatProvider and
//! EmbeddingProvider traits.

mod client;
mod config;

#[cfg(test)]
mod tests;

pub use client::OpenAiClient;
pub use config::OpenAiConfig;

// Re-export core types for convenience
pub use nimbus_core::{ChatProvider, EmbeddingProvider, Error, Result};
