//! Agent configuration

use serde::{Deserialize, Serialize};

/// Default chat model used for the agent policy
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1-mini";

/// Default model used to embed chunks and queries
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// Configuration parameters for the agent and retrieval stack
///
/// Constructed once per process invocation from CLI flags and passed by
/// reference to every component that needs it. There is no ambient lookup
/// after startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Chat model to use for the agent policy
    pub model: String,
    /// Sampling temperature for the chat model
    pub temperature: f32,
    /// Embeddings model used to build and query the vector index
    pub embedding_model: String,
    /// Number of chunks to retrieve per query
    pub top_k: usize,
    /// Maximum tool invocation rounds per question before the agent stops
    pub max_iterations: usize,
    /// Print tool invocation traces while the agent runs
    pub verbose: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_CHAT_MODEL.to_string(),
            temperature: 0.0,
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            top_k: 4,
            max_iterations: 4,
            verbose: false,
        }
    }
}
