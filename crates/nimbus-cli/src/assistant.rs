//! Assembly of the agent and retriever from a configuration

use std::path::Path;
use std::sync::Arc;

use nimbus_agent::SupportAgent;
use nimbus_core::{AgentConfig, Result, VectorStore};
use nimbus_openai::OpenAiClient;
use nimbus_rag::{LocalVectorStore, Retriever};

/// Knowledge base source directory, relative to the working directory
pub const DATA_DIR: &str = "data";

/// Persisted index location written by ingest and read by everything else
pub const STORE_DIR: &str = "stores/help_center";

/// Default evaluation case file
pub const DEFAULT_CASES_FILE: &str = "evaluation/cases.yaml";

/// Build the agent/retriever pair used by both the chat session and the
/// evaluation harness
///
/// Loads the persisted index (failing with a pointer to `nimbus ingest`
/// when it is absent) and threads the one configuration object through
/// every component.
pub fn build_assistant(config: &AgentConfig) -> Result<(SupportAgent, Retriever)> {
    let client = Arc::new(
        OpenAiClient::from_env()?.with_embedding_model(config.embedding_model.clone()),
    );

    let store = LocalVectorStore::load(Path::new(STORE_DIR), client.clone())?;
    let store: Arc<dyn VectorStore> = Arc::new(store);

    let retriever = Retriever::new(store, config.top_k);
    let agent = SupportAgent::new(client, retriever.clone(), config.clone());

    Ok((agent, retriever))
}
