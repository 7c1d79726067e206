//! Agent loop for the NimbusWorkspaces support assistant
//!
//! This crate wires the chat provider and the retriever together: the model
//! is offered one knowledge base search tool and alternates between invoking
//! it and answering, bounded by the configured iteration budget.

mod agent;
mod tool;

pub use agent::SupportAgent;
pub use tool::SupportTool;

// Re-export core types for convenience
pub use nimbus_core::{AgentConfig, ChatProvider, Error, Result};
