//! Closed set of tools offered to the model

use serde::Deserialize;
use serde_json::json;

use nimbus_core::ToolSpec;

/// The tools the agent can dispatch
///
/// A closed enum rather than a dynamic registry: every tool the model may
/// name is matched explicitly, and unknown names fall out as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportTool {
    /// Search the help center knowledge base
    KnowledgeSearch,
}

/// Arguments of a knowledge base search call
#[derive(Debug, Deserialize)]
pub struct SearchArgs {
    pub query: String,
}

impl SupportTool {
    pub const ALL: [SupportTool; 1] = [SupportTool::KnowledgeSearch];

    pub fn name(&self) -> &'static str {
        match self {
            SupportTool::KnowledgeSearch => "help_center_search",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SupportTool::KnowledgeSearch => {
                "Use this when answering questions about NimbusWorkspaces accounts, \
                 billing, limits, or troubleshooting. Input should be a natural \
                 language question."
            }
        }
    }

    /// Resolve a tool name reported by the model
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tool| tool.name() == name)
    }

    /// Wire description handed to the chat provider
    pub fn spec(&self) -> ToolSpec {
        match self {
            SupportTool::KnowledgeSearch => ToolSpec {
                name: self.name().to_string(),
                description: self.description().to_string(),
                parameters: json!({
                    "type": "object",
                    "properties": {
                        "query": {
                            "type": "string",
                            "description": "Natural language question to search the knowledge base for.",
                        }
                    },
                    "required": ["query"],
                }),
            },
        }
    }
}
