//! Tool-calling agent loop

use std::sync::Arc;

use colored::*;

use nimbus_core::{
    AgentConfig, ChatMessage, ChatOptions, ChatProvider, Result, ToolCall, ToolSpec,
};
use nimbus_rag::{format_chunks, Retriever};

use crate::tool::{SearchArgs, SupportTool};

const SYSTEM_PROMPT: &str = "You are the NimbusWorkspaces support assistant. You answer \
questions about accounts, billing, limits, and troubleshooting. Look up the help center \
with the help_center_search tool before answering, and keep answers concise and grounded \
in the retrieved documents.";

/// Answer returned when the iteration budget runs out before a final reply
const ITERATION_LIMIT_ANSWER: &str = "Agent stopped due to iteration limit.";

/// The support agent: one chat provider, one retriever-backed tool
///
/// Each question runs a fresh conversation. Rounds alternate between the
/// model and tool dispatch until the model answers without requesting a
/// tool, or the round budget is spent. Malformed tool calls are reported
/// back to the model as tool output rather than raised, so a confused model
/// gets another chance within the same budget.
pub struct SupportAgent {
    llm: Arc<dyn ChatProvider>,
    retriever: Retriever,
    config: AgentConfig,
}

impl SupportAgent {
    pub fn new(llm: Arc<dyn ChatProvider>, retriever: Retriever, config: AgentConfig) -> Self {
        Self {
            llm,
            retriever,
            config,
        }
    }

    /// Run the agent loop for one question and return the final answer
    pub async fn answer(&self, question: &str) -> Result<String> {
        let tools: Vec<ToolSpec> = SupportTool::ALL.iter().map(SupportTool::spec).collect();
        let options = ChatOptions {
            model: self.config.model.clone(),
            temperature: self.config.temperature,
        };

        let mut messages = vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(question),
        ];

        for _ in 0..self.config.max_iterations {
            let response = self.llm.chat(&messages, &tools, &options).await?;

            if response.tool_calls.is_empty() {
                let answer = response.content.unwrap_or_default().trim().to_string();
                return Ok(answer);
            }

            let calls = response.tool_calls;
            messages.push(ChatMessage::assistant_tool_calls(
                response.content,
                calls.clone(),
            ));

            for call in calls {
                let output = self.dispatch(&call).await?;
                messages.push(ChatMessage::tool(call.id, output));
            }
        }

        Ok(ITERATION_LIMIT_ANSWER.to_string())
    }

    /// Execute one tool call, folding every tool-level problem into the
    /// tool output so the loop never fails on a bad call
    async fn dispatch(&self, call: &ToolCall) -> Result<String> {
        let Some(tool) = SupportTool::from_name(&call.name) else {
            return Ok(format!("Unknown tool: {}", call.name));
        };

        match tool {
            SupportTool::KnowledgeSearch => {
                let args: SearchArgs = match serde_json::from_str(&call.arguments) {
                    Ok(args) => args,
                    Err(e) => return Ok(format!("Could not parse tool arguments: {}", e)),
                };

                if self.config.verbose {
                    println!(
                        "{}",
                        format!("  ⚙ help_center_search: {}", args.query).dimmed()
                    );
                }

                let chunks = self.retriever.search(&args.query).await?;
                if chunks.is_empty() {
                    Ok("No relevant documents found.".to_string())
                } else {
                    Ok(format_chunks(&chunks))
                }
            }
        }
    }
}
