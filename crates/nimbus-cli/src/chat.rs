//! Interactive chat session

use colored::*;

use nimbus_agent::SupportAgent;
use nimbus_core::Result;
use nimbus_rag::{format_chunks, Retriever};

use crate::ui::{display_banner, handle_input_with_history};

/// What the chat loop should do with one line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnAction {
    /// Terminate the session
    Exit,
    /// Blank input, prompt again without invoking the agent
    Skip,
    /// Forward the question to the agent
    Ask(String),
}

impl TurnAction {
    /// Classify one line of user input
    ///
    /// The exit tokens match the whole trimmed input, case-insensitively.
    pub fn from_input(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return TurnAction::Skip;
        }
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            return TurnAction::Exit;
        }
        TurnAction::Ask(trimmed.to_string())
    }
}

/// Answer one question and print it, with optional source listing
pub async fn ask_once(
    agent: &SupportAgent,
    retriever: &Retriever,
    question: &str,
    show_sources: bool,
) -> Result<()> {
    let answer = agent.answer(question).await?;
    println!("\n{}\n", answer);

    if show_sources {
        let chunks = retriever.search(question).await?;
        if !chunks.is_empty() {
            println!("{}\n", "Top sources:".bold());
            println!("{}\n", format_chunks(&chunks));
        }
    }

    Ok(())
}

/// Run the interactive chat loop until the user leaves
pub async fn run_chat(
    agent: &SupportAgent,
    retriever: &Retriever,
    show_sources: bool,
) -> Result<()> {
    display_banner();

    let mut history = Vec::new();

    loop {
        let Some(input) = handle_input_with_history(&mut history).await? else {
            println!("{}", "Goodbye!".green());
            break;
        };

        match TurnAction::from_input(&input) {
            TurnAction::Skip => continue,
            TurnAction::Exit => {
                println!("{}", "Goodbye!".green());
                break;
            }
            TurnAction::Ask(question) => {
                ask_once(agent, retriever, &question, show_sources).await?;
            }
        }
    }

    Ok(())
}
