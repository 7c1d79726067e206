use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::*;

use nimbus_cli::{
    ask_once, build_assistant, load_cases, run_cases, run_chat, EvalOptions, DATA_DIR,
    DEFAULT_CASES_FILE, STORE_DIR,
};
use nimbus_core::{AgentConfig, IndexingConfig, DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL};
use nimbus_openai::OpenAiClient;
use nimbus_rag::ingest_directory;

#[derive(Parser)]
#[command(name = "nimbus")]
#[command(about = "Agentic RAG assistant for the NimbusWorkspaces help center", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Flags shared by every command that talks to the models
#[derive(Args, Clone)]
struct ModelArgs {
    /// Chat model to use for the agent policy
    #[arg(long, default_value = DEFAULT_CHAT_MODEL)]
    model: String,

    /// Sampling temperature for the chat model
    #[arg(long, default_value_t = 0.0)]
    temperature: f32,

    /// Embeddings model used to load the vector index
    #[arg(long, default_value = DEFAULT_EMBEDDING_MODEL)]
    embedding_model: String,

    /// Number of documents to retrieve per query
    #[arg(long, default_value_t = 4)]
    top_k: usize,

    /// Maximum tool invocations per turn before the agent stops
    #[arg(long, default_value_t = 4)]
    max_iterations: usize,

    /// Print tool invocation traces
    #[arg(long)]
    verbose: bool,
}

impl ModelArgs {
    fn to_config(&self) -> AgentConfig {
        AgentConfig {
            model: self.model.clone(),
            temperature: self.temperature,
            embedding_model: self.embedding_model.clone(),
            top_k: self.top_k,
            max_iterations: self.max_iterations,
            verbose: self.verbose,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Chat with the support assistant
    Chat {
        #[command(flatten)]
        model: ModelArgs,

        /// Display the top retrieved documents after each answer
        #[arg(long)]
        show_sources: bool,

        /// Ask a single question and exit instead of starting the chat loop
        #[arg(long)]
        question: Option<String>,
    },
    /// Build the help center index from the data directory
    Ingest,
    /// Run regression-style checks against the assistant
    Evaluate {
        #[command(flatten)]
        model: ModelArgs,

        /// Path to a YAML file describing evaluation cases
        #[arg(long, default_value = DEFAULT_CASES_FILE)]
        cases: PathBuf,

        /// Limit on the number of cases to execute
        #[arg(long)]
        limit: Option<usize>,

        /// Stop running once a case fails
        #[arg(long)]
        fail_fast: bool,

        /// Print retrieved document snippets for each case
        #[arg(long)]
        show_context: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Ingest) => ingest().await,
        Some(Commands::Evaluate {
            model,
            cases,
            limit,
            fail_fast,
            show_context,
        }) => {
            evaluate(
                model.to_config(),
                &cases,
                EvalOptions {
                    limit,
                    fail_fast,
                    show_context,
                },
            )
            .await
        }
        Some(Commands::Chat {
            model,
            show_sources,
            question,
        }) => chat(model.to_config(), show_sources, question).await,
        None => chat(AgentConfig::default(), false, None).await,
    }
}

async fn chat(config: AgentConfig, show_sources: bool, question: Option<String>) -> Result<()> {
    let (agent, retriever) = build_assistant(&config)?;

    if let Some(question) = question {
        ask_once(&agent, &retriever, &question, show_sources).await?;
        return Ok(());
    }

    run_chat(&agent, &retriever, show_sources).await?;
    Ok(())
}

async fn ingest() -> Result<()> {
    let embedder = Arc::new(OpenAiClient::from_env()?);

    println!("{} Building the help center index...", "📚".blue());
    let report = ingest_directory(
        Path::new(DATA_DIR),
        Path::new(STORE_DIR),
        embedder,
        &IndexingConfig::default(),
    )
    .await?;

    println!(
        "Ingested {} files and created {} chunks.",
        report.files, report.chunks
    );
    println!("Vector store saved to: {}", STORE_DIR);
    Ok(())
}

async fn evaluate(config: AgentConfig, cases_path: &Path, options: EvalOptions) -> Result<()> {
    let cases = load_cases(cases_path)?;
    let (agent, retriever) = build_assistant(&config)?;

    run_cases(&agent, &retriever, cases, &options).await?;
    Ok(())
}
