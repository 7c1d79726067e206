//! YAML-driven regression harness

use std::fs;
use std::path::Path;

use colored::*;
use serde::Deserialize;

use nimbus_agent::SupportAgent;
use nimbus_core::{Error, Result};
use nimbus_rag::{format_chunks, Retriever};

/// Single evaluation prompt with required phrases
#[derive(Debug, Clone, Deserialize)]
pub struct EvalCase {
    pub id: String,
    pub question: String,
    #[serde(default)]
    pub must_include: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Deserialize)]
struct CaseFile {
    cases: Vec<EvalCase>,
}

/// Outcome of running the agent against an evaluation case
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub case: EvalCase,
    pub answer: String,
    pub missing_phrases: Vec<String>,
    pub retrieved_snippets: String,
}

impl CaseResult {
    pub fn passed(&self) -> bool {
        self.missing_phrases.is_empty()
    }
}

/// Harness switches taken from the CLI
#[derive(Debug, Clone, Default)]
pub struct EvalOptions {
    /// Truncate the case list before execution
    pub limit: Option<usize>,
    /// Stop running once a case fails
    pub fail_fast: bool,
    /// Print retrieved document snippets for each case
    pub show_context: bool,
}

/// Parse the YAML case file
///
/// A file without a top-level `cases` list is rejected at load time.
pub fn load_cases(path: &Path) -> Result<Vec<EvalCase>> {
    let raw = fs::read_to_string(path).map_err(|_| {
        Error::MissingResource(format!("Evaluation case file not found: {}", path.display()))
    })?;

    let file: CaseFile = serde_yaml::from_str(&raw)
        .map_err(|e| Error::InvalidInput(format!("No cases found in {}: {}", path.display(), e)))?;

    Ok(file.cases)
}

/// Return the `must_include` phrases absent from the answer
///
/// Matching is case-insensitive substring containment, order-independent.
pub fn missing_phrases(answer: &str, must_include: &[String]) -> Vec<String> {
    let lower_answer = answer.to_lowercase();
    must_include
        .iter()
        .filter(|phrase| !lower_answer.contains(&phrase.to_lowercase()))
        .cloned()
        .collect()
}

/// Run the agent over the cases, printing per-case and summary lines
///
/// Results for every executed case are returned, including the failing case
/// that stopped a `fail_fast` run.
pub async fn run_cases(
    agent: &SupportAgent,
    retriever: &Retriever,
    mut cases: Vec<EvalCase>,
    options: &EvalOptions,
) -> Result<Vec<CaseResult>> {
    if let Some(limit) = options.limit {
        cases.truncate(limit);
    }

    let mut results = Vec::new();

    for case in cases {
        let answer = agent.answer(&case.question).await?.trim().to_string();
        let missing = missing_phrases(&answer, &case.must_include);

        let chunks = retriever.search(&case.question).await?;
        let snippets = if chunks.is_empty() {
            String::new()
        } else {
            format_chunks(&chunks)
        };

        let result = CaseResult {
            case,
            answer,
            missing_phrases: missing,
            retrieved_snippets: snippets,
        };
        print_case(&result, options.show_context);

        let failed = !result.passed();
        results.push(result);

        if options.fail_fast && failed {
            break;
        }
    }

    print_summary(&results);
    Ok(results)
}

fn print_case(result: &CaseResult, show_context: bool) {
    let status = if result.passed() {
        "PASS".green()
    } else {
        "FAIL".red()
    };
    println!("[{}] {} — {}", status, result.case.id, result.case.question);

    if !result.case.notes.is_empty() {
        println!("  Notes: {}", result.case.notes);
    }
    if !result.missing_phrases.is_empty() {
        println!("  Missing phrases: {}", result.missing_phrases.join(", "));
    }
    if show_context && !result.retrieved_snippets.is_empty() {
        println!("  Retrieved snippets:\n");
        println!("{}", indent_block(&result.retrieved_snippets, "    "));
    }
    println!();
}

fn print_summary(results: &[CaseResult]) {
    let total = results.len();
    if total == 0 {
        println!("No cases executed.");
        return;
    }

    let passed = results.iter().filter(|r| r.passed()).count();
    println!("Summary: {}/{} cases passed", passed, total);
}

fn indent_block(text: &str, prefix: &str) -> String {
    text.lines()
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}
