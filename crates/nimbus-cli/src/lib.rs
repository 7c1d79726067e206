//! CLI front end for the NimbusWorkspaces support assistant

mod assistant;
mod chat;
mod eval;
mod ui;

pub use assistant::{build_assistant, DATA_DIR, DEFAULT_CASES_FILE, STORE_DIR};
pub use chat::{ask_once, run_chat, TurnAction};
pub use eval::{load_cases, missing_phrases, run_cases, CaseResult, EvalCase, EvalOptions};
pub use ui::{display_banner, handle_input_with_history};

// Re-export core types
pub use nimbus_core::{Error, Result};
