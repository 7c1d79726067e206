//! Terminal helpers for the chat session

use std::io::{self, IsTerminal, Write};

use colored::*;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};

use nimbus_core::Result;

/// Display the startup banner
pub fn display_banner() {
    println!();
    println!("{}", "NimbusWorkspaces Support Assistant".blue().bold());
    println!("{}", "Type 'exit' or 'quit' to end the chat.".dimmed());
    println!();
}

/// Read one line of input, with arrow-key history navigation
///
/// Returns `None` on end of input (EOF on piped stdin, Ctrl+C/Ctrl+D in a
/// terminal); the chat loop treats that as a request to terminate.
pub async fn handle_input_with_history(history: &mut Vec<String>) -> Result<Option<String>> {
    // Piped input reads straight from stdin, one line per turn.
    if !io::stdin().is_terminal() {
        let mut input = String::new();
        let bytes = io::stdin().read_line(&mut input)?;
        if bytes == 0 {
            return Ok(None);
        }
        let input = input.trim().to_string();
        if !input.is_empty() {
            history.push(input.clone());
        }
        return Ok(Some(input));
    }

    enable_raw_mode()?;
    let mut input = String::new();
    let mut history_index: Option<usize> = None;
    let mut cursor_pos = 0;

    print!("{} ", "nimbus>".green().bold());
    io::stdout().flush()?;

    loop {
        if let Event::Key(key_event) = event::read()? {
            let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
            match key_event.code {
                KeyCode::Char('c') if ctrl => {
                    disable_raw_mode()?;
                    println!();
                    return Ok(None);
                }
                KeyCode::Char('d') if ctrl && input.is_empty() => {
                    disable_raw_mode()?;
                    println!();
                    return Ok(None);
                }
                KeyCode::Enter => {
                    disable_raw_mode()?;
                    println!();
                    if !input.is_empty() {
                        history.push(input.clone());
                    }
                    return Ok(Some(input));
                }
                KeyCode::Char(c) => {
                    input.insert(cursor_pos, c);
                    cursor_pos += 1;
                    print!("\r{} {}", "nimbus>".green().bold(), input);
                    io::stdout().flush()?;
                }
                KeyCode::Backspace => {
                    if cursor_pos > 0 {
                        input.remove(cursor_pos - 1);
                        cursor_pos -= 1;
                        print!(
                            "\r{} {}  \r{} {}",
                            "nimbus>".green().bold(),
                            input,
                            "nimbus>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Up => {
                    if !history.is_empty() {
                        let new_index = match history_index {
                            None => history.len() - 1,
                            Some(idx) if idx > 0 => idx - 1,
                            Some(idx) => idx,
                        };
                        history_index = Some(new_index);
                        input = history[new_index].clone();
                        cursor_pos = input.len();
                        print!(
                            "\r{} {}  \r{} {}",
                            "nimbus>".green().bold(),
                            " ".repeat(50),
                            "nimbus>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Down => {
                    if let Some(idx) = history_index {
                        if idx < history.len() - 1 {
                            let new_index = idx + 1;
                            history_index = Some(new_index);
                            input = history[new_index].clone();
                        } else {
                            history_index = None;
                            input.clear();
                        }
                        cursor_pos = input.len();
                        print!(
                            "\r{} {}  \r{} {}",
                            "nimbus>".green().bold(),
                            " ".repeat(50),
                            "nimbus>".green().bold(),
                            input
                        );
                        io::stdout().flush()?;
                    }
                }
                KeyCode::Esc => {
                    disable_raw_mode()?;
                    println!();
                    return Ok(Some(String::new()));
                }
                _ => {}
            }
        }
    }
}
