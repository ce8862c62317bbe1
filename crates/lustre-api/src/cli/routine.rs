//! `lustre routine` -- generate a routine and chat about it.
//!
//! Coordinates the full conversation lifecycle: load the persisted
//! selection, seed a fresh conversation session with it, print the
//! generated routine, then run the follow-up input loop. Optionally writes
//! the conversation out as an HTML transcript on exit.

use std::path::Path;

use anyhow::Result;
use console::style;
use dialoguer::Input;
use dialoguer::theme::ColorfulTheme;
use indicatif::{ProgressBar, ProgressStyle};
use termimad::MadSkin;

use lustre_core::render::render_markup;
use lustre_core::selection::SelectionStore;
use lustre_core::session::ConversationSession;
use lustre_types::chat::{ChatMessage, MessageRole};
use lustre_types::error::SessionError;

use crate::state::AppState;

/// Generate a routine from the persisted selection, then enter the
/// follow-up loop (skipped in `--json` mode).
pub async fn run_routine(state: &AppState, transcript: Option<&Path>, json: bool) -> Result<()> {
    let selection = state.selection_store.load().await?;

    if selection.is_empty() {
        if json {
            println!("{}", serde_json::json!({ "error": "empty_selection" }));
        } else {
            println!();
            println!(
                "  {} Select at least one product to generate a routine: {}",
                style("i").blue().bold(),
                style("lustre select <id>").yellow()
            );
            println!();
        }
        return Ok(());
    }

    let mut session = ConversationSession::new();
    let skin = MadSkin::default_dark();

    if !json {
        print_banner(selection.len(), &state.config.model);
    }

    let spinner = start_spinner("Generating your routine...", json);
    let result = session
        .start_routine_request(&state.client, &selection.routine_products())
        .await;
    spinner.finish_and_clear();

    match result {
        Ok(routine) => {
            if json {
                println!("{}", serde_json::json!({ "routine": routine }));
            } else {
                println!("{}", skin.term_text(&routine));
            }
        }
        Err(err) => {
            tracing::debug!(error = %err, "routine generation failed");
            if json {
                println!("{}", serde_json::json!({ "error": "assistant_unavailable" }));
            } else {
                println!(
                    "  {} Sorry, I couldn't generate a routine. Please try again.",
                    style("!").yellow().bold()
                );
            }
            return Ok(());
        }
    }

    if !json {
        followup_loop(state, &mut session, &skin).await;
    }

    if let Some(path) = transcript {
        let generated_at = chrono::Local::now().format("%Y-%m-%d %H:%M").to_string();
        let html = transcript_html(session.transcript(), &generated_at);
        tokio::fs::write(path, html).await?;
        if !json {
            println!(
                "  {} Transcript written to {}",
                style("✓").green().bold(),
                style(path.display()).cyan()
            );
        }
    }

    Ok(())
}

/// Read follow-up questions until the user exits.
///
/// Blank input is ignored; `/exit` and `/quit` (or closing stdin) leave the
/// loop. Assistant failures print a notice and keep the loop alive -- the
/// question stays in the session history either way.
async fn followup_loop(state: &AppState, session: &mut ConversationSession, skin: &MadSkin) {
    println!(
        "  {}",
        style("Ask a follow-up question, or /exit to leave").dim()
    );
    println!();

    loop {
        let input = Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("you")
            .allow_empty(true)
            .interact_text();

        let question = match input {
            Ok(text) => text,
            // Closed stdin or interrupt ends the conversation.
            Err(_) => break,
        };

        let question = question.trim().to_string();
        if question.is_empty() {
            continue;
        }
        if question == "/exit" || question == "/quit" {
            break;
        }

        let spinner = start_spinner("Thinking...", false);
        let result = session.ask_followup(&state.client, &question).await;
        spinner.finish_and_clear();

        match result {
            Ok(reply) => {
                println!("{}", skin.term_text(&reply));
            }
            Err(SessionError::EmptyQuestion) => continue,
            Err(err) => {
                tracing::debug!(error = %err, "follow-up failed");
                println!(
                    "  {} Sorry, I couldn't answer that. Please try again.",
                    style("!").yellow().bold()
                );
            }
        }
    }
}

/// Print the conversation header shown before the routine request.
fn print_banner(selected: usize, model: &str) {
    println!();
    println!(
        "  {} {}",
        style("✦").magenta(),
        style("Lustre routine assistant").cyan().bold()
    );
    println!(
        "  {} product{} selected  {}  {}",
        style(selected).bold(),
        if selected == 1 { "" } else { "s" },
        style("·").dim(),
        style(model).dim()
    );
    println!();
}

/// Spinner shown while a request is in flight (hidden in JSON mode).
fn start_spinner(message: &str, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Render the conversation as a standalone HTML document.
///
/// The system message is omitted; user and assistant turns pass through
/// [`render_markup`] so line breaks and links survive.
fn transcript_html(messages: &[ChatMessage], generated_at: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Lustre routine</title>\n</head>\n<body>\n");
    html.push_str("<h1>Lustre routine</h1>\n");
    html.push_str(&format!("<p><em>Generated on {generated_at}</em></p>\n"));

    for message in messages {
        let who = match message.role {
            MessageRole::System => continue,
            MessageRole::User => "You",
            MessageRole::Assistant => "Assistant",
        };
        html.push_str(&format!("<h3>{who}</h3>\n"));
        html.push_str(&format!("<p>{}</p>\n", render_markup(&message.content)));
    }

    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_html_skips_system_message() {
        let messages = vec![
            ChatMessage::system("persona"),
            ChatMessage::user("products here"),
            ChatMessage::assistant("your routine"),
        ];
        let html = transcript_html(&messages, "2026-08-30 10:00");
        assert!(!html.contains("persona"));
        assert!(html.contains("<h3>You</h3>"));
        assert!(html.contains("<h3>Assistant</h3>"));
        assert!(html.contains("your routine"));
        assert!(html.contains("2026-08-30 10:00"));
    }

    #[test]
    fn test_transcript_html_renders_markup() {
        let messages = vec![
            ChatMessage::system("persona"),
            ChatMessage::assistant("line one\nsee [src](https://example.com/a)"),
        ];
        let html = transcript_html(&messages, "now");
        assert!(html.contains("line one<br>"));
        assert!(html.contains(r#"<a href="https://example.com/a""#));
    }
}
