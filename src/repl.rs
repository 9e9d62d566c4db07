//! Interactive chat loop and slash-command dispatch.
//!
//! Strictly sequential: one line in, at most one completion request out. The
//! session value is threaded through each turn and reassigned by the caller,
//! so a failed turn provably leaves it untouched.

use anyhow::Result;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;

use crate::api::ChatClient;
use crate::extract::extract_business_info;
use crate::prompt::build_messages;
use crate::session::{Role, Session, SessionStore};

/// How one input line should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Blank line; re-prompt with no side effects.
    Ignore,
    Clear,
    Context,
    Quit,
    /// Not a command; runs through the chat pipeline.
    Chat,
}

/// Classify one line of input. Commands match case-insensitively on the
/// trimmed line; anything else passes through as chat.
pub fn dispatch(input: &str) -> Dispatch {
    let cmd = input.trim();
    if cmd.is_empty() {
        return Dispatch::Ignore;
    }
    match cmd.to_lowercase().as_str() {
        "/clear" => Dispatch::Clear,
        "/context" => Dispatch::Context,
        "/quit" | "/exit" => Dispatch::Quit,
        _ => Dispatch::Chat,
    }
}

/// Run the interactive loop until quit or end-of-input.
pub async fn run(client: ChatClient, store: SessionStore) -> Result<()> {
    let mut session = store.load();
    print_banner(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("\nYou: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            // stdin closed by the user.
            println!("\n\nSession saved. Now go build something.\n");
            return Ok(());
        };

        match dispatch(&line) {
            Dispatch::Ignore => continue,
            Dispatch::Clear => {
                session = store.clear();
                println!("\nHistory cleared. Fresh start.");
            }
            Dispatch::Context => print_context(&session),
            Dispatch::Quit => {
                println!("\nSee you next time. Now go build something.\n");
                return Ok(());
            }
            Dispatch::Chat => {
                session = chat_turn(&client, &store, session, line.trim()).await;
            }
        }
    }
}

/// Run one chat exchange: assemble the prompt, call the endpoint, print the
/// reply, then append both turns and persist. Returns the session unchanged
/// when the completion fails.
async fn chat_turn(
    client: &ChatClient,
    store: &SessionStore,
    mut session: Session,
    input: &str,
) -> Session {
    let messages = build_messages(input, &session);
    match client.complete(&messages).await {
        Ok(reply) => {
            println!("\nMentor: {reply}");
            session.append_turn(Role::User, input);
            session.append_turn(Role::Assistant, reply);
            extract_business_info(input, &mut session);
            if let Err(e) = store.save(&mut session) {
                warn!("failed to save session: {e:#}");
            }
        }
        Err(e) => {
            println!("\nError: {e}");
            println!("Check your API key and try again.");
        }
    }
    session
}

fn print_banner(session: &Session) {
    let status = match &session.business_name {
        Some(name) => format!("Working on: {name}"),
        None => "New session - tell me about your business.".to_string(),
    };
    println!(
        "\n\
         ╔═══════════════════════════════════════════════════════════════╗\n\
         ║                      BUSINESS-OS                              ║\n\
         ║                   Your AI Co-Founder                          ║\n\
         ╚═══════════════════════════════════════════════════════════════╝\n\
         \n\
         {status}\n\
         \n\
         Type your message. Commands: /clear /context /quit\n\
         ─────────────────────────────────────────────────────────────────"
    );
}

fn print_context(session: &Session) {
    println!("\n--- Current Context ---");
    println!(
        "Business: {}",
        session.business_name.as_deref().unwrap_or("Not set")
    );
    println!("Stage: {}", session.stage);
    println!(
        "Challenge: {}",
        session.challenge.as_deref().unwrap_or("Not set")
    );
    println!("Messages: {}", session.history.len());
    println!("----------------------");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[tokio::test]
    async fn failed_completion_leaves_session_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(&path);

        // Nothing listens on port 1, so the request fails at connect.
        let client = ChatClient::new(&Config {
            api_key: "test-key".into(),
            api_base: "http://127.0.0.1:1".into(),
            model: "gpt-4".into(),
        })
        .unwrap();

        let session = chat_turn(&client, &store, Session::default(), "hello").await;
        assert!(session.history.is_empty());
        assert!(session.business_name.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn recognizes_commands_case_insensitively() {
        assert_eq!(dispatch("/clear"), Dispatch::Clear);
        assert_eq!(dispatch("/CLEAR"), Dispatch::Clear);
        assert_eq!(dispatch("/Context"), Dispatch::Context);
        assert_eq!(dispatch("/quit"), Dispatch::Quit);
        assert_eq!(dispatch("/EXIT"), Dispatch::Quit);
    }

    #[test]
    fn trims_surrounding_whitespace_before_matching() {
        assert_eq!(dispatch("  /quit  "), Dispatch::Quit);
    }

    #[test]
    fn blank_input_is_ignored() {
        assert_eq!(dispatch(""), Dispatch::Ignore);
        assert_eq!(dispatch("   \t"), Dispatch::Ignore);
    }

    #[test]
    fn everything_else_is_chat() {
        assert_eq!(dispatch("hello there"), Dispatch::Chat);
        assert_eq!(dispatch("/clear the table"), Dispatch::Chat);
        assert_eq!(dispatch("/unknown"), Dispatch::Chat);
    }
}
