//! Conversation session persisted as a single JSON document.
//!
//! The session holds the business context plus a bounded window of recent
//! turns. Persistence is advisory: a missing or corrupt file falls back to
//! defaults, and a failed write is logged without interrupting the chat loop.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum number of turns retained in the persisted history.
pub const HISTORY_CAP: usize = 40;

/// Number of recent turns rendered into the outbound prompt.
pub const PROMPT_WINDOW: usize = 10;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// The sole persisted entity: one ongoing mentor conversation.
///
/// No schema version field; absent fields deserialize to defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Session {
    /// Set once by the extractor, never overwritten.
    pub business_name: Option<String>,
    /// Free-form lifecycle label.
    pub stage: String,
    pub challenge: Option<String>,
    pub history: Vec<Turn>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Session {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            business_name: None,
            stage: "ideation".into(),
            challenge: None,
            history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Session {
    /// Append a turn stamped with the current time, retaining only the most
    /// recent [`HISTORY_CAP`] entries.
    pub fn append_turn(&mut self, role: Role, content: impl Into<String>) {
        self.history.push(Turn {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        });
        if self.history.len() > HISTORY_CAP {
            let excess = self.history.len() - HISTORY_CAP;
            self.history.drain(..excess);
        }
    }
}

/// Handle for loading/saving the session document at a fixed path.
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted session. Any read or parse failure yields a fresh
    /// default session instead of an error.
    pub fn load(&self) -> Session {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(session) => session,
                Err(e) => {
                    tracing::warn!(
                        "session file {} is unreadable, starting fresh: {e}",
                        self.path.display()
                    );
                    Session::default()
                }
            },
            Err(_) => Session::default(),
        }
    }

    /// Stamp `updated_at` and write the full session as pretty-printed JSON,
    /// overwriting any existing content.
    pub fn save(&self, session: &mut Session) -> Result<()> {
        session.updated_at = Utc::now();
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating directory {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(session).context("serializing session")?;
        std::fs::write(&self.path, json)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }

    /// Reset to defaults and persist immediately. A failed write is logged;
    /// the fresh session is returned regardless.
    pub fn clear(&self) -> Session {
        let mut session = Session::default();
        if let Err(e) = self.save(&mut session) {
            tracing::warn!("failed to persist cleared session: {e:#}");
        }
        session
    }
}

/// Render the last [`PROMPT_WINDOW`] turns as alternating "User:" / "Mentor:"
/// lines joined by blank lines.
pub fn format_recent(history: &[Turn]) -> String {
    if history.is_empty() {
        return "No previous conversation.".into();
    }
    let start = history.len().saturating_sub(PROMPT_WINDOW);
    history[start..]
        .iter()
        .map(|turn| {
            let speaker = match turn.role {
                Role::User => "User",
                Role::Assistant => "Mentor",
            };
            format!("{speaker}: {}", turn.content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
