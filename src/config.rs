//! Environment configuration and fixed filesystem paths.

use std::path::PathBuf;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4";

/// File name of the persisted session, a dotfile in the user's home.
pub const SESSION_FILE_NAME: &str = ".business-os-context.json";

/// Settings read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Bearer credential for the completion endpoint.
    pub api_key: String,
    /// Endpoint base, e.g. "https://api.openai.com/v1".
    pub api_base: String,
    /// Model identifier sent with every request.
    pub model: String,
}

impl Config {
    /// Read configuration from the environment. Returns `None` when no
    /// credential is set; the caller prints the usage hint and exits.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("KIMI_API_KEY")
            .or_else(|_| std::env::var("OPENAI_API_KEY"))
            .ok()?;
        Some(Self {
            api_key,
            api_base: std::env::var("KIMI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.into()),
            model: std::env::var("BOS_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.into()),
        })
    }
}

/// Resolve the fixed session-file path. Falls back to the current directory
/// when `HOME` is unset.
pub fn session_path() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(SESSION_FILE_NAME)
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_path_is_the_context_dotfile() {
        let path = session_path();
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some(SESSION_FILE_NAME)
        );
    }
}
