//! CLI entrypoint for bos, the Business-OS mentor.
//!
//! Parses the few top-level flags, validates environment configuration, and
//! hands off to the interactive loop.

mod api;
mod config;
mod extract;
mod persona;
mod prompt;
mod repl;
mod session;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
/// Top-level CLI arguments parsed by clap.
#[command(
    name = "bos",
    about = "Business-OS - AI mentor for entrepreneurs",
    after_help = "\
Commands during chat:
  /clear           Clear history
  /context         Show current context
  /quit or /exit   Exit the chat

Environment variables:
  KIMI_API_KEY     API key for Kimi (recommended)
  OPENAI_API_KEY   API key for OpenAI (fallback)
  KIMI_API_BASE    API endpoint (default: OpenAI compatible)
  BOS_MODEL        Model to use (default: gpt-4)"
)]
struct Cli {
    /// Clear conversation history and start fresh
    #[arg(long)]
    clear: bool,

    /// Anything unrecognized is accepted and ignored.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    rest: Vec<String>,
}

impl Cli {
    /// `--clear` clears even when an unrecognized token precedes it and
    /// pushes it into the passthrough catch-all.
    fn wants_clear(&self) -> bool {
        self.clear || self.rest.iter().any(|arg| arg == "--clear")
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let store = session::SessionStore::new(config::session_path());

    if cli.wants_clear() {
        store.clear();
        println!("Conversation history cleared.");
        return Ok(());
    }

    let Some(cfg) = config::Config::from_env() else {
        print_missing_key_hint();
        std::process::exit(1);
    };

    let client = api::ChatClient::new(&cfg)?;
    repl::run(client, store).await
}

/// Usage hint shown when no credential is configured.
fn print_missing_key_hint() {
    eprintln!("\nNo API key found.\n");
    eprintln!("Set one of these environment variables:");
    eprintln!("  export KIMI_API_KEY=your-key-here    # For Kimi");
    eprintln!("  export OPENAI_API_KEY=your-key-here  # For OpenAI\n");
    eprintln!("Optional:");
    eprintln!("  export KIMI_API_BASE=https://api.moonshot.ai/v1  # Alternate endpoint");
    eprintln!("  export BOS_MODEL=kimi-k2.5                       # Model name");
}
