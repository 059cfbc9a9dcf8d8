//! Touchline CLI - API connectivity diagnostics
//!
//! `touchline check` calls the OpenAI API directly, bypassing the server,
//! which separates API-key problems from application problems.

mod api;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;

use api::{ChatCompletionsClient, CheckOutcome};

#[derive(Parser)]
#[command(name = "touchline")]
#[command(about = "Touchline CLI - league chat service diagnostics", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one test completion directly to the OpenAI API
    Check {
        /// Model to test against
        #[arg(short, long, default_value = "gpt-3.5-turbo")]
        model: String,
        /// Prompt to send
        #[arg(short, long, default_value = "Hello, world!")]
        prompt: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Check { model, prompt } => check(&model, &prompt).await,
    }
}

async fn check(model: &str, prompt: &str) -> Result<()> {
    let Ok(api_key) = std::env::var("OPENAI_API_KEY") else {
        bail!("OPENAI_API_KEY not found in environment variables. Add it to .env before continuing.");
    };

    let prefix: String = api_key.chars().take(10).collect();
    println!("Using API key (first 10 chars): {prefix}...");
    println!("Sending direct API request to OpenAI...");

    let client = ChatCompletionsClient::new(&api_key);
    match client.complete(model, prompt).await? {
        CheckOutcome::Success(text) => {
            println!("{} {}", "Success!".green().bold(), text);
        }
        CheckOutcome::Failure { status, body } => {
            println!("{} {}", "Status code:".red().bold(), status);
            println!("{body}");
            if let Some(hint) = hint_for(status) {
                println!("\n{}", hint.yellow());
            }
            println!("\nFix your API key before starting the server.");
        }
    }

    Ok(())
}

fn hint_for(status: u16) -> Option<&'static str> {
    match status {
        401 => Some("Authentication error: your API key may be invalid or expired."),
        403 => Some(
            "Authorization error: your API key doesn't have permission to use this model. \
             If you're using a project key, check its model access.",
        ),
        429 => Some("Rate limit exceeded: you've hit OpenAI's rate limits."),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hints_cover_common_failures() {
        assert!(hint_for(401).unwrap().contains("invalid or expired"));
        assert!(hint_for(403).unwrap().contains("permission"));
        assert!(hint_for(429).unwrap().contains("Rate limit"));
        assert!(hint_for(500).is_none());
    }
}
