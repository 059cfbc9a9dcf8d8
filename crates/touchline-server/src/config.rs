//! Server Configuration
//!
//! Environment-driven, with defaults for everything except the API key.
//! A missing key is deliberately not a startup error: the server comes up
//! and requests fail upstream instead.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use touchline::RulesPolicy;

pub const DEFAULT_MODEL: &str = "gpt-4o";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub bind: SocketAddr,
    pub model: String,
    pub api_base: String,
    pub rules_path: PathBuf,
    pub rules_policy: RulesPolicy,
    pub upstream_timeout: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind = env_or("TOUCHLINE_BIND", "127.0.0.1:5000");
        let bind = bind
            .parse()
            .with_context(|| format!("invalid TOUCHLINE_BIND: {bind}"))?;

        let policy = env_or("TOUCHLINE_RULES_POLICY", "embed");
        let rules_policy = policy
            .parse::<RulesPolicy>()
            .map_err(anyhow::Error::msg)
            .context("invalid TOUCHLINE_RULES_POLICY")?;

        let timeout = env_or("TOUCHLINE_UPSTREAM_TIMEOUT_SECS", "30");
        let timeout_secs: u64 = timeout
            .parse()
            .with_context(|| format!("invalid TOUCHLINE_UPSTREAM_TIMEOUT_SECS: {timeout}"))?;

        Ok(Self {
            api_key: std::env::var("OPENAI_API_KEY").unwrap_or_default(),
            bind,
            model: env_or("TOUCHLINE_MODEL", DEFAULT_MODEL),
            api_base: env_or("TOUCHLINE_API_BASE", DEFAULT_API_BASE),
            rules_path: env_or("TOUCHLINE_RULES_PATH", "league_rules.pdf").into(),
            rules_policy,
            upstream_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
