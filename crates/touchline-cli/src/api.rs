//! Direct OpenAI Chat Completions Client
//!
//! Minimal client for the diagnostic check; the server itself talks to
//! the Responses API through its own adapter.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

pub struct ChatCompletionsClient {
    client: Client,
    api_key: String,
}

pub enum CheckOutcome {
    Success(String),
    Failure { status: u16, body: String },
}

#[derive(Deserialize)]
struct ChatReply {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

impl ChatCompletionsClient {
    pub fn new(api_key: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
        }
    }

    pub async fn complete(&self, model: &str, prompt: &str) -> Result<CheckOutcome> {
        let resp = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": model,
                "messages": [{"role": "user", "content": prompt}],
            }))
            .send()
            .await
            .context("request to OpenAI failed")?;

        let status = resp.status();
        let body = resp.text().await.context("failed to read response body")?;

        if status.is_success() {
            let reply: ChatReply =
                serde_json::from_str(&body).context("unexpected response shape")?;
            let content = reply
                .choices
                .into_iter()
                .next()
                .map(|c| c.message.content)
                .unwrap_or_default();
            Ok(CheckOutcome::Success(content))
        } else {
            Ok(CheckOutcome::Failure {
                status: status.as_u16(),
                body,
            })
        }
    }
}
