//! OpenAI Responses API Adapter
//!
//! Implements the completion port against `POST {base}/responses`,
//! forwarding the instruction string and the web-search capability.
//! No retry or backoff; the client-level timeout bounds a hung upstream
//! call and surfaces it like any other transport failure.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use touchline::{ChatError, CompletionProvider, Tool};

use crate::config::Config;

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

#[derive(Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: &'a str,
    instructions: &'a str,
    tools: &'a [Tool],
}

#[derive(Deserialize)]
struct ResponsesReply {
    #[serde(default)]
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(default)]
    content: Vec<ContentPart>,
}

#[derive(Deserialize)]
struct ContentPart {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    text: String,
}

impl OpenAiProvider {
    pub fn new(config: &Config) -> Self {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .expect("failed to build HTTP client");

        Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
        }
    }
}

/// Pull the human-readable message out of an OpenAI error body, falling
/// back to the raw body when it is not the expected JSON shape.
fn upstream_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| {
            v.pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| body.to_string())
}

fn collect_output_text(reply: &ResponsesReply) -> String {
    let mut text = String::new();
    for part in reply.output.iter().flat_map(|item| item.content.iter()) {
        if part.kind == "output_text" {
            text.push_str(&part.text);
        }
    }
    text
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(
        &self,
        input: &str,
        instructions: &str,
        tools: &[Tool],
    ) -> Result<String, ChatError> {
        let request = ResponsesRequest {
            model: &self.model,
            input,
            instructions,
            tools,
        };

        let response = self
            .client
            .post(format!("{}/responses", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ChatError::Upstream(e.to_string()))?;

        if !status.is_success() {
            return Err(ChatError::Upstream(format!(
                "API error {}: {}",
                status.as_u16(),
                upstream_error_message(&body)
            )));
        }

        let reply: ResponsesReply = serde_json::from_str(&body)
            .map_err(|e| ChatError::Upstream(format!("unexpected response shape: {e}")))?;

        let text = collect_output_text(&reply);
        if text.is_empty() {
            return Err(ChatError::Upstream("No output text returned".to_string()));
        }
        Ok(text)
    }
}
