// file: src/inference/client.rs
// description: Ollama generate API integration for data questions
// reference: https://github.com/ollama/ollama/blob/main/docs/api.md#generate-a-completion

use crate::error::{DashboardError, Result};
use crate::inference::prompt::PromptBuilder;
use crate::inference::response::parse_reply;
use crate::models::{AssistantReply, IncidentRecord};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama2";

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Single-shot client. No timeout and no retries: a call lasts as long as
/// the endpoint takes.
pub struct OllamaClient {
    client: Client,
    endpoint: String,
    model: String,
    prompts: PromptBuilder,
}

impl OllamaClient {
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: normalize_endpoint(&endpoint.into()),
            model: model.into(),
            prompts: PromptBuilder::default(),
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.prompts = PromptBuilder::new(sample_size);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_endpoint(&mut self, endpoint: &str) {
        self.endpoint = normalize_endpoint(endpoint);
    }

    pub async fn ask(&self, question: &str, records: &[IncidentRecord]) -> Result<AssistantReply> {
        let prompt = self.prompts.build(question, records)?;
        let raw = self.generate(&prompt).await?;
        Ok(parse_reply(&raw))
    }

    /// Posts one prompt to `{endpoint}/api/generate` and returns the raw text.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.endpoint);
        let request = GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
        };

        debug!(
            "Requesting completion from {} ({} prompt chars)",
            url,
            prompt.len()
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| DashboardError::connectivity(&self.endpoint, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DashboardError::connectivity(
                &self.endpoint,
                format!("status {}: {}", status, error_text),
            ));
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            DashboardError::connectivity(&self.endpoint, format!("unreadable response: {}", e))
        })?;

        debug!("Received {} response chars", body.response.len());
        Ok(body.response)
    }
}

impl Default for OllamaClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, DEFAULT_MODEL)
    }
}

fn normalize_endpoint(endpoint: &str) -> String {
    endpoint.trim().trim_end_matches('/').to_string()
}
