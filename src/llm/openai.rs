//! OpenAI API Provider.
//!
//! Implements the `CompletionProvider` trait for OpenAI's Chat Completions
//! API. Requests are single-shot JSON-over-HTTPS; nothing is streamed.

use super::provider::CompletionProvider;
use super::types::{CompletionResponse, Message, Usage};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Token cap for the one-word answer.
const MAX_ANSWER_TOKENS: u32 = 5;
/// Greedy decoding.
const TEMPERATURE: f32 = 0.0;
/// Only the first choice is ever consulted.
const CHOICE_COUNT: u32 = 1;

/// OpenAI provider configuration and state.
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl OpenAiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: messages.to_vec(),
            max_tokens: MAX_ANSWER_TOKENS,
            temperature: TEMPERATURE,
            n: CHOICE_COUNT,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request)
            .send()
            .await
            .context("failed to send request to OpenAI")?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!(
                "OpenAI API request failed with status {}: {}",
                status.as_u16(),
                body
            ));
        }

        let chat_response: ChatCompletionResponse = response
            .json()
            .await
            .context("failed to decode OpenAI response")?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .context("no choices returned from OpenAI API")?;

        Ok(CompletionResponse {
            content: choice.message.content,
            usage: chat_response.usage.into(),
        })
    }
}

// -----------------------------------------------------------------------------
// Wire DTOs
// -----------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub max_tokens: u32,
    pub temperature: f32,
    pub n: u32,
}

/// Full response shape; only `choices[0].message.content` is consulted.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub id: String,
    pub object: String,
    pub created: i64,
    pub model: String,
    pub choices: Vec<ChatCompletionChoice>,
    pub usage: OpenAiUsage,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionChoice {
    pub index: u32,
    pub message: Message,
    pub finish_reason: String,
}

#[derive(Debug, Deserialize)]
pub struct OpenAiUsage {
    pub prompt_tokens: usize,
    pub completion_tokens: usize,
    pub total_tokens: usize,
}

impl From<OpenAiUsage> for Usage {
    fn from(u: OpenAiUsage) -> Self {
        Self {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
            total_tokens: u.total_tokens,
        }
    }
}
