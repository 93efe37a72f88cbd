//! The provider abstraction.
//!
//! One trait between the classifier and whatever serves completions, so the
//! record loop can be exercised against scripted fakes in tests.

use super::types::{CompletionResponse, Message};
use anyhow::Result;
use async_trait::async_trait;

/// The core trait for completion requests.
///
/// Any failure here (transport, status, decoding, an empty choice list)
/// is an `Err`, and callers treat it as fatal for the whole run.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a chat completion request and return the first choice.
    async fn complete(&self, messages: &[Message]) -> Result<CompletionResponse>;
}
