//! Classification of fetched pages.
//!
//! Builds the yes/no prompt around the raw page body, sends it through a
//! `CompletionProvider`, and maps the trimmed answer onto a verdict.

use crate::llm::{CompletionProvider, Message};
use anyhow::Result;

/// What the model said about an event's application window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepting,
    NotAccepting,
    Undetermined,
}

impl Verdict {
    /// Map a raw model answer onto a verdict.
    ///
    /// Exact, case-sensitive match after trimming: `yes` and `no` are the
    /// only recognized answers. Everything else (empty output, multi-word
    /// answers, a model ignoring the instruction) is `Undetermined`.
    pub fn from_answer(answer: &str) -> Self {
        match answer.trim() {
            "yes" => Self::Accepting,
            "no" => Self::NotAccepting,
            _ => Self::Undetermined,
        }
    }
}

/// The instruction placed ahead of the page body.
const PROMPT_INSTRUCTION: &str = "Based on the following webpage content, \
    determine if the event is currently accepting applications. \
    Answer only with 'yes' or 'no'. Content:";

/// The full page body goes in verbatim: no truncation, no token budget.
pub fn build_prompt(page_content: &str) -> String {
    format!("{}\n{}", PROMPT_INSTRUCTION, page_content)
}

/// Asks the provider whether a page indicates an open application window.
pub struct Classifier<P> {
    provider: P,
}

impl<P: CompletionProvider> Classifier<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Classify one fetched page. Provider failures propagate and halt the
    /// whole run; an unparseable answer does not.
    pub async fn classify(&self, page_content: &str) -> Result<Verdict> {
        let messages = [Message::user(build_prompt(page_content))];
        let response = self.provider.complete(&messages).await?;
        Ok(Verdict::from_answer(&response.content))
    }
}
