//! opencall
//!
//! Walks a CSV of (name, url) pairs, fetches each page, and asks a
//! chat-completion model whether the event is currently accepting
//! applications. One pass, strictly sequential, no persistence.

pub mod classify;
pub mod config;
pub mod fetch;
pub mod llm;
pub mod pipeline;
pub mod records;

// Re-export key types
pub use classify::{Classifier, Verdict};
pub use config::Settings;
pub use fetch::{FetchError, HttpFetcher, PageFetcher};
pub use llm::openai::OpenAiProvider;
pub use llm::{CompletionProvider, CompletionResponse, Message, Role};
pub use pipeline::report::Reporter;
pub use pipeline::ClassifyPipeline;
pub use records::{Record, RecordSource};
