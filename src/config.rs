//! Configuration for opencall
//!
//! The API credential is resolved once at startup and carried in a
//! `Settings` value; nothing reads the process environment after this.

use anyhow::{Context, Result};

/// Environment variable holding the OpenAI API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Runtime settings resolved from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Bearer token for the completion API
    pub api_key: String,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// Expects `OPENAI_API_KEY` to be present (conventionally loaded from a
    /// local `.env` file before this is called).
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .with_context(|| format!("{} environment variable not set", API_KEY_VAR))?;
        Ok(Self { api_key })
    }
}
