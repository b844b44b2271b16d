//! Narrative provider configuration, read from the environment.

use secrecy::SecretString;
use std::env;

/// Google AI Studio's OpenAI-compatible endpoint.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/openai";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Settings for the chat completions provider.
#[derive(Debug)]
pub struct NarrativeConfig {
    pub api_key: Option<SecretString>,
    pub base_url: String,
    pub model: String,
    pub timeout_secs: u64,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            temperature: 0.4,
            max_tokens: 1200,
        }
    }
}

impl NarrativeConfig {
    /// Reads `NARRATIVE_API_KEY`, `NARRATIVE_BASE_URL`, `NARRATIVE_MODEL` and
    /// `NARRATIVE_TIMEOUT_SECS`. Unset or unparsable values fall back to the
    /// defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            api_key: non_empty("NARRATIVE_API_KEY").map(SecretString::from),
            base_url: non_empty("NARRATIVE_BASE_URL").unwrap_or(defaults.base_url),
            model: non_empty("NARRATIVE_MODEL").unwrap_or(defaults.model),
            timeout_secs: non_empty("NARRATIVE_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.timeout_secs),
            ..defaults
        }
    }
}
