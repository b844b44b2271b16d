//! Narrative audit requests.
//!
//! Formats a profile and its computed result as plain facts, sends them to
//! an external text-generation service and hands back whatever text comes
//! out. The financial numbers never depend on this crate succeeding.

/// Requester that ties prompt and provider together.
pub mod auditor;
/// OpenAI-compatible chat completions provider.
pub mod chat;
/// Provider configuration.
pub mod config;
/// Error types.
pub mod error;
/// Prompt assembly.
pub mod prompt;
/// Provider trait.
pub mod provider;

pub use auditor::{NarrativeAudit, NarrativeAuditor};
pub use chat::ChatCompletionsProvider;
pub use config::NarrativeConfig;
pub use error::NarrativeError;
pub use prompt::{build_prompt, facts};
pub use provider::NarrativeProvider;
