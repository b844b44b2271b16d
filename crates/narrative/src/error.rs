use std::time::Duration;
use thiserror::Error;

/// Failures of the narrative service. None of them invalidate the numbers.
#[derive(Debug, Error)]
pub enum NarrativeError {
    #[error("no API key configured (set NARRATIVE_API_KEY)")]
    MissingApiKey,

    #[error("request to {provider} failed: {reason}")]
    RequestFailed { provider: String, reason: String },

    #[error("{provider} rejected the credentials")]
    AuthFailed { provider: String },

    #[error("{provider} rate limited the request")]
    RateLimited {
        provider: String,
        retry_after: Option<Duration>,
    },

    #[error("invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },

    #[error("{provider} returned no text")]
    EmptyResponse { provider: String },
}

impl NarrativeError {
    /// Always true: the computed numbers stay valid whatever the service did,
    /// so callers report the failure and carry on.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        true
    }

    /// Whether sending the same request again later could succeed.
    /// Credential problems need a configuration change first.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::MissingApiKey | Self::AuthFailed { .. })
    }
}
