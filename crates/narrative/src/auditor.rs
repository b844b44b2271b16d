//! Narrative audit requester.

use crate::error::NarrativeError;
use crate::prompt::build_prompt;
use crate::provider::NarrativeProvider;
use franchise_audit_domain::{BusinessProfile, FinancialResult};
use serde::Serialize;

/// Text returned by the narrative service, kept opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeAudit {
    pub text: String,
    pub model: String,
    /// The prompt that produced the text.
    pub prompt: String,
}

/// Sends computed audits to a [`NarrativeProvider`].
pub struct NarrativeAuditor<P> {
    provider: P,
}

impl<P: NarrativeProvider> NarrativeAuditor<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Requests a narrative for an already-computed result.
    ///
    /// # Errors
    /// Propagates the provider's [`NarrativeError`] unchanged. The result
    /// passed in stays valid either way.
    pub async fn request_audit(
        &self,
        profile: &BusinessProfile,
        result: &FinancialResult,
    ) -> Result<NarrativeAudit, NarrativeError> {
        let prompt = build_prompt(profile, result);
        let text = self.provider.complete(&prompt).await?;

        tracing::info!(
            model = self.provider.model_name(),
            chars = text.len(),
            "Narrative audit received"
        );

        Ok(NarrativeAudit {
            text,
            model: self.provider.model_name().to_string(),
            prompt,
        })
    }
}
