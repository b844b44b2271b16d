use chrono::{DateTime, Utc};
use franchise_audit_domain::{BusinessProfile, FinancialResult};
use franchise_audit_narrative::{NarrativeAudit, NarrativeError};
use serde::Serialize;
use uuid::Uuid;

/// Everything printed for one audit run.
#[derive(Debug, Serialize)]
pub struct AuditReport {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub profile: BusinessProfile,
    pub result: FinancialResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<NarrativeAudit>,
    /// Why the narrative is missing, when one was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative_error: Option<String>,
}

impl AuditReport {
    pub fn new(profile: BusinessProfile, result: FinancialResult) -> Self {
        Self {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            profile,
            result,
            narrative: None,
            narrative_error: None,
        }
    }

    /// Attaches the narrative outcome. A failure is recorded, never raised.
    #[must_use]
    pub fn with_narrative(mut self, outcome: Result<NarrativeAudit, NarrativeError>) -> Self {
        match outcome {
            Ok(audit) => self.narrative = Some(audit),
            Err(e) => self.narrative_error = Some(e.to_string()),
        }
        self
    }
}
