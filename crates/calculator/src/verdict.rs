//! Payback classification.

use crate::thresholds::{GREEN_MAX_PAYBACK_MONTHS, YELLOW_MAX_PAYBACK_MONTHS};
use franchise_audit_domain::{Payback, Verdict, VerdictReport};
use rust_decimal::Decimal;

const GREEN_ADVICE: &str =
    "Investable asset. The unit pays for itself well inside the 18-month bar.";
const YELLOW_ADVICE: &str = "Operable, but risky. You need to lower rent or increase volume.";
const RED_ADVICE: &str = "Do not open this. You are buying a job, not a business.";

/// Classifies a payback period. Band edges belong to the better band, so
/// exactly 18 months is green and exactly 24 months is yellow.
#[must_use]
pub fn classify(payback: Payback) -> Verdict {
    match payback {
        Payback::Months(m) if m <= GREEN_MAX_PAYBACK_MONTHS => Verdict::Green,
        Payback::Months(m) if m <= YELLOW_MAX_PAYBACK_MONTHS => Verdict::Yellow,
        Payback::Months(_) | Payback::Unbounded => Verdict::Red,
    }
}

/// Builds the verdict banner and advice for a payback period.
#[must_use]
pub fn verdict_report(payback: Payback, structural_risk: &str) -> VerdictReport {
    let verdict = classify(payback);
    let (headline, advisory) = match (verdict, payback.months()) {
        (Verdict::Green, Some(months)) => (banner(verdict, months), GREEN_ADVICE),
        (Verdict::Yellow, Some(months)) => (banner(verdict, months), YELLOW_ADVICE),
        _ => (
            format!("{}: Investment Risk High", verdict.label()),
            RED_ADVICE,
        ),
    };

    VerdictReport {
        verdict,
        headline,
        advisory: advisory.to_string(),
        structural_risk: structural_risk.to_string(),
    }
}

fn banner(verdict: Verdict, months: Decimal) -> String {
    format!("{}: {} Months Payback", verdict.label(), months.round_dp(1))
}
