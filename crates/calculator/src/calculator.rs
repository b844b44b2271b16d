//! Unit-economics calculation.

use crate::cost_model::costs_for;
use crate::diagnostics::{diagnose, ratio_of_revenue};
use crate::industry::IndustryDefaults;
use crate::thresholds::DAYS_PER_MONTH;
use crate::verdict::verdict_report;
use franchise_audit_domain::{BusinessProfile, DomainError, FinancialResult, Payback};
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Monthly revenue on a flat 30-day month.
///
/// # Errors
/// Returns [`DomainError::InvalidInput`] on `average_ticket` when the product
/// does not fit in a `Decimal`.
pub fn monthly_revenue(
    daily_volume: u32,
    average_ticket: Decimal,
) -> Result<Decimal, DomainError> {
    Decimal::from(daily_volume)
        .checked_mul(average_ticket)
        .and_then(|daily| daily.checked_mul(DAYS_PER_MONTH))
        .ok_or_else(|| {
            DomainError::invalid(
                "average_ticket",
                format!("{daily_volume} x {average_ticket} per day overflows monthly revenue"),
            )
        })
}

/// Computes the financial result for a business profile.
///
/// The calculation is deterministic: the same profile always yields the
/// same result.
///
/// # Errors
/// Returns [`DomainError::InvalidInput`] when the profile violates a
/// precondition. No partial result is produced.
pub fn compute(profile: &BusinessProfile) -> Result<FinancialResult, DomainError> {
    profile.validate()?;

    let revenue = monthly_revenue(profile.daily_volume, profile.average_ticket.0)?;
    let costs = costs_for(profile, revenue);

    let variable_costs = costs.variable_costs();
    let fixed_costs = costs.fixed_costs();
    let gross_profit = revenue - variable_costs;
    let net_profit = gross_profit - fixed_costs;
    let margin_percent =
        ratio_of_revenue(net_profit, revenue).saturating_mul(Decimal::ONE_HUNDRED);

    debug!(
        industry = %profile.industry,
        detailed = profile.is_detailed(),
        revenue = %revenue,
        variable_costs = %variable_costs,
        fixed_costs = %fixed_costs,
        net_profit = %net_profit,
        "Computed unit economics"
    );

    let payback = Payback::from_profit(profile.capex_total.0, net_profit);
    let risk = IndustryDefaults::for_industry(profile.industry).structural_risk;
    let verdict = verdict_report(payback, risk);
    let diagnostics = diagnose(revenue, &costs);

    info!(
        industry = %profile.industry,
        payback = %payback,
        verdict = %verdict.verdict,
        "Audit verdict"
    );

    Ok(FinancialResult {
        monthly_revenue: revenue,
        variable_costs,
        fixed_costs,
        gross_profit,
        net_profit,
        margin_percent,
        payback,
        breakdown: costs.breakdown,
        verdict,
        diagnostics,
    })
}
