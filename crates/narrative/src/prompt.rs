//! Prompt assembly for the narrative audit.
//!
//! The prompt carries the inputs and results as plain `key: value` facts.
//! Interpretation is left to the service.

use franchise_audit_domain::{BusinessProfile, CostMode, FinancialResult};
use rust_decimal::Decimal;

const ROLE: &str = "You are a franchise due-diligence consultant. Audit the unit \
economics below for a prospective franchisee. Be direct and numeric.";

const SECTIONS: &str = "Respond in markdown with these sections:\n\
1. Verdict summary (two sentences)\n\
2. Cost structure review\n\
3. Structural risk and how to mitigate it\n\
4. Three concrete levers to shorten payback";

fn amount(value: Decimal) -> String {
    value.round_dp(2).normalize().to_string()
}

/// Flattens a profile and its result into ordered key/value facts.
#[must_use]
pub fn facts(profile: &BusinessProfile, result: &FinancialResult) -> Vec<(&'static str, String)> {
    let breakdown = &result.breakdown;
    let mut facts = vec![
        ("industry", profile.industry.label().to_string()),
        (
            "location",
            profile
                .location
                .clone()
                .unwrap_or_else(|| "unspecified".to_string()),
        ),
        (
            "cost_mode",
            match profile.costs {
                CostMode::Simple => "industry defaults",
                CostMode::Detailed(_) => "detailed expenses",
            }
            .to_string(),
        ),
        ("capex", amount(profile.capex_total.0)),
        ("monthly_rent", amount(profile.monthly_rent.0)),
        ("daily_volume", profile.daily_volume.to_string()),
        ("average_ticket", amount(profile.average_ticket.0)),
        ("monthly_revenue", amount(result.monthly_revenue)),
        ("cogs", amount(breakdown.cogs)),
        ("aggregator_commission", amount(breakdown.aggregator_commission)),
        ("staff_cost", amount(breakdown.staff)),
        ("utilities", amount(breakdown.utilities)),
        ("marketing", amount(breakdown.marketing)),
        ("royalty", amount(breakdown.royalty)),
        ("misc", amount(breakdown.misc)),
        ("variable_costs", amount(result.variable_costs)),
        ("fixed_costs", amount(result.fixed_costs)),
        ("gross_profit", amount(result.gross_profit)),
        ("net_profit", amount(result.net_profit)),
        ("net_margin_percent", amount(result.margin_percent)),
        (
            "payback_months",
            result
                .payback
                .months()
                .map_or_else(|| "unbounded".to_string(), amount),
        ),
        ("verdict", result.verdict.verdict.label().to_string()),
        ("structural_risk", result.verdict.structural_risk.clone()),
        ("rent_ratio", amount(result.diagnostics.rent_ratio)),
    ];

    if let Some(competitors) = profile.expenses().and_then(|e| e.competitor_count) {
        facts.push(("competitor_count", competitors.to_string()));
    }

    facts
}

/// Builds the full prompt sent to the narrative service.
#[must_use]
pub fn build_prompt(profile: &BusinessProfile, result: &FinancialResult) -> String {
    let facts: String = facts(profile, result)
        .into_iter()
        .map(|(key, value)| format!("{key}: {value}\n"))
        .collect();
    format!("{ROLE}\n\nFacts:\n{facts}\n{SECTIONS}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use franchise_audit_calculator::compute;
    use franchise_audit_domain::{ExpenseBreakdown, Industry, Money, Percentage};
    use rust_decimal_macros::dec;

    fn cafe() -> BusinessProfile {
        BusinessProfile::new(Industry::CafeQsr, dec!(1500000), dec!(50000), 80, dec!(200))
            .with_location("Bandra West")
    }

    #[test]
    fn test_prompt_carries_required_facts() {
        let profile = cafe();
        let result = compute(&profile).unwrap();
        let prompt = build_prompt(&profile, &result);

        for line in [
            "industry: Cafe / QSR",
            "location: Bandra West",
            "capex: 1500000",
            "monthly_rent: 50000",
            "monthly_revenue: 480000",
            "variable_costs: 168000",
            "fixed_costs: 129000",
            "net_profit: 183000",
            "net_margin_percent: 38.12",
            "verdict: GREEN LIGHT",
        ] {
            assert!(prompt.contains(line), "missing `{line}` in prompt:\n{prompt}");
        }
    }

    #[test]
    fn test_prompt_layout() {
        let profile = cafe();
        let result = compute(&profile).unwrap();
        let prompt = build_prompt(&profile, &result);

        assert!(prompt.starts_with(ROLE));
        assert!(prompt.contains("\n\nFacts:\nindustry: Cafe / QSR\nlocation: Bandra West\n"));
        assert!(prompt.ends_with(SECTIONS));
        let fact_lines = prompt.lines().filter(|line| line.contains(": ")).count();
        assert!(fact_lines >= facts(&profile, &result).len());
    }

    #[test]
    fn test_unprofitable_payback_is_unbounded() {
        let mut profile = cafe();
        profile.daily_volume = 10;
        let result = compute(&profile).unwrap();
        let facts = facts(&profile, &result);
        assert!(facts.contains(&("payback_months", "unbounded".to_string())));
    }

    #[test]
    fn test_missing_location_is_marked() {
        let mut profile = cafe();
        profile.location = None;
        let result = compute(&profile).unwrap();
        assert!(facts(&profile, &result).contains(&("location", "unspecified".to_string())));
    }

    #[test]
    fn test_competitor_count_only_when_known() {
        let profile = cafe();
        let result = compute(&profile).unwrap();
        assert!(!facts(&profile, &result).iter().any(|(k, _)| *k == "competitor_count"));

        let detailed = cafe().with_expenses(ExpenseBreakdown {
            utilities: Money(dec!(10000)),
            marketing: Money(dec!(15000)),
            royalty: Money(dec!(0)),
            misc: Money(dec!(0)),
            salaries: Money(dec!(50000)),
            cogs_percent: Percentage(dec!(33)),
            delivery_percent: Percentage(dec!(0)),
            aggregator_commission_percent: Percentage(dec!(0)),
            competitor_count: Some(7),
        });
        let result = compute(&detailed).unwrap();
        let facts = facts(&detailed, &result);
        assert!(facts.contains(&("competitor_count", "7".to_string())));
        assert!(facts.contains(&("cost_mode", "detailed expenses".to_string())));
    }
}
