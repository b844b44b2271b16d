//! Terminal rendering of audit reports.

use crate::report::AuditReport;
use franchise_audit_calculator::cost_model::{CostModel, model_for};
use franchise_audit_calculator::industry::{IndustryDefaults, StaffCostBase};
use franchise_audit_domain::Industry;
use prettytable::{Table, format, row};
use rust_decimal::Decimal;

/// Formats an amount as rupees with thousands separators, no decimals.
pub fn currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(0);
    let digits = rounded.abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{sign}₹{grouped}")
}

fn percent(ratio: Decimal) -> String {
    format!("{}%", ratio.saturating_mul(Decimal::ONE_HUNDRED).round_dp(1))
}

pub fn print_report(report: &AuditReport) {
    let profile = &report.profile;
    let result = &report.result;
    let breakdown = &result.breakdown;

    println!("\n🚦 Franchise ROI Auditor");
    println!("════════════════════════════════════");
    print!(
        "Auditing Sector: {} | Target Revenue: {} / month",
        profile.industry,
        currency(result.monthly_revenue)
    );
    match &profile.location {
        Some(location) => println!(" | Location: {location}"),
        None => println!(),
    }
    println!("Cost mode: {}", model_for(profile).name());

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Metric", "Monthly"]);
    table.add_row(row!["Revenue", currency(result.monthly_revenue)]);
    table.add_row(row!["COGS", currency(breakdown.cogs)]);
    if !breakdown.aggregator_commission.is_zero() {
        table.add_row(row!["Aggregator commission", currency(breakdown.aggregator_commission)]);
    }
    table.add_row(row!["Rent", currency(breakdown.rent)]);
    table.add_row(row!["Staff", currency(breakdown.staff)]);
    table.add_row(row!["Utilities", currency(breakdown.utilities)]);
    table.add_row(row!["Marketing", currency(breakdown.marketing)]);
    if profile.is_detailed() {
        table.add_row(row!["Royalty", currency(breakdown.royalty)]);
        table.add_row(row!["Misc", currency(breakdown.misc)]);
    }
    table.add_row(row!["Variable costs", currency(result.variable_costs)]);
    table.add_row(row!["Fixed costs", currency(result.fixed_costs)]);
    table.add_row(row!["Gross profit", currency(result.gross_profit)]);
    table.add_row(row!["Net profit", currency(result.net_profit)]);
    table.add_row(row!["Net margin", format!("{}%", result.margin_percent.round_dp(1))]);
    table.add_row(row!["Payback", result.payback]);
    table.printstd();

    let verdict = &result.verdict;
    println!("\n{}", verdict.headline);
    println!("Consultant's verdict: {}", verdict.advisory);

    println!("\n🧐 Reality check");
    println!("Your industry trap: {}", verdict.structural_risk);
    println!(
        "Rent is {} of sales (safe target {})",
        percent(result.diagnostics.rent_ratio),
        percent(result.diagnostics.safe_rent_benchmark)
    );
    for warning in result.diagnostics.warnings() {
        println!("⚠️  {warning}");
    }

    if let Some(narrative) = &report.narrative {
        println!("\n📝 Narrative audit ({})", narrative.model);
        println!("════════════════════════════════════");
        println!("{}", narrative.text);
    } else if let Some(error) = &report.narrative_error {
        println!("\n❌ Narrative audit unavailable: {error}");
        println!("   The figures above do not depend on it.");
    }
}

pub fn print_industries() {
    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_LINESEP_WITH_TITLE);
    table.set_titles(row!["Industry", "Tag", "COGS", "Commission", "Staff base", "Structural risk"]);

    for industry in Industry::ALL {
        let defaults = IndustryDefaults::for_industry(industry);
        let staff = match defaults.staff_base {
            StaffCostBase::Fixed(amount) => currency(amount),
            StaffCostBase::RevenueShare(share) => format!("{} of revenue", percent(share)),
        };
        table.add_row(row![
            industry.label(),
            industry.tag(),
            percent(defaults.cogs_ratio),
            percent(defaults.commission_ratio),
            staff,
            defaults.structural_risk
        ]);
    }

    table.printstd();
    println!("Staff base is scaled by 1.5x when monthly revenue exceeds ₹500,000.");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_currency_grouping() {
        assert_eq!(currency(dec!(480000)), "₹480,000");
        assert_eq!(currency(dec!(1500000)), "₹1,500,000");
        assert_eq!(currency(dec!(999)), "₹999");
        assert_eq!(currency(dec!(0)), "₹0");
        assert_eq!(currency(dec!(-49000)), "-₹49,000");
    }

    #[test]
    fn test_currency_rounds_to_whole_rupees() {
        assert_eq!(currency(dec!(1234.6)), "₹1,235");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(dec!(0.15)), "15.0%");
        assert_eq!(percent(dec!(0)), "0%");
    }
}
