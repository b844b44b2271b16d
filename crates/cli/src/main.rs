//! Command Line Interface for the franchise unit-economics auditor.
mod render;
mod report;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;
use franchise_audit_calculator::compute;
use franchise_audit_domain::{
    BusinessProfile, ExpenseBreakdown, FinancialResult, Industry, Money, Percentage,
};
use franchise_audit_narrative::{
    ChatCompletionsProvider, NarrativeAudit, NarrativeAuditor, NarrativeConfig, NarrativeError,
};
use report::AuditReport;
use rust_decimal::Decimal;

#[derive(Parser)]
#[command(name = "franchise-audit")]
#[command(about = "Franchise ROI auditor: unit economics, payback and verdict", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit a franchise unit
    Audit(AuditArgs),
    /// Show the industry default cost table
    Industries,
}

#[derive(Args, Debug)]
struct AuditArgs {
    /// Industry (cafe, gym, cloud-kitchen, retail, salon)
    #[arg(short, long, default_value = "cafe")]
    industry: Industry,

    /// Total setup cost
    #[arg(long, default_value = "1500000")]
    capex: Decimal,

    /// Monthly rent
    #[arg(long, default_value = "50000")]
    rent: Decimal,

    /// Daily footfall or orders
    #[arg(short = 'v', long, default_value_t = 80)]
    daily_volume: u32,

    /// Average bill value
    #[arg(short, long, default_value = "200")]
    ticket: Decimal,

    /// Location label (e.g. neighbourhood, city)
    #[arg(short, long)]
    location: Option<String>,

    /// Use the expense lines below instead of industry defaults
    #[arg(long)]
    detailed: bool,

    /// Monthly utilities (detailed mode)
    #[arg(long, requires = "detailed")]
    utilities: Option<Decimal>,

    /// Monthly marketing budget (detailed mode)
    #[arg(long, requires = "detailed")]
    marketing: Option<Decimal>,

    /// Monthly franchise royalty (detailed mode)
    #[arg(long, requires = "detailed")]
    royalty: Option<Decimal>,

    /// Other monthly costs (detailed mode)
    #[arg(long, requires = "detailed")]
    misc: Option<Decimal>,

    /// Monthly salaries (detailed mode)
    #[arg(long, requires = "detailed")]
    salaries: Option<Decimal>,

    /// COGS as % of revenue (detailed mode)
    #[arg(long, requires = "detailed")]
    cogs_percent: Option<Decimal>,

    /// Share of revenue from delivery aggregators, % (detailed mode)
    #[arg(long, requires = "detailed")]
    delivery_percent: Option<Decimal>,

    /// Aggregator commission on delivery revenue, % (detailed mode)
    #[arg(long, requires = "detailed")]
    commission_percent: Option<Decimal>,

    /// Competing outlets nearby (detailed mode, optional)
    #[arg(long, requires = "detailed")]
    competitors: Option<u32>,

    /// Request a narrative audit from the configured text service
    #[arg(long)]
    narrative: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

impl AuditArgs {
    fn profile(&self) -> Result<BusinessProfile> {
        let mut profile = BusinessProfile::new(
            self.industry,
            self.capex,
            self.rent,
            self.daily_volume,
            self.ticket,
        );
        if let Some(location) = &self.location {
            profile = profile.with_location(location.clone());
        }
        if self.detailed {
            profile = profile.with_expenses(self.expenses()?);
        }
        Ok(profile)
    }

    /// Collects the detailed expense lines. Every money and percent line is
    /// required so that detailed mode never falls back to a default.
    fn expenses(&self) -> Result<ExpenseBreakdown> {
        let mut missing = Vec::new();
        let mut line = |flag: &'static str, value: Option<Decimal>| {
            value.unwrap_or_else(|| {
                missing.push(flag);
                Decimal::ZERO
            })
        };

        let utilities = line("--utilities", self.utilities);
        let marketing = line("--marketing", self.marketing);
        let royalty = line("--royalty", self.royalty);
        let misc = line("--misc", self.misc);
        let salaries = line("--salaries", self.salaries);
        let cogs = line("--cogs-percent", self.cogs_percent);
        let delivery = line("--delivery-percent", self.delivery_percent);
        let commission = line("--commission-percent", self.commission_percent);

        if !missing.is_empty() {
            bail!("--detailed requires {}", missing.join(", "));
        }

        Ok(ExpenseBreakdown {
            utilities: Money::new("--utilities", utilities)?,
            marketing: Money::new("--marketing", marketing)?,
            royalty: Money::new("--royalty", royalty)?,
            misc: Money::new("--misc", misc)?,
            salaries: Money::new("--salaries", salaries)?,
            cogs_percent: Percentage::new("--cogs-percent", cogs)?,
            delivery_percent: Percentage::new("--delivery-percent", delivery)?,
            aggregator_commission_percent: Percentage::new("--commission-percent", commission)?,
            competitor_count: self.competitors,
        })
    }
}

async fn request_narrative(
    profile: &BusinessProfile,
    result: &FinancialResult,
) -> Result<NarrativeAudit, NarrativeError> {
    let provider = ChatCompletionsProvider::new(NarrativeConfig::from_env())?;
    NarrativeAuditor::new(provider)
        .request_audit(profile, result)
        .await
}

async fn run_audit(args: &AuditArgs) -> Result<()> {
    let profile = args.profile()?;
    let result = compute(&profile).context("Cannot audit these inputs")?;

    let mut report = AuditReport::new(profile, result);
    if args.narrative {
        let outcome = request_narrative(&report.profile, &report.result).await;
        if let Err(e) = &outcome {
            tracing::warn!(
                retryable = e.is_retryable(),
                "Narrative audit unavailable: {}",
                e
            );
        }
        report = report.with_narrative(outcome);
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render::print_report(&report);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    // Logs go to stderr so `--json` output stays parseable.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Audit(args) => run_audit(args).await?,
        Commands::Industries => render::print_industries(),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use franchise_audit_domain::CostMode;
    use rust_decimal_macros::dec;

    fn audit_args(argv: &[&str]) -> AuditArgs {
        let mut full = vec!["franchise-audit", "audit"];
        full.extend_from_slice(argv);
        match Cli::try_parse_from(full).unwrap().command {
            Commands::Audit(args) => args,
            Commands::Industries => panic!("Expected audit command"),
        }
    }

    #[test]
    fn test_defaults_match_reference_unit() {
        let profile = audit_args(&[]).profile().unwrap();
        assert_eq!(profile.industry, Industry::CafeQsr);
        assert_eq!(profile.capex_total, Money(dec!(1500000)));
        assert_eq!(profile.monthly_rent, Money(dec!(50000)));
        assert_eq!(profile.daily_volume, 80);
        assert_eq!(profile.average_ticket, Money(dec!(200)));
        assert_eq!(profile.costs, CostMode::Simple);
    }

    #[test]
    fn test_parses_industry_and_location() {
        let profile = audit_args(&["--industry", "cloud-kitchen", "--location", "Pune"])
            .profile()
            .unwrap();
        assert_eq!(profile.industry, Industry::CloudKitchen);
        assert_eq!(profile.location.as_deref(), Some("Pune"));
    }

    #[test]
    fn test_unknown_industry_rejected_by_parser() {
        let argv = ["franchise-audit", "audit", "--industry", "bakery"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_detailed_line_without_flag_rejected() {
        let argv = ["franchise-audit", "audit", "--salaries", "60000"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_detailed_requires_every_line() {
        let err = audit_args(&["--detailed", "--salaries", "60000"])
            .profile()
            .unwrap_err()
            .to_string();
        assert!(err.contains("--utilities"));
        assert!(err.contains("--commission-percent"));
        assert!(!err.contains("--salaries"));
    }

    #[test]
    fn test_detailed_profile() {
        let profile = audit_args(&[
            "--detailed",
            "--utilities",
            "12000",
            "--marketing",
            "10000",
            "--royalty",
            "24000",
            "--misc",
            "6000",
            "--salaries",
            "70000",
            "--cogs-percent",
            "30",
            "--delivery-percent",
            "40",
            "--commission-percent",
            "25",
            "--competitors",
            "3",
        ])
        .profile()
        .unwrap();

        let expenses = profile.expenses().unwrap();
        assert_eq!(expenses.salaries, Money(dec!(70000)));
        assert_eq!(expenses.delivery_percent, Percentage(dec!(40)));
        assert_eq!(expenses.competitor_count, Some(3));
        assert_eq!(compute(&profile).unwrap().net_profit, dec!(116000));
    }

    fn full_detailed(flag: &str, value: &str) -> Vec<String> {
        let lines = [
            ("--utilities", "12000"),
            ("--marketing", "10000"),
            ("--royalty", "24000"),
            ("--misc", "6000"),
            ("--salaries", "70000"),
            ("--cogs-percent", "30"),
            ("--delivery-percent", "40"),
            ("--commission-percent", "25"),
        ];
        let mut argv = vec!["--detailed".to_string()];
        for (line_flag, default) in lines {
            let value = if line_flag == flag { value } else { default };
            argv.push(format!("{line_flag}={value}"));
        }
        argv
    }

    #[test]
    fn test_out_of_range_percent_names_the_flag() {
        let argv = full_detailed("--delivery-percent", "140");
        let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
        let err = audit_args(&argv).profile().unwrap_err().to_string();
        assert!(err.contains("--delivery-percent"), "{err}");
    }

    #[test]
    fn test_negative_expense_line_names_the_flag() {
        let argv = full_detailed("--royalty", "-5");
        let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
        let err = audit_args(&argv).profile().unwrap_err().to_string();
        assert!(err.contains("--royalty"), "{err}");
    }
}
