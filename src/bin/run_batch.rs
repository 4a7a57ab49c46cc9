//! Evaluate every profile in a CSV file
//!
//! Usage: run_batch <profiles.csv> [--output batch_output.csv] [--goal NAME:TARGET:YEARS]

use anyhow::{Context, Result};
use clap::Parser;
use finance_advisor::{
    advisor::{Advisor, AdvisoryReport},
    assumptions::Assumptions,
    profile::{load_profiles, Goal, Profile},
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "run_batch", about = "Evaluate a file of profiles in parallel")]
struct Cli {
    /// Profiles CSV (ProfileID,Age,AnnualIncome,MonthlyExpenses,RiskAppetite,TotalAssets,TotalLoans)
    profiles: PathBuf,

    /// Where to write results
    #[arg(short, long, default_value = "batch_output.csv")]
    output: PathBuf,

    /// Directory containing assumption overrides
    #[arg(long)]
    assumptions: Option<PathBuf>,

    /// Goal projected for every profile, as NAME:TARGET:YEARS
    #[arg(long)]
    goal: Option<Goal>,
}

/// One output row per profile
#[derive(Debug, Serialize)]
struct BatchRow<'a> {
    #[serde(rename = "ProfileID")]
    profile_id: &'a str,
    #[serde(rename = "MonthlySavings")]
    monthly_savings: f64,
    #[serde(rename = "EquityPct")]
    equity_pct: f64,
    #[serde(rename = "DebtPct")]
    debt_pct: f64,
    #[serde(rename = "GoldPct")]
    gold_pct: f64,
    #[serde(rename = "ReitsInvitsPct")]
    reits_invits_pct: f64,
    #[serde(rename = "InternationalPct")]
    international_pct: f64,
    #[serde(rename = "EmergencyFundTarget")]
    emergency_fund_target: f64,
    #[serde(rename = "DebtToIncomePct")]
    debt_to_income_pct: f64,
    #[serde(rename = "Status")]
    status: &'static str,
    #[serde(rename = "GoalCorpus")]
    goal_corpus: Option<f64>,
    #[serde(rename = "GoalProgressPct")]
    goal_progress_pct: Option<f64>,
}

impl<'a> BatchRow<'a> {
    fn new(profile_id: &'a str, report: &AdvisoryReport) -> Self {
        let goal = report.goals.first();
        Self {
            profile_id,
            monthly_savings: report.plan.monthly_savings,
            equity_pct: report.allocation.equity,
            debt_pct: report.allocation.debt,
            gold_pct: report.allocation.gold,
            reits_invits_pct: report.allocation.reits_invits,
            international_pct: report.allocation.international,
            emergency_fund_target: report.health.emergency_fund_target,
            debt_to_income_pct: report.health.debt_to_income_ratio,
            status: report.health.status.as_str(),
            goal_corpus: goal.map(|g| g.projected_corpus),
            goal_progress_pct: goal.map(|g| g.progress_percent),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let start = Instant::now();
    println!("Loading profiles from {}...", cli.profiles.display());
    let records = load_profiles(&cli.profiles)
        .with_context(|| format!("Failed to load profiles from {}", cli.profiles.display()))?;
    println!("Loaded {} profiles in {:?}", records.len(), start.elapsed());

    let assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => Assumptions::default_advisory(),
    };
    let advisor = Advisor::with_assumptions(assumptions);

    let profiles: Vec<Profile> = records.iter().map(|r| r.profile.clone()).collect();
    let goals: Vec<Goal> = cli.goal.iter().map(|g| g.clamped(0)).collect();

    println!("Evaluating...");
    let eval_start = Instant::now();
    let reports = advisor.evaluate_batch(&profiles, &goals);
    println!("Evaluation complete in {:?}", eval_start.elapsed());

    let mut writer = csv::Writer::from_path(&cli.output)
        .with_context(|| format!("Failed to create {}", cli.output.display()))?;
    for (record, report) in records.iter().zip(&reports) {
        writer.serialize(BatchRow::new(&record.id, report))?;
    }
    writer.flush()?;
    println!("Output written to {}", cli.output.display());

    let healthy = reports.iter().filter(|r| r.health.status.is_healthy()).count();
    let total_savings: f64 = reports.iter().map(|r| r.plan.monthly_savings).sum();
    let stats = advisor.cache_stats();

    println!("\nBatch Summary:");
    println!("  Profiles:              {}", reports.len());
    println!("  Healthy:               {}", healthy);
    println!("  Needs improvement:     {}", reports.len() - healthy);
    println!("  Total monthly savings: {:.2}", total_savings);
    println!("  Allocation cache:      {} hits / {} misses", stats.hits, stats.misses);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
