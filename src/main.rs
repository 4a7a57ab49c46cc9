//! Finance Advisor CLI
//!
//! Command-line dashboard: health check, recommendations, goal tracker,
//! reference tables and live ETF data.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use finance_advisor::{
    advisor::{Advisor, AdvisoryReport},
    assumptions::Assumptions,
    display::{format_currency, format_percent, progress_bar},
    market::{fetch_with_timeout, CsvPriceSource, MarketSnapshot, NO_DATA_MESSAGE},
    profile::{load_goals, Goal, Profile, RiskAppetite, MAX_GOALS},
    reference::{self, RebalanceReminder, ReferenceTables, TRACKED_ETF_SYMBOL},
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "finance-advisor")]
#[command(version, about = "Personal-finance advisory dashboard")]
struct Cli {
    /// Directory containing planning.csv / allocation_tiers.csv overrides
    #[arg(long, global = true)]
    assumptions: Option<PathBuf>,

    /// Assumed annual growth rate for projections, in percent
    #[arg(long, global = true)]
    growth_rate: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct ProfileArgs {
    /// Age in years (clamped to 18-80)
    #[arg(long, default_value_t = 30)]
    age: u8,

    /// Annual income
    #[arg(long, default_value_t = 1_000_000.0)]
    income: f64,

    /// Monthly expenses
    #[arg(long, default_value_t = 20_000.0)]
    expenses: f64,

    /// Risk appetite: Conservative, Moderate or Aggressive
    #[arg(long, default_value = "Moderate")]
    risk: RiskAppetite,

    /// Total assets
    #[arg(long, default_value_t = 500_000.0)]
    assets: f64,

    /// Total outstanding loans
    #[arg(long, default_value_t = 0.0)]
    loans: f64,
}

impl ProfileArgs {
    fn to_profile(&self) -> Profile {
        Profile::new(
            self.age,
            self.income,
            self.expenses,
            self.risk,
            self.assets,
            self.loans,
        )
        .clamped()
    }
}

#[derive(Args)]
struct GoalArgs {
    /// Goal as NAME:TARGET:YEARS (repeatable)
    #[arg(long = "goal")]
    goals: Vec<Goal>,

    /// CSV file with Name,TargetAmount,HorizonYears rows
    #[arg(long)]
    goals_csv: Option<PathBuf>,
}

impl GoalArgs {
    /// Flag goals followed by CSV goals, clamped and capped at the dashboard limit.
    /// Falls back to one default goal when none are given.
    fn collect(&self) -> Result<Vec<Goal>> {
        let mut goals = self.goals.clone();
        if let Some(path) = &self.goals_csv {
            let loaded = load_goals(path)
                .with_context(|| format!("Failed to load goals from {}", path.display()))?;
            goals.extend(loaded);
        }

        if goals.is_empty() {
            goals.push(Goal::placeholder(0));
        }
        if goals.len() > MAX_GOALS {
            log::warn!("{} goals given, tracking the first {}", goals.len(), MAX_GOALS);
            goals.truncate(MAX_GOALS);
        }

        Ok(goals
            .iter()
            .enumerate()
            .map(|(i, goal)| goal.clamped(i))
            .collect())
    }
}

#[derive(Args)]
struct MarketArgs {
    /// Price history CSV (Date,Close) for the tracked ETF
    #[arg(long)]
    prices_csv: Option<PathBuf>,

    /// Symbol to report
    #[arg(long, default_value = TRACKED_ETF_SYMBOL)]
    symbol: String,

    /// Seconds to wait for price data
    #[arg(long, default_value_t = 5)]
    market_timeout_secs: u64,

    /// Trailing window of the chart, in days
    #[arg(long, default_value_t = 30)]
    window_days: i64,
}

impl MarketArgs {
    fn snapshot(&self) -> MarketSnapshot {
        let Some(path) = &self.prices_csv else {
            return MarketSnapshot::Unavailable {
                symbol: self.symbol.clone(),
                reason: "no price source configured".to_string(),
            };
        };

        let source = Arc::new(CsvPriceSource::new(path));
        match fetch_with_timeout(source, &self.symbol, Duration::from_secs(self.market_timeout_secs)) {
            MarketSnapshot::Available { symbol, latest_close, as_of, series } => {
                MarketSnapshot::Available {
                    symbol,
                    latest_close,
                    as_of,
                    series: series.trailing(self.window_days),
                }
            }
            unavailable => unavailable,
        }
    }
}

#[derive(Subcommand)]
enum Command {
    /// Emergency fund, debt-to-income ratio and overall status
    Health {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Asset allocation and monthly investment breakdown
    Recommend {
        #[command(flatten)]
        profile: ProfileArgs,
    },

    /// Projected corpus and progress for each goal
    Goals {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        goals: GoalArgs,
    },

    /// Full dashboard
    Report {
        #[command(flatten)]
        profile: ProfileArgs,
        #[command(flatten)]
        goals: GoalArgs,
        #[command(flatten)]
        market: MarketArgs,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Fund, bond and insurance reference tables
    Reference {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Portfolio rebalancing check and next review date
    Rebalance {
        /// Date of the check (YYYY-MM-DD); defaults to today
        #[arg(long)]
        on: Option<NaiveDate>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Latest price of the tracked ETF
    Market {
        #[command(flatten)]
        market: MarketArgs,
    },
}

fn build_advisor(cli: &Cli) -> Result<Advisor> {
    let mut assumptions = match &cli.assumptions {
        Some(dir) => Assumptions::from_csv_path(dir)
            .with_context(|| format!("Failed to load assumptions from {}", dir.display()))?,
        None => Assumptions::default_advisory(),
    };
    if let Some(rate) = cli.growth_rate {
        assumptions = assumptions.with_growth_rate(rate);
    }
    Ok(Advisor::with_assumptions(assumptions))
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let advisor = build_advisor(&cli)?;

    match &cli.command {
        Command::Health { profile } => {
            let report = advisor.evaluate(&profile.to_profile(), &[]);
            print_health(&report);
        }
        Command::Recommend { profile } => {
            let report = advisor.evaluate(&profile.to_profile(), &[]);
            print_recommendation(&report);
        }
        Command::Goals { profile, goals } => {
            let report = advisor.evaluate(&profile.to_profile(), &goals.collect()?);
            print_goals(&report);
        }
        Command::Report { profile, goals, market, json } => {
            let report = advisor.evaluate(&profile.to_profile(), &goals.collect()?);
            let snapshot = market.snapshot();

            if *json {
                let output = serde_json::json!({
                    "report": report,
                    "market": snapshot,
                    "reference": ReferenceTables::current(),
                });
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("Finance Advisor Pro");
                println!("===================");
                println!("Disclaimer: {}\n", reference::DISCLAIMER);
                print_health(&report);
                print_recommendation(&report);
                print_market(&snapshot);
                print_goals(&report);
                print_reference();
            }
        }
        Command::Reference { json } => {
            if *json {
                println!("{}", serde_json::to_string_pretty(&ReferenceTables::current())?);
            } else {
                print_reference();
            }
        }
        Command::Rebalance { on, json } => {
            let checked_on = on.unwrap_or_else(|| Local::now().date_naive());
            let reminder = reference::check_rebalancing(checked_on);
            if *json {
                println!("{}", serde_json::to_string_pretty(&reminder)?);
            } else {
                print_rebalance(&reminder);
            }
        }
        Command::Market { market } => print_market(&market.snapshot()),
    }

    Ok(())
}

fn section(title: &str) {
    println!("\n{}", title);
    println!("{}", "-".repeat(title.chars().count()));
}

fn print_health(report: &AdvisoryReport) {
    section("Financial Health Check");
    println!("  Emergency Fund Needed: {}", format_currency(report.health.emergency_fund_target));
    println!("  Debt-to-Income:        {} (healthy < 40%)", format_percent(report.health.debt_to_income_ratio, 1));
    println!("  Overall Status:        {}", report.health.status);
    if let Some(advice) = report.health_advice {
        println!("  ! {}", advice);
    }
}

fn print_recommendation(report: &AdvisoryReport) {
    section("Personalized Recommendations");
    println!("  Investable per month: {}", format_currency(report.plan.monthly_savings));
    println!();
    println!("  {:<15} {:>8} {:>14}", "Category", "Alloc", "Amount");
    for (class, pct) in report.allocation.iter() {
        println!(
            "  {:<15} {:>8} {:>14}",
            class.label(),
            format_percent(pct, 1),
            format_currency(report.plan.amounts.get(class)),
        );
    }
    println!("  {:<15} {:>8}", "Total", format_percent(report.allocation_total, 1));
}

fn print_goals(report: &AdvisoryReport) {
    section("Goal Tracker");
    if let Some(notice) = report.goals_notice {
        println!("  {}", notice);
        return;
    }
    for goal in &report.goals {
        println!(
            "  {:<20} {:>16}  {} {:>4.0}% to target ({} in {} yrs)",
            goal.goal_name,
            format_currency(goal.projected_corpus),
            progress_bar(goal.progress_percent, 20),
            goal.progress_percent,
            format_currency(goal.target_amount),
            goal.horizon_years,
        );
    }
}

fn print_market(snapshot: &MarketSnapshot) {
    section("Live ETF Data");
    match snapshot {
        MarketSnapshot::Available { latest_close, as_of, series, .. } => {
            let name = reference::ETFS[0].name;
            println!("  Latest {}: ₹{:.2} ({})", name, latest_close, as_of);
            if let Some(change) = series.change_percent() {
                println!("  Change over window: {}", format_percent(change, 2));
            }
        }
        MarketSnapshot::Unavailable { .. } => println!("  {}", NO_DATA_MESSAGE),
    }
}

fn print_reference() {
    section("Top Fund Suggestions");
    for fund in reference::EQUITY_FUNDS.iter().chain(&reference::DEBT_FUNDS).chain(&reference::HYBRID_FUNDS) {
        println!(
            "  {:<38} {:<8} {:<34} 1y {:>5} ER {:>5}",
            fund.name,
            format!("{:?}", fund.category),
            fund.rating,
            format_percent(fund.one_year_return_pct, 1),
            format_percent(fund.expense_ratio_pct, 2),
        );
    }

    section("ETFs");
    for etf in &reference::ETFS {
        println!(
            "  {:<38} 1y {:>6} ER {:>6}",
            etf.name,
            format_percent(etf.one_year_return_pct, 1),
            format_percent(etf.expense_ratio_pct, 2),
        );
    }

    section("REITs / InvITs");
    for reit in &reference::REITS_INVITS {
        println!(
            "  {:<38} 1y {:>6} yield {:>7}",
            reit.name,
            format_percent(reit.one_year_return_pct, 1),
            format_percent(reit.yield_pct, 2),
        );
    }

    section("Government Bonds");
    for bond in &reference::GOVERNMENT_BONDS {
        println!("  {:<38} {:>7} {}", bond.name, format_percent(bond.yield_pct, 2), bond.tenure);
    }

    section("Tax Planning & Insurance");
    for tip in &reference::TAX_TIPS {
        println!("  - {}", tip);
    }
    println!();
    for policy in &reference::INSURANCE {
        println!(
            "  {:<38} {:<6} cover {:<6} {:<14} {}",
            policy.name,
            format!("{:?}", policy.kind), policy.sum_insured, policy.premium, policy.features,
        );
    }
    println!(
        "\n  Rebalancing: review your allocation every {} months.",
        reference::REBALANCE_INTERVAL_MONTHS
    );

    section("Financial Literacy");
    for article in &reference::ARTICLES {
        println!("  * {}", article);
    }
    println!("\nData as of {}", reference::data_as_of());
}

fn print_rebalance(reminder: &RebalanceReminder) {
    section("Rebalancing Check");
    println!("  {}", reminder.message);
    println!("  Checked on:  {}", reminder.checked_on);
    println!("  Next review: {}", reminder.next_review);
}
