//! Static reference tables shown alongside the advice
//!
//! Fund, ETF, REIT/InvIT, bond and insurance figures as published in
//! Morningstar / Value Research / RBI data for October 2025. They are inert
//! display data; nothing in the calculation core reads them.

use crate::allocation::AssetClass;
use chrono::{Months, NaiveDate};
use serde::Serialize;

pub const DISCLAIMER: &str = "This is educational only. Not a substitute for SEBI-registered advisor. Consult professionals.";

/// Ticker of the ETF whose price history the dashboard charts
pub const TRACKED_ETF_SYMBOL: &str = "NIFTYBEES.NS";

/// Date the tables were last refreshed
pub fn data_as_of() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FundCategory {
    Equity,
    Debt,
    Hybrid,
}

/// Mutual fund with rating, trailing return and expense ratio (both in percent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FundRecord {
    pub name: &'static str,
    pub category: FundCategory,
    pub rating: &'static str,
    pub one_year_return_pct: f64,
    pub expense_ratio_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EtfRecord {
    pub name: &'static str,
    pub one_year_return_pct: f64,
    pub expense_ratio_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ReitRecord {
    pub name: &'static str,
    pub one_year_return_pct: f64,
    pub yield_pct: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondRecord {
    pub name: &'static str,
    pub yield_pct: f64,
    pub tenure: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsuranceKind {
    Term,
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InsuranceRecord {
    pub name: &'static str,
    pub kind: InsuranceKind,
    pub sum_insured: &'static str,
    pub premium: &'static str,
    pub features: &'static str,
}

const fn fund(
    name: &'static str,
    category: FundCategory,
    rating: &'static str,
    one_year_return_pct: f64,
    expense_ratio_pct: f64,
) -> FundRecord {
    FundRecord {
        name,
        category,
        rating,
        one_year_return_pct,
        expense_ratio_pct,
    }
}

pub const EQUITY_FUNDS: [FundRecord; 3] = [
    fund("Nippon India Large Cap Fund", FundCategory::Equity, "5 Stars (Morningstar)", 25.0, 0.8),
    fund("ICICI Prudential Bluechip Fund", FundCategory::Equity, "Best Large-Cap (Morningstar 2025)", 22.0, 1.0),
    fund("HDFC Top 100 Fund", FundCategory::Equity, "4 Stars (Value Research)", 20.0, 1.2),
];

pub const DEBT_FUNDS: [FundRecord; 3] = [
    fund("ICICI Prudential Savings Fund", FundCategory::Debt, "5 Stars", 7.5, 0.4),
    fund("HDFC Corporate Bond Fund", FundCategory::Debt, "4 Stars", 7.2, 0.5),
    fund("SBI Magnum Gilt Fund", FundCategory::Debt, "3 Stars", 6.8, 0.6),
];

pub const HYBRID_FUNDS: [FundRecord; 3] = [
    fund("ICICI Prudential Equity & Debt Fund", FundCategory::Hybrid, "4 Stars", 18.0, 1.1),
    fund("HDFC Balanced Advantage Fund", FundCategory::Hybrid, "5 Stars", 16.0, 0.9),
    fund("Axis Aggressive Hybrid Fund", FundCategory::Hybrid, "4 Stars", 15.0, 1.0),
];

pub const ETFS: [EtfRecord; 3] = [
    EtfRecord { name: "Nippon India ETF Nifty BeES", one_year_return_pct: 24.0, expense_ratio_pct: 0.05 },
    EtfRecord { name: "ICICI Prudential Nifty ETF", one_year_return_pct: 23.0, expense_ratio_pct: 0.03 },
    EtfRecord { name: "HDFC Nifty 50 ETF", one_year_return_pct: 22.0, expense_ratio_pct: 0.1 },
];

pub const REITS_INVITS: [ReitRecord; 3] = [
    ReitRecord { name: "Embassy Office Parks REIT", one_year_return_pct: 12.0, yield_pct: 7.5 },
    ReitRecord { name: "Mindspace Business Parks REIT", one_year_return_pct: 10.0, yield_pct: 8.0 },
    ReitRecord { name: "IRB InvIT Fund", one_year_return_pct: 14.0, yield_pct: 14.04 },
];

pub const GOVERNMENT_BONDS: [BondRecord; 3] = [
    BondRecord { name: "10-Year G-Sec", yield_pct: 6.59, tenure: "10 years" },
    BondRecord { name: "91-Day T-Bill", yield_pct: 6.2, tenure: "91 days" },
    BondRecord { name: "RBI Floating Rate Bonds", yield_pct: 8.05, tenure: "7 years" },
];

pub const INSURANCE: [InsuranceRecord; 4] = [
    InsuranceRecord {
        name: "ICICI Pru iProtect Smart Plus (Term)",
        kind: InsuranceKind::Term,
        sum_insured: "₹1Cr",
        premium: "₹520/month",
        features: "Up to 20 Cr cover",
    },
    InsuranceRecord {
        name: "HDFC Life Click 2 Protect (Term)",
        kind: InsuranceKind::Term,
        sum_insured: "₹1Cr",
        premium: "₹520/month",
        features: "17% discount",
    },
    InsuranceRecord {
        name: "Tata AIA Sampoorna Raksha (Term)",
        kind: InsuranceKind::Term,
        sum_insured: "₹1Cr",
        premium: "₹501/month",
        features: "18.5% premium discount",
    },
    InsuranceRecord {
        name: "Care Supreme (Health)",
        kind: InsuranceKind::Health,
        sum_insured: "₹10L",
        premium: "₹15,000/year",
        features: "No room cap",
    },
];

/// Section 80C / 80D reminders
pub const TAX_TIPS: [&str; 2] = [
    "Max ₹1.5L in PPF/ELSS/NPS for 80C deduction.",
    "Health insurance: Up to ₹25K deduction under 80D.",
];

pub const ARTICLES: [&str; 3] = [
    "What is SIP? Start small, grow big!",
    "Equity vs Debt: Balance for your age.",
    "REITs/InvITs: Earn from real estate without buying property.",
];

/// Months between portfolio rebalancing reviews
pub const REBALANCE_INTERVAL_MONTHS: u32 = 6;

pub const REBALANCE_NOTICE: &str = "Portfolio balanced! Rebalance in 6 months.";

/// Result of a rebalancing check run on `checked_on`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RebalanceReminder {
    pub checked_on: NaiveDate,
    pub next_review: NaiveDate,
    pub message: &'static str,
}

/// Rebalancing check: the portfolio is reported balanced and the next review
/// falls [`REBALANCE_INTERVAL_MONTHS`] after `checked_on`, clamped to the end
/// of a shorter month.
pub fn check_rebalancing(checked_on: NaiveDate) -> RebalanceReminder {
    let next_review = checked_on
        .checked_add_months(Months::new(REBALANCE_INTERVAL_MONTHS))
        .unwrap_or(NaiveDate::MAX);

    RebalanceReminder {
        checked_on,
        next_review,
        message: REBALANCE_NOTICE,
    }
}

/// Fund suggestions for an asset class; empty for classes without a fund list
pub fn funds_for(class: AssetClass) -> &'static [FundRecord] {
    match class {
        AssetClass::Equity => &EQUITY_FUNDS,
        AssetClass::Debt => &DEBT_FUNDS,
        AssetClass::Gold | AssetClass::ReitsInvits | AssetClass::International => &[],
    }
}

/// All tables bundled for serialization
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceTables {
    pub as_of: NaiveDate,
    pub disclaimer: &'static str,
    pub equity_funds: &'static [FundRecord],
    pub debt_funds: &'static [FundRecord],
    pub hybrid_funds: &'static [FundRecord],
    pub etfs: &'static [EtfRecord],
    pub reits_invits: &'static [ReitRecord],
    pub government_bonds: &'static [BondRecord],
    pub insurance: &'static [InsuranceRecord],
    pub tax_tips: &'static [&'static str],
    pub articles: &'static [&'static str],
    pub rebalance_notice: &'static str,
}

impl ReferenceTables {
    pub fn current() -> Self {
        Self {
            as_of: data_as_of(),
            disclaimer: DISCLAIMER,
            equity_funds: &EQUITY_FUNDS,
            debt_funds: &DEBT_FUNDS,
            hybrid_funds: &HYBRID_FUNDS,
            etfs: &ETFS,
            reits_invits: &REITS_INVITS,
            government_bonds: &GOVERNMENT_BONDS,
            insurance: &INSURANCE,
            tax_tips: &TAX_TIPS,
            articles: &ARTICLES,
            rebalance_notice: REBALANCE_NOTICE,
        }
    }
}
