//! Savings, growth and health-check thresholds

use serde::{Deserialize, Serialize};

/// Assumed CAGR for projections, in percent
pub const DEFAULT_ANNUAL_GROWTH_PERCENT: f64 = 10.0;

/// Share of the yearly surplus treated as investable
pub const DEFAULT_INVESTABLE_SHARE: f64 = 0.7;

/// Months of expenses held as an emergency buffer
pub const DEFAULT_EMERGENCY_FUND_MONTHS: f64 = 6.0;

/// Debt-to-income percentage at or above which health is flagged
pub const DEFAULT_DEBT_RATIO_LIMIT: f64 = 40.0;

/// Thresholds for the health check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthRules {
    pub emergency_fund_months: f64,
    /// Ratios strictly below this (in percent) count as healthy
    pub debt_ratio_limit: f64,
}

impl Default for HealthRules {
    fn default() -> Self {
        Self {
            emergency_fund_months: DEFAULT_EMERGENCY_FUND_MONTHS,
            debt_ratio_limit: DEFAULT_DEBT_RATIO_LIMIT,
        }
    }
}

/// Savings-rate and growth assumptions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningRules {
    pub investable_share: f64,
    pub annual_growth_percent: f64,
}

impl Default for PlanningRules {
    fn default() -> Self {
        Self {
            investable_share: DEFAULT_INVESTABLE_SHARE,
            annual_growth_percent: DEFAULT_ANNUAL_GROWTH_PERCENT,
        }
    }
}
