//! Financial health check: emergency fund, debt-to-income ratio and status

use crate::assumptions::HealthRules;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall health label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthStatus {
    Healthy,
    Improve,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        matches!(self, HealthStatus::Healthy)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Improve => "Improve",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Derived health metrics for a profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthMetrics {
    /// Liquidity buffer to hold, in currency
    pub emergency_fund_target: f64,
    /// Total loans over annual income, in percent
    pub debt_to_income_ratio: f64,
    pub status: HealthStatus,
}

impl HealthMetrics {
    /// Guidance shown when the profile needs work
    pub fn advice(&self) -> Option<&'static str> {
        match self.status {
            HealthStatus::Healthy => None,
            HealthStatus::Improve => {
                Some("Prioritize emergency fund & debt repayment before investing.")
            }
        }
    }
}

/// Health check with the default thresholds (6 months, 40%)
pub fn check(
    annual_income: f64,
    monthly_expenses: f64,
    total_assets: f64,
    total_loans: f64,
) -> HealthMetrics {
    check_with(
        &HealthRules::default(),
        annual_income,
        monthly_expenses,
        total_assets,
        total_loans,
    )
}

/// Health check against explicit thresholds
///
/// Zero income yields a ratio of 0 rather than an error. Healthy requires
/// both a ratio below the limit and assets strictly above the buffer.
pub fn check_with(
    rules: &HealthRules,
    annual_income: f64,
    monthly_expenses: f64,
    total_assets: f64,
    total_loans: f64,
) -> HealthMetrics {
    let emergency_fund_target = monthly_expenses * rules.emergency_fund_months;
    let debt_to_income_ratio = if annual_income > 0.0 {
        total_loans / annual_income * 100.0
    } else {
        0.0
    };

    let status = if debt_to_income_ratio < rules.debt_ratio_limit
        && total_assets > emergency_fund_target
    {
        HealthStatus::Healthy
    } else {
        HealthStatus::Improve
    };

    HealthMetrics {
        emergency_fund_target,
        debt_to_income_ratio,
        status,
    }
}

/// Health check for a whole profile
pub fn check_profile(rules: &HealthRules, profile: &Profile) -> HealthMetrics {
    check_with(
        rules,
        profile.annual_income,
        profile.monthly_expenses,
        profile.total_assets,
        profile.total_loans,
    )
}
