//! Profile and goal records supplied by the presentation layer

use crate::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Youngest age accepted by the dashboard inputs
pub const MIN_INPUT_AGE: u8 = 18;

/// Oldest age accepted by the dashboard inputs
pub const MAX_INPUT_AGE: u8 = 80;

/// Oldest age a profile may carry at all
pub const MAX_PROFILE_AGE: u8 = 120;

/// Goal horizon bounds in years
pub const MIN_GOAL_YEARS: u32 = 1;
pub const MAX_GOAL_YEARS: u32 = 30;

/// Number of goals the dashboard lets a user track at once
pub const MAX_GOALS: usize = 5;

/// User-selected risk tier controlling equity exposure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskAppetite {
    Conservative,
    #[default]
    Moderate,
    Aggressive,
}

impl RiskAppetite {
    /// All tiers in display order
    pub const ALL: [RiskAppetite; 3] = [
        RiskAppetite::Conservative,
        RiskAppetite::Moderate,
        RiskAppetite::Aggressive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskAppetite::Conservative => "Conservative",
            RiskAppetite::Moderate => "Moderate",
            RiskAppetite::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for RiskAppetite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskAppetite {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" => Ok(RiskAppetite::Conservative),
            "moderate" => Ok(RiskAppetite::Moderate),
            "aggressive" => Ok(RiskAppetite::Aggressive),
            _ => Err(AdvisorError::UnknownRiskAppetite(s.to_string())),
        }
    }
}

/// A user's demographic and financial profile for one evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Age in whole years
    pub age: u8,

    /// Gross yearly income
    pub annual_income: f64,

    /// Average spending per month
    pub monthly_expenses: f64,

    /// Risk tier chosen by the user
    pub risk_appetite: RiskAppetite,

    /// Current total of liquid and invested assets
    pub total_assets: f64,

    /// Outstanding loan principal across all loans
    pub total_loans: f64,
}

impl Profile {
    pub fn new(
        age: u8,
        annual_income: f64,
        monthly_expenses: f64,
        risk_appetite: RiskAppetite,
        total_assets: f64,
        total_loans: f64,
    ) -> Self {
        Self {
            age,
            annual_income,
            monthly_expenses,
            risk_appetite,
            total_assets,
            total_loans,
        }
    }

    /// Reject ages beyond 120 and negative or non-finite currency fields
    pub fn validate(&self) -> Result<()> {
        if self.age > MAX_PROFILE_AGE {
            return Err(AdvisorError::InvalidProfile(format!(
                "age {} exceeds {}",
                self.age, MAX_PROFILE_AGE
            )));
        }

        let fields = [
            ("annual_income", self.annual_income),
            ("monthly_expenses", self.monthly_expenses),
            ("total_assets", self.total_assets),
            ("total_loans", self.total_loans),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(AdvisorError::InvalidProfile(format!(
                    "{} must be a non-negative amount, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// Clamp inputs the way the dashboard widgets do before calling the core:
    /// age into [18, 80], amounts floored at zero.
    pub fn clamped(&self) -> Self {
        Self {
            age: self.age.clamp(MIN_INPUT_AGE, MAX_INPUT_AGE),
            annual_income: non_negative(self.annual_income),
            monthly_expenses: non_negative(self.monthly_expenses),
            risk_appetite: self.risk_appetite,
            total_assets: non_negative(self.total_assets),
            total_loans: non_negative(self.total_loans),
        }
    }

    /// Yearly spending implied by the monthly figure
    pub fn annual_expenses(&self) -> f64 {
        self.monthly_expenses * 12.0
    }
}

impl Default for Profile {
    /// Initial sidebar values of the dashboard
    fn default() -> Self {
        Self::new(30, 1_000_000.0, 20_000.0, RiskAppetite::default(), 500_000.0, 0.0)
    }
}

fn non_negative(value: f64) -> f64 {
    if value.is_finite() {
        value.max(0.0)
    } else {
        0.0
    }
}

/// A savings goal with a target corpus and a time horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub target_amount: f64,
    pub horizon_years: u32,
}

impl Goal {
    pub fn new(name: impl Into<String>, target_amount: f64, horizon_years: u32) -> Self {
        Self {
            name: name.into(),
            target_amount,
            horizon_years,
        }
    }

    /// Default goal shown for slot `index` (0-based)
    pub fn placeholder(index: usize) -> Self {
        Self::new(default_goal_name(index), 5_000_000.0, 10)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.target_amount.is_finite() || self.target_amount <= 0.0 {
            return Err(AdvisorError::InvalidGoal(format!(
                "'{}': target must be positive, got {}",
                self.name, self.target_amount
            )));
        }
        if !(MIN_GOAL_YEARS..=MAX_GOAL_YEARS).contains(&self.horizon_years) {
            return Err(AdvisorError::InvalidGoal(format!(
                "'{}': horizon must be {}-{} years, got {}",
                self.name, MIN_GOAL_YEARS, MAX_GOAL_YEARS, self.horizon_years
            )));
        }
        Ok(())
    }

    /// Clamp the horizon into [1, 30], floor the target at zero and fill a
    /// blank name from the goal's slot `index`.
    pub fn clamped(&self, index: usize) -> Self {
        let name = if self.name.trim().is_empty() {
            default_goal_name(index)
        } else {
            self.name.trim().to_string()
        };
        Self {
            name,
            target_amount: non_negative(self.target_amount),
            horizon_years: self.horizon_years.clamp(MIN_GOAL_YEARS, MAX_GOAL_YEARS),
        }
    }
}

impl FromStr for Goal {
    type Err = AdvisorError;

    /// Parse `NAME:TARGET:YEARS`, e.g. `House:5000000:10`
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.rsplitn(3, ':');
        let (years, target, name) = match (parts.next(), parts.next(), parts.next()) {
            (Some(y), Some(t), Some(n)) => (y, t, n),
            _ => {
                return Err(AdvisorError::Parse(format!(
                    "expected NAME:TARGET:YEARS, got '{}'",
                    s
                )))
            }
        };

        let target_amount: f64 = target.trim().parse()?;
        let horizon_years: u32 = years
            .trim()
            .parse()
            .map_err(|e: std::num::ParseIntError| AdvisorError::Parse(e.to_string()))?;

        Ok(Goal::new(name.trim(), target_amount, horizon_years))
    }
}

fn default_goal_name(index: usize) -> String {
    format!("Goal {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_risk_appetite_parse_is_case_insensitive() {
        assert_eq!("aggressive".parse::<RiskAppetite>().unwrap(), RiskAppetite::Aggressive);
        assert_eq!(" Conservative ".parse::<RiskAppetite>().unwrap(), RiskAppetite::Conservative);
        assert!("reckless".parse::<RiskAppetite>().is_err());
    }

    #[test]
    fn test_default_risk_is_moderate() {
        assert_eq!(RiskAppetite::default(), RiskAppetite::Moderate);
        assert_eq!(Profile::default().risk_appetite, RiskAppetite::Moderate);
    }

    #[test]
    fn test_profile_validation() {
        assert!(Profile::default().validate().is_ok());

        let mut p = Profile::default();
        p.total_loans = -1.0;
        assert!(matches!(p.validate(), Err(AdvisorError::InvalidProfile(_))));

        let mut p = Profile::default();
        p.age = 121;
        assert!(p.validate().is_err());

        let mut p = Profile::default();
        p.annual_income = f64::NAN;
        assert!(p.validate().is_err());
    }

    #[test]
    fn test_profile_clamping() {
        let p = Profile::new(12, -5.0, f64::INFINITY, RiskAppetite::Aggressive, 10.0, -1.0);
        let c = p.clamped();
        assert_eq!(c.age, 18);
        assert_eq!(c.annual_income, 0.0);
        assert_eq!(c.monthly_expenses, 0.0);
        assert_eq!(c.total_assets, 10.0);
        assert_eq!(c.total_loans, 0.0);

        let old = Profile::new(95, 0.0, 0.0, RiskAppetite::Moderate, 0.0, 0.0).clamped();
        assert_eq!(old.age, 80);
    }

    #[test]
    fn test_goal_parse() {
        let g: Goal = "Child: Education:2500000:15".parse().unwrap();
        assert_eq!(g.name, "Child: Education");
        assert_eq!(g.target_amount, 2_500_000.0);
        assert_eq!(g.horizon_years, 15);

        assert!("House:abc:10".parse::<Goal>().is_err());
        assert!("House".parse::<Goal>().is_err());
    }

    #[test]
    fn test_goal_validation_and_clamping() {
        assert!(Goal::placeholder(0).validate().is_ok());
        assert!(Goal::new("x", 0.0, 10).validate().is_err());
        assert!(Goal::new("x", 100.0, 31).validate().is_err());

        let g = Goal::new("  ", 100.0, 45).clamped(2);
        assert_eq!(g.name, "Goal 3");
        assert_eq!(g.horizon_years, 30);
        assert!(g.validate().is_ok());
    }
}
