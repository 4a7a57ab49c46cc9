//! Advisory assumptions: allocation tiers, savings rate, growth and health thresholds

mod allocation;
mod planning;
pub mod loader;

pub use allocation::{AllocationRules, TierWeights, DEFAULT_EQUITY_FLOOR};
pub use planning::{
    HealthRules, PlanningRules, DEFAULT_ANNUAL_GROWTH_PERCENT, DEFAULT_DEBT_RATIO_LIMIT,
    DEFAULT_EMERGENCY_FUND_MONTHS, DEFAULT_INVESTABLE_SHARE,
};
pub use loader::LoadedAssumptions;

use crate::error::Result;
use std::path::Path;

/// Container for all advisory assumptions
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Assumptions {
    pub allocation: AllocationRules,
    pub health: HealthRules,
    pub planning: PlanningRules,
}

impl Assumptions {
    /// Built-in rule set used by the dashboard
    pub fn default_advisory() -> Self {
        Self::default()
    }

    /// Load assumptions from CSV files in the default location (data/assumptions/)
    pub fn from_csv() -> Result<Self> {
        Self::from_csv_path(Path::new(loader::DEFAULT_ASSUMPTIONS_PATH))
    }

    /// Load assumptions from CSV files in a specific directory
    pub fn from_csv_path(path: &Path) -> Result<Self> {
        let loaded = LoadedAssumptions::load_from(path)?;

        Ok(Self {
            allocation: loaded.allocation,
            health: loaded.health,
            planning: loaded.planning,
        })
    }

    /// Same assumptions with a different projection growth rate
    pub fn with_growth_rate(mut self, annual_growth_percent: f64) -> Self {
        self.planning.annual_growth_percent = annual_growth_percent;
        self
    }
}
