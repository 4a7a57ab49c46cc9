//! CSV-based assumption loader
//!
//! Reads overrides from `planning.csv` (Key,Value rows) and
//! `allocation_tiers.csv` (one row per risk tier). A missing file leaves the
//! corresponding defaults untouched.

use super::{AllocationRules, HealthRules, PlanningRules, TierWeights};
use crate::error::{AdvisorError, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Default path to assumptions directory
pub const DEFAULT_ASSUMPTIONS_PATH: &str = "data/assumptions";

const PLANNING_FILE: &str = "planning.csv";
const ALLOCATION_TIERS_FILE: &str = "allocation_tiers.csv";

/// Assumption values as read from disk, before being combined
#[derive(Debug, Clone, Default)]
pub struct LoadedAssumptions {
    pub allocation: AllocationRules,
    pub health: HealthRules,
    pub planning: PlanningRules,
}

impl LoadedAssumptions {
    /// Load every assumption file found in `path`
    pub fn load_from(path: &Path) -> Result<Self> {
        let mut loaded = Self::default();

        let planning_path = path.join(PLANNING_FILE);
        if planning_path.exists() {
            loaded.apply_planning(File::open(&planning_path)?)?;
            log::info!("Applied planning overrides from {}", planning_path.display());
        } else {
            log::debug!("{} not found, using default planning rules", planning_path.display());
        }

        let tiers_path = path.join(ALLOCATION_TIERS_FILE);
        if tiers_path.exists() {
            loaded.apply_allocation_tiers(File::open(&tiers_path)?)?;
            log::info!("Applied allocation tiers from {}", tiers_path.display());
        } else {
            log::debug!("{} not found, using default allocation tiers", tiers_path.display());
        }

        Ok(loaded)
    }

    /// Apply `Key,Value` rows
    pub fn apply_planning<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut reader = csv::Reader::from_reader(reader);

        for result in reader.records() {
            let record = result?;
            let key = record.get(0).unwrap_or_default().trim();
            let value: f64 = record.get(1).unwrap_or_default().trim().parse()?;

            match key {
                "annual_growth_percent" => self.planning.annual_growth_percent = value,
                "investable_share" => self.planning.investable_share = value,
                "emergency_fund_months" => self.health.emergency_fund_months = value,
                "debt_ratio_limit" => self.health.debt_ratio_limit = value,
                "equity_floor" => self.allocation.equity_floor = value,
                other => return Err(AdvisorError::UnknownAssumption(other.to_string())),
            }
        }

        Ok(())
    }

    /// Apply `Tier,EquityMultiplier,Debt,Gold,ReitsInvits,International` rows
    pub fn apply_allocation_tiers<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut reader = csv::Reader::from_reader(reader);

        for result in reader.records() {
            let record = result?;
            if record.len() < 6 {
                return Err(AdvisorError::Parse(format!(
                    "allocation tier row needs 6 columns, got {}",
                    record.len()
                )));
            }

            let tier = record[0].parse()?;
            let weights = TierWeights::new(
                record[1].trim().parse()?,
                record[2].trim().parse()?,
                record[3].trim().parse()?,
                record[4].trim().parse()?,
                record[5].trim().parse()?,
            );
            *self.allocation.tier_mut(tier) = weights;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::RiskAppetite;

    #[test]
    fn test_apply_planning() {
        let data = "\
Key,Value
annual_growth_percent,12
investable_share,0.5
debt_ratio_limit,35
";
        let mut loaded = LoadedAssumptions::default();
        loaded.apply_planning(data.as_bytes()).unwrap();
        assert_eq!(loaded.planning.annual_growth_percent, 12.0);
        assert_eq!(loaded.planning.investable_share, 0.5);
        assert_eq!(loaded.health.debt_ratio_limit, 35.0);
        // Untouched keys keep defaults
        assert_eq!(loaded.health.emergency_fund_months, 6.0);
    }

    #[test]
    fn test_unknown_planning_key() {
        let data = "Key,Value\nmoon_phase,3\n";
        let mut loaded = LoadedAssumptions::default();
        assert!(matches!(
            loaded.apply_planning(data.as_bytes()),
            Err(AdvisorError::UnknownAssumption(_))
        ));
    }

    #[test]
    fn test_apply_allocation_tiers() {
        let data = "\
Tier,EquityMultiplier,Debt,Gold,ReitsInvits,International
Moderate,0.75,35,5,5,5
";
        let mut loaded = LoadedAssumptions::default();
        loaded.apply_allocation_tiers(data.as_bytes()).unwrap();
        let moderate = loaded.allocation.tier(RiskAppetite::Moderate);
        assert_eq!(moderate.equity_multiplier, 0.75);
        assert_eq!(moderate.debt, 35.0);
        assert_eq!(
            loaded.allocation.tier(RiskAppetite::Aggressive),
            AllocationRules::default().tier(RiskAppetite::Aggressive)
        );
    }

    #[test]
    fn test_missing_directory_uses_defaults() {
        let loaded = LoadedAssumptions::load_from(Path::new("does/not/exist")).unwrap();
        assert_eq!(loaded.allocation, AllocationRules::default());
        assert_eq!(loaded.planning, PlanningRules::default());
    }

    #[test]
    fn test_shipped_assumptions_match_defaults() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_ASSUMPTIONS_PATH);
        let loaded = LoadedAssumptions::load_from(&dir).unwrap();
        assert_eq!(loaded.allocation, AllocationRules::default());
        assert_eq!(loaded.health, HealthRules::default());
        assert_eq!(loaded.planning, PlanningRules::default());
    }
}
