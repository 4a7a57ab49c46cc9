//! Allocation tier table: equity multiplier and fixed weights per risk tier

use crate::profile::RiskAppetite;
use serde::{Deserialize, Serialize};

/// Equity share never drops below this many percent of the base
pub const DEFAULT_EQUITY_FLOOR: f64 = 20.0;

/// Weights applied for one risk tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierWeights {
    /// Fraction of the equity base allocated to equity
    pub equity_multiplier: f64,
    /// Fixed percentages for the remaining classes
    pub debt: f64,
    pub gold: f64,
    pub reits_invits: f64,
    pub international: f64,
}

impl TierWeights {
    pub const fn new(
        equity_multiplier: f64,
        debt: f64,
        gold: f64,
        reits_invits: f64,
        international: f64,
    ) -> Self {
        Self {
            equity_multiplier,
            debt,
            gold,
            reits_invits,
            international,
        }
    }
}

/// Age-based equity rule plus per-tier weights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationRules {
    /// Minimum equity base in percent (`max(floor, 100 - age)`)
    pub equity_floor: f64,
    pub conservative: TierWeights,
    pub moderate: TierWeights,
    pub aggressive: TierWeights,
}

impl AllocationRules {
    /// Weights for the given tier
    pub fn tier(&self, risk: RiskAppetite) -> &TierWeights {
        match risk {
            RiskAppetite::Conservative => &self.conservative,
            RiskAppetite::Moderate => &self.moderate,
            RiskAppetite::Aggressive => &self.aggressive,
        }
    }

    pub fn tier_mut(&mut self, risk: RiskAppetite) -> &mut TierWeights {
        match risk {
            RiskAppetite::Conservative => &mut self.conservative,
            RiskAppetite::Moderate => &mut self.moderate,
            RiskAppetite::Aggressive => &mut self.aggressive,
        }
    }

    /// Equity base before the tier multiplier: `max(floor, 100 - age)`
    pub fn equity_base(&self, age: u8) -> f64 {
        (100.0 - f64::from(age)).max(self.equity_floor)
    }
}

impl Default for AllocationRules {
    fn default() -> Self {
        Self {
            equity_floor: DEFAULT_EQUITY_FLOOR,
            conservative: TierWeights::new(0.6, 40.0, 5.0, 5.0, 5.0),
            moderate: TierWeights::new(0.8, 30.0, 10.0, 10.0, 10.0),
            aggressive: TierWeights::new(1.0, 20.0, 5.0, 10.0, 15.0),
        }
    }
}
