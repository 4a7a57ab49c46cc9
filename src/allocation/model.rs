//! Age and risk based asset allocation

use crate::assumptions::AllocationRules;
use crate::profile::RiskAppetite;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five allocation buckets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetClass {
    Equity,
    Debt,
    Gold,
    ReitsInvits,
    International,
}

impl AssetClass {
    /// All classes in display order
    pub const ALL: [AssetClass; 5] = [
        AssetClass::Equity,
        AssetClass::Debt,
        AssetClass::Gold,
        AssetClass::ReitsInvits,
        AssetClass::International,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::Equity => "Equity",
            AssetClass::Debt => "Debt",
            AssetClass::Gold => "Gold",
            AssetClass::ReitsInvits => "REITs/InvITs",
            AssetClass::International => "International",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A value per asset class. Holds percentages in an [`AllocationPlan`] and
/// currency amounts in a monthly investment plan.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ClassBreakdown {
    pub equity: f64,
    pub debt: f64,
    pub gold: f64,
    pub reits_invits: f64,
    pub international: f64,
}

/// Target percentage per asset class. Not normalized: the five values need
/// not sum to 100.
pub type AllocationPlan = ClassBreakdown;

impl ClassBreakdown {
    pub fn get(&self, class: AssetClass) -> f64 {
        match class {
            AssetClass::Equity => self.equity,
            AssetClass::Debt => self.debt,
            AssetClass::Gold => self.gold,
            AssetClass::ReitsInvits => self.reits_invits,
            AssetClass::International => self.international,
        }
    }

    /// `(class, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (AssetClass, f64)> + '_ {
        AssetClass::ALL.into_iter().map(move |class| (class, self.get(class)))
    }

    pub fn total(&self) -> f64 {
        self.iter().map(|(_, v)| v).sum()
    }

    /// Build a breakdown by evaluating `f` for every class
    pub fn from_fn(mut f: impl FnMut(AssetClass) -> f64) -> Self {
        Self {
            equity: f(AssetClass::Equity),
            debt: f(AssetClass::Debt),
            gold: f(AssetClass::Gold),
            reits_invits: f(AssetClass::ReitsInvits),
            international: f(AssetClass::International),
        }
    }
}

/// Allocation for `age` and `risk` using the built-in tier table
pub fn allocate(age: u8, risk: RiskAppetite) -> AllocationPlan {
    allocate_with(&AllocationRules::default(), age, risk)
}

/// Allocation for `age` and `risk` using an explicit tier table
///
/// Equity gets `max(floor, 100 - age)` scaled by the tier multiplier; the
/// other classes take the tier's fixed weights.
pub fn allocate_with(rules: &AllocationRules, age: u8, risk: RiskAppetite) -> AllocationPlan {
    let equity_base = rules.equity_base(age);
    let weights = rules.tier(risk);

    let plan = AllocationPlan {
        equity: equity_base * weights.equity_multiplier,
        debt: weights.debt,
        gold: weights.gold,
        reits_invits: weights.reits_invits,
        international: weights.international,
    };

    log::debug!(
        "allocation age={} risk={} equity_base={} total={}",
        age,
        risk,
        equity_base,
        plan.total()
    );

    plan
}
