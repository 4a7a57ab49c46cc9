//! Monthly investment plan from surplus income and target allocation

use crate::allocation::{allocate_with, AllocationCache, AllocationPlan, ClassBreakdown};
use crate::assumptions::Assumptions;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};

/// Currency to invest each month, split by asset class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPlan {
    /// Investable amount per month, never negative
    pub monthly_savings: f64,
    /// `monthly_savings` scaled by each class's allocation percent
    pub amounts: ClassBreakdown,
}

/// Allocation together with the plan derived from it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub allocation: AllocationPlan,
    pub plan: MonthlyPlan,
}

/// Investable monthly amount: a share of the yearly surplus spread over
/// twelve months, floored at zero when expenses exceed income.
pub fn monthly_savings(annual_income: f64, monthly_expenses: f64, investable_share: f64) -> f64 {
    let surplus = annual_income - monthly_expenses * 12.0;
    (surplus * investable_share / 12.0).max(0.0)
}

/// Split `monthly_savings` according to `allocation` percentages
pub fn monthly_plan(monthly_savings: f64, allocation: &AllocationPlan) -> MonthlyPlan {
    MonthlyPlan {
        monthly_savings,
        amounts: ClassBreakdown::from_fn(|class| monthly_savings * (allocation.get(class) / 100.0)),
    }
}

/// Builds recommendations with a fixed set of assumptions
#[derive(Debug, Clone)]
pub struct RecommendationEngine {
    assumptions: Assumptions,
}

impl RecommendationEngine {
    pub fn new(assumptions: Assumptions) -> Self {
        Self { assumptions }
    }

    pub fn recommend(&self, profile: &Profile) -> Recommendation {
        let allocation = allocate_with(
            &self.assumptions.allocation,
            profile.age,
            profile.risk_appetite,
        );
        self.recommend_with_allocation(profile, allocation)
    }

    /// Same as [`recommend`](Self::recommend) but looks the allocation up in `cache`
    pub fn recommend_cached(&self, profile: &Profile, cache: &AllocationCache) -> Recommendation {
        let allocation = cache.get(profile.age, profile.risk_appetite);
        self.recommend_with_allocation(profile, allocation)
    }

    fn recommend_with_allocation(&self, profile: &Profile, allocation: AllocationPlan) -> Recommendation {
        let savings = monthly_savings(
            profile.annual_income,
            profile.monthly_expenses,
            self.assumptions.planning.investable_share,
        );

        Recommendation {
            allocation,
            plan: monthly_plan(savings, &allocation),
        }
    }

    pub fn assumptions(&self) -> &Assumptions {
        &self.assumptions
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(Assumptions::default_advisory())
    }
}

/// Recommendation for `profile` with default assumptions
pub fn recommend(profile: &Profile) -> Recommendation {
    RecommendationEngine::default().recommend(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::AssetClass;
    use crate::profile::RiskAppetite;
    use approx::assert_relative_eq;

    fn profile(income: f64, expenses: f64, risk: RiskAppetite) -> Profile {
        Profile::new(30, income, expenses, risk, 500_000.0, 0.0)
    }

    #[test]
    fn test_monthly_savings_from_surplus() {
        let rec = recommend(&profile(1_200_000.0, 20_000.0, RiskAppetite::Moderate));
        assert_relative_eq!(rec.plan.monthly_savings, 56_000.0, epsilon = 1e-6);
    }

    #[test]
    fn test_savings_floor_at_zero() {
        let rec = recommend(&profile(100_000.0, 50_000.0, RiskAppetite::Aggressive));
        assert_eq!(rec.plan.monthly_savings, 0.0);
        assert!(rec.plan.amounts.iter().all(|(_, v)| v == 0.0));
    }

    #[test]
    fn test_plan_follows_allocation() {
        let rec = recommend(&profile(1_200_000.0, 20_000.0, RiskAppetite::Aggressive));
        // Aggressive at 30: equity 70%, debt 20%
        assert_relative_eq!(rec.plan.amounts.get(AssetClass::Equity), 39_200.0, epsilon = 1e-6);
        assert_relative_eq!(rec.plan.amounts.get(AssetClass::Debt), 11_200.0, epsilon = 1e-6);
        assert_relative_eq!(rec.plan.amounts.international, 8_400.0, epsilon = 1e-6);
    }

    #[test]
    fn test_cached_matches_uncached() {
        let engine = RecommendationEngine::default();
        let cache = AllocationCache::default();
        let p = profile(900_000.0, 30_000.0, RiskAppetite::Conservative);
        assert_eq!(engine.recommend(&p), engine.recommend_cached(&p, &cache));
        assert_eq!(engine.recommend(&p), engine.recommend_cached(&p, &cache));
        assert_eq!(cache.stats().hits, 1);
    }

    #[test]
    fn test_custom_investable_share() {
        let mut assumptions = Assumptions::default_advisory();
        assumptions.planning.investable_share = 0.5;
        let engine = RecommendationEngine::new(assumptions);
        let rec = engine.recommend(&profile(1_200_000.0, 20_000.0, RiskAppetite::Moderate));
        assert_relative_eq!(rec.plan.monthly_savings, 40_000.0, epsilon = 1e-6);
    }
}
