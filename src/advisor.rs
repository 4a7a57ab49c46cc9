//! Advisor for full dashboard evaluations
//!
//! Holds one set of assumptions and an allocation cache, then evaluates
//! profiles (singly or in parallel batches) into complete reports.

use crate::allocation::{AllocationCache, AllocationPlan, CacheStats};
use crate::assumptions::Assumptions;
use crate::error::Result;
use crate::health::{check_profile, HealthMetrics};
use crate::profile::{Goal, Profile};
use crate::projection::{growth_schedule, project_goals, GoalProjection, GrowthSchedule};
use crate::recommendation::{MonthlyPlan, Recommendation, RecommendationEngine};
use rayon::prelude::*;
use serde::Serialize;

/// Shown instead of goal projections when there is nothing to invest
pub const NO_SAVINGS_NOTICE: &str = "Add savings to see projections.";

/// Everything the dashboard displays for one profile
#[derive(Debug, Clone, Serialize)]
pub struct AdvisoryReport {
    pub profile: Profile,
    pub health: HealthMetrics,
    pub health_advice: Option<&'static str>,
    pub allocation: AllocationPlan,
    /// Sum of the allocation percentages (not necessarily 100)
    pub allocation_total: f64,
    pub plan: MonthlyPlan,
    pub annual_growth_percent: f64,
    pub goals: Vec<GoalProjection>,
    pub goals_notice: Option<&'static str>,
}

/// Pre-loaded advisor for repeated evaluations
///
/// # Example
/// ```ignore
/// let advisor = Advisor::new();
/// let report = advisor.evaluate(&Profile::default(), &[Goal::placeholder(0)]);
/// println!("{}", report.health.status);
/// ```
#[derive(Debug, Clone)]
pub struct Advisor {
    engine: RecommendationEngine,
    cache: AllocationCache,
}

impl Advisor {
    /// Advisor with the built-in assumptions
    pub fn new() -> Self {
        Self::with_assumptions(Assumptions::default_advisory())
    }

    /// Advisor with assumptions loaded from data/assumptions/
    pub fn from_csv() -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv()?))
    }

    /// Advisor with assumptions loaded from a specific directory
    pub fn from_csv_path(path: &std::path::Path) -> Result<Self> {
        Ok(Self::with_assumptions(Assumptions::from_csv_path(path)?))
    }

    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        let cache = AllocationCache::new(assumptions.allocation.clone());
        Self {
            engine: RecommendationEngine::new(assumptions),
            cache,
        }
    }

    pub fn assumptions(&self) -> &Assumptions {
        self.engine.assumptions()
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn health(&self, profile: &Profile) -> HealthMetrics {
        check_profile(&self.assumptions().health, profile)
    }

    pub fn recommend(&self, profile: &Profile) -> Recommendation {
        self.engine.recommend_cached(profile, &self.cache)
    }

    /// Goal projections at the configured growth rate
    pub fn project_goals(&self, goals: &[Goal], monthly_savings: f64) -> Vec<GoalProjection> {
        project_goals(goals, monthly_savings, self.assumptions().planning.annual_growth_percent)
    }

    /// Year-by-year growth of investing `monthly_savings` for `years`
    pub fn savings_schedule(&self, monthly_savings: f64, years: u32) -> GrowthSchedule {
        growth_schedule(monthly_savings, years, self.assumptions().planning.annual_growth_percent)
    }

    /// Evaluate one profile and its goals
    pub fn evaluate(&self, profile: &Profile, goals: &[Goal]) -> AdvisoryReport {
        let health = self.health(profile);
        let recommendation = self.recommend(profile);
        let savings = recommendation.plan.monthly_savings;

        let (goal_projections, goals_notice) = if savings > 0.0 {
            (self.project_goals(goals, savings), None)
        } else {
            (Vec::new(), Some(NO_SAVINGS_NOTICE))
        };

        AdvisoryReport {
            profile: profile.clone(),
            health,
            health_advice: health.advice(),
            allocation: recommendation.allocation,
            allocation_total: recommendation.allocation.total(),
            plan: recommendation.plan,
            annual_growth_percent: self.assumptions().planning.annual_growth_percent,
            goals: goal_projections,
            goals_notice,
        }
    }

    /// Evaluate many profiles in parallel against the same goals
    pub fn evaluate_batch(&self, profiles: &[Profile], goals: &[Goal]) -> Vec<AdvisoryReport> {
        profiles
            .par_iter()
            .map(|profile| self.evaluate(profile, goals))
            .collect()
    }
}

impl Default for Advisor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::HealthStatus;
    use crate::profile::RiskAppetite;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_profile_report() {
        let advisor = Advisor::new();
        let report = advisor.evaluate(&Profile::default(), &[Goal::placeholder(0)]);

        assert_eq!(report.health.status, HealthStatus::Healthy);
        assert_eq!(report.health.emergency_fund_target, 120_000.0);
        // (1,000,000 - 240,000) * 0.7 / 12
        assert_relative_eq!(report.plan.monthly_savings, 44_333.333333, epsilon = 1e-3);
        assert_eq!(report.goals.len(), 1);
        assert!(report.goals_notice.is_none());
        assert_eq!(report.goals[0].progress_percent, 100.0);
    }

    #[test]
    fn test_no_savings_skips_goals() {
        let advisor = Advisor::new();
        let broke = Profile::new(30, 100_000.0, 20_000.0, RiskAppetite::Moderate, 0.0, 0.0);
        let report = advisor.evaluate(&broke, &[Goal::placeholder(0)]);

        assert_eq!(report.plan.monthly_savings, 0.0);
        assert!(report.goals.is_empty());
        assert_eq!(report.goals_notice, Some(NO_SAVINGS_NOTICE));
        assert_eq!(report.health.status, HealthStatus::Improve);
        assert!(report.health_advice.is_some());
    }

    #[test]
    fn test_batch_matches_single_and_uses_cache() {
        let advisor = Advisor::new();
        let profiles: Vec<Profile> = (0..40)
            .map(|i| {
                Profile::new(
                    25 + (i % 4) as u8,
                    800_000.0 + i as f64 * 10_000.0,
                    25_000.0,
                    RiskAppetite::ALL[i % 3],
                    300_000.0,
                    50_000.0,
                )
            })
            .collect();
        let goals = vec![Goal::new("Retirement", 30_000_000.0, 25)];

        let batch = advisor.evaluate_batch(&profiles, &goals);
        assert_eq!(batch.len(), profiles.len());

        for (profile, report) in profiles.iter().zip(&batch) {
            let single = advisor.evaluate(profile, &goals);
            assert_eq!(report.plan, single.plan);
            assert_eq!(report.goals, single.goals);
        }

        // 4 ages x 3 tiers at most
        assert!(advisor.cache_stats().misses <= 12);
    }

    #[test]
    fn test_growth_rate_override() {
        let slow = Advisor::with_assumptions(Assumptions::default_advisory().with_growth_rate(4.0));
        let fast = Advisor::new();
        let goal = [Goal::new("Big", 1e12, 20)];
        let p = Profile::default();
        assert!(fast.evaluate(&p, &goal).goals[0].projected_corpus > slow.evaluate(&p, &goal).goals[0].projected_corpus);
    }

    #[test]
    fn test_report_serializes() {
        let report = Advisor::new().evaluate(&Profile::default(), &[]);
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["health"]["status"], "Healthy");
        assert_eq!(json["profile"]["risk_appetite"], "Moderate");
        assert!(json["goals"].as_array().unwrap().is_empty());
    }
}
