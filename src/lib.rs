//! Finance Advisor - personal-finance advisory engine
//!
//! This library provides:
//! - Age and risk based asset allocation
//! - Financial health check (emergency fund, debt-to-income ratio)
//! - Monthly investment plan from surplus income
//! - Compound-growth projections for savings goals
//! - Static reference tables and a time-bounded market data boundary

pub mod error;
pub mod profile;
pub mod assumptions;
pub mod allocation;
pub mod health;
pub mod recommendation;
pub mod projection;
pub mod reference;
pub mod market;
pub mod advisor;
pub mod display;

// Re-export commonly used types
pub use error::{AdvisorError, Result};
pub use profile::{Goal, Profile, RiskAppetite};
pub use assumptions::Assumptions;
pub use allocation::{allocate, AllocationPlan, AssetClass};
pub use health::{check, HealthMetrics, HealthStatus};
pub use recommendation::{recommend, MonthlyPlan, Recommendation, RecommendationEngine};
pub use projection::{project_corpus, project_goal, GoalProjection};
pub use advisor::{Advisor, AdvisoryReport};
