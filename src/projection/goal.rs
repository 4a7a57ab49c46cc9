//! Goal corpus projection and progress-to-target

use super::growth::project_corpus;
use crate::profile::Goal;
use serde::{Deserialize, Serialize};

/// Projected outcome of one goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProjection {
    pub goal_name: String,
    pub target_amount: f64,
    pub horizon_years: u32,
    pub projected_corpus: f64,
    /// Share of the target reached, clamped to [0, 100]
    pub progress_percent: f64,
}

impl GoalProjection {
    pub fn is_on_track(&self) -> bool {
        self.progress_percent >= 100.0
    }
}

/// Project `goal` from the current monthly savings.
///
/// The annualized savings (`monthly_savings * 12`) is passed to
/// [`project_corpus`] as its per-month contribution, so the corpus is
/// roughly twelve times what monthly saving would actually accumulate.
pub fn project_goal(goal: &Goal, monthly_savings: f64, annual_growth_percent: f64) -> GoalProjection {
    let projected_corpus = project_corpus(
        monthly_savings * 12.0,
        i64::from(goal.horizon_years),
        annual_growth_percent,
    );

    let progress_percent = if goal.target_amount > 0.0 {
        // max/min rather than clamp so a NaN corpus maps to 0
        (projected_corpus / goal.target_amount * 100.0).max(0.0).min(100.0)
    } else {
        0.0
    };

    log::debug!(
        "goal '{}' target={} years={} corpus={:.2} progress={:.1}%",
        goal.name,
        goal.target_amount,
        goal.horizon_years,
        projected_corpus,
        progress_percent
    );

    GoalProjection {
        goal_name: goal.name.clone(),
        target_amount: goal.target_amount,
        horizon_years: goal.horizon_years,
        projected_corpus,
        progress_percent,
    }
}

/// Project every goal in order
pub fn project_goals(goals: &[Goal], monthly_savings: f64, annual_growth_percent: f64) -> Vec<GoalProjection> {
    goals
        .iter()
        .map(|goal| project_goal(goal, monthly_savings, annual_growth_percent))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_uses_annualized_savings_as_contribution() {
        let goal = Goal::new("House", 1e12, 10);
        let p = project_goal(&goal, 5_000.0, 10.0);
        assert_eq!(p.projected_corpus, project_corpus(60_000.0, 10, 10.0));
        assert_relative_eq!(
            p.progress_percent,
            p.projected_corpus / 1e12 * 100.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_progress_is_clamped() {
        let goal = Goal::new("Bike", 10.0, 30);
        let p = project_goal(&goal, 100_000.0, 10.0);
        assert_eq!(p.progress_percent, 100.0);
        assert!(p.is_on_track());

        // Negative growth over a long horizon still cannot go below 0
        let p = project_goal(&Goal::new("x", 1_000.0, 30), 10.0, -400.0);
        assert!((0.0..=100.0).contains(&p.progress_percent));
    }

    #[test]
    fn test_zero_target_and_zero_savings() {
        let p = project_goal(&Goal::new("Nothing", 0.0, 5), 10_000.0, 10.0);
        assert_eq!(p.progress_percent, 0.0);

        let p = project_goal(&Goal::new("Car", 800_000.0, 3), 0.0, 10.0);
        assert_eq!(p.projected_corpus, 0.0);
        assert_eq!(p.progress_percent, 0.0);
    }

    #[test]
    fn test_project_goals_keeps_order() {
        let goals = vec![Goal::new("A", 1e6, 1), Goal::new("B", 1e6, 20)];
        let projections = project_goals(&goals, 1_000.0, 10.0);
        assert_eq!(projections.len(), 2);
        assert_eq!(projections[0].goal_name, "A");
        assert!(projections[1].projected_corpus > projections[0].projected_corpus);
    }
}
