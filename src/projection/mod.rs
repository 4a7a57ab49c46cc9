//! Compound-growth projections for recurring contributions and goals

mod growth;
mod schedule;
mod goal;

pub use growth::{
    periodic_rate, project_corpus, project_corpus_default, DEFAULT_ANNUAL_GROWTH_PERCENT,
    PERIODS_PER_YEAR,
};
pub use schedule::{growth_schedule, GrowthRow, GrowthSchedule, ScheduleSummary};
pub use goal::{project_goal, project_goals, GoalProjection};
