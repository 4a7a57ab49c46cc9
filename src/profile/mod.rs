//! Profile and goal records and CSV loading

mod data;
pub mod loader;

pub use data::{
    Goal, Profile, RiskAppetite, MAX_GOALS, MAX_GOAL_YEARS, MAX_INPUT_AGE, MAX_PROFILE_AGE,
    MIN_GOAL_YEARS, MIN_INPUT_AGE,
};
pub use loader::{load_goals, load_goals_from_reader, load_profiles, load_profiles_from_reader, ProfileRecord};
