//! Year-by-year growth schedule for a recurring contribution

use super::growth::project_corpus;
use serde::{Deserialize, Serialize};

/// Balance at the end of one projection year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRow {
    /// 1-indexed projection year
    pub year: u32,
    /// Cumulative contributions paid in by the end of this year
    pub contributed: f64,
    /// Projected value at the end of this year
    pub balance: f64,
    /// `balance - contributed`
    pub growth: f64,
}

/// Rows for every year of a projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthSchedule {
    pub monthly_contribution: f64,
    pub annual_growth_percent: f64,
    pub rows: Vec<GrowthRow>,
}

/// Totals over a schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSummary {
    pub total_years: u32,
    pub total_contributed: f64,
    pub final_balance: f64,
    pub total_growth: f64,
}

impl GrowthSchedule {
    pub fn summary(&self) -> ScheduleSummary {
        let last = self.rows.last();
        let total_contributed = last.map(|r| r.contributed).unwrap_or(0.0);
        let final_balance = last.map(|r| r.balance).unwrap_or(0.0);

        ScheduleSummary {
            total_years: self.rows.len() as u32,
            total_contributed,
            final_balance,
            total_growth: final_balance - total_contributed,
        }
    }
}

/// Schedule whose year `k` balance equals `project_corpus(c, k, rate)`.
/// Empty when the contribution is not positive.
pub fn growth_schedule(monthly_contribution: f64, years: u32, annual_growth_percent: f64) -> GrowthSchedule {
    let rows = if monthly_contribution > 0.0 {
        (1..=years)
            .map(|year| {
                let contributed = monthly_contribution * 12.0 * f64::from(year);
                let balance = project_corpus(monthly_contribution, i64::from(year), annual_growth_percent);
                GrowthRow {
                    year,
                    contributed,
                    balance,
                    growth: balance - contributed,
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    GrowthSchedule {
        monthly_contribution,
        annual_growth_percent,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_final_row_matches_projection() {
        let schedule = growth_schedule(10_000.0, 15, 10.0);
        assert_eq!(schedule.rows.len(), 15);

        let summary = schedule.summary();
        assert_eq!(summary.total_years, 15);
        assert_eq!(summary.final_balance, project_corpus(10_000.0, 15, 10.0));
        assert_relative_eq!(summary.total_contributed, 1_800_000.0, epsilon = 1e-6);
        assert!(summary.total_growth > 0.0);
    }

    #[test]
    fn test_balances_increase_each_year() {
        let schedule = growth_schedule(1_000.0, 10, 8.0);
        for pair in schedule.rows.windows(2) {
            assert!(pair[1].balance > pair[0].balance);
        }
    }

    #[test]
    fn test_empty_for_zero_contribution() {
        let schedule = growth_schedule(0.0, 10, 10.0);
        assert!(schedule.rows.is_empty());
        assert_eq!(schedule.summary().final_balance, 0.0);
    }
}
