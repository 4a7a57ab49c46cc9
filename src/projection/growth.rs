//! Future value of a recurring monthly contribution

pub use crate::assumptions::DEFAULT_ANNUAL_GROWTH_PERCENT;

/// Periods per year used for compounding
pub const PERIODS_PER_YEAR: i64 = 12;

/// Monthly rate implied by an annual growth percentage
pub fn periodic_rate(annual_growth_percent: f64) -> f64 {
    annual_growth_percent / 100.0 / PERIODS_PER_YEAR as f64
}

/// Future value of `monthly_contribution` paid at the start of every month
/// for `years`, compounded monthly at `annual_growth_percent / 12`.
///
/// Annuity-due: `c * ((1 + r)^n - 1) / r * (1 + r)` with `n = years * 12`.
/// A zero rate degenerates to `c * n`. Non-positive contributions or
/// horizons give 0. Negative rates are allowed and shrink the result.
pub fn project_corpus(monthly_contribution: f64, years: i64, annual_growth_percent: f64) -> f64 {
    if monthly_contribution <= 0.0 || years <= 0 {
        return 0.0;
    }

    let periods = years.saturating_mul(PERIODS_PER_YEAR) as f64;
    let rate = periodic_rate(annual_growth_percent);

    if rate == 0.0 {
        return monthly_contribution * periods;
    }

    let growth = (1.0 + rate).powf(periods);
    monthly_contribution * ((growth - 1.0) / rate) * (1.0 + rate)
}

/// [`project_corpus`] at the default 10% growth rate
pub fn project_corpus_default(monthly_contribution: f64, years: i64) -> f64 {
    project_corpus(monthly_contribution, years, DEFAULT_ANNUAL_GROWTH_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_degenerate_inputs_give_zero() {
        for years in [-5, -1, 0] {
            assert_eq!(project_corpus(10_000.0, years, 10.0), 0.0);
        }
        for c in [-100.0, 0.0] {
            assert_eq!(project_corpus(c, 10, 10.0), 0.0);
            assert_eq!(project_corpus(c, 10, -3.0), 0.0);
        }
    }

    #[test]
    fn test_known_value() {
        // 1000/month for 1 year at 12%: r = 1%, n = 12
        let expected = 1000.0 * ((1.01f64.powi(12) - 1.0) / 0.01) * 1.01;
        assert_relative_eq!(project_corpus(1000.0, 1, 12.0), expected, max_relative = 1e-12);
        assert_relative_eq!(expected, 12_809.33, epsilon = 0.01);
    }

    #[test]
    fn test_zero_rate_is_plain_sum() {
        assert_eq!(project_corpus(500.0, 3, 0.0), 18_000.0);
    }

    #[test]
    fn test_negative_rate_reduces_value() {
        let fv = project_corpus(1000.0, 5, -5.0);
        assert!(fv > 0.0);
        assert!(fv < 60_000.0);
    }

    #[test]
    fn test_monotonic_in_contribution() {
        let mut last = 0.0;
        for step in 0..50 {
            let c = step as f64 * 750.0;
            let fv = project_corpus(c, 12, 10.0);
            assert!(fv >= last, "fv decreased at contribution {}", c);
            last = fv;
        }
    }

    #[test]
    fn test_huge_horizon_saturates() {
        assert!(project_corpus(100.0, i64::MAX / 6, 10.0) > 0.0);
        assert_eq!(project_corpus(1.0, i64::MAX, 0.0), i64::MAX as f64);
        assert!(project_corpus(100.0, i64::MAX, -5.0).is_finite());
    }

    #[test]
    fn test_default_rate_matches_explicit() {
        assert_eq!(
            project_corpus_default(2500.0, 7).to_bits(),
            project_corpus(2500.0, 7, 10.0).to_bits()
        );
    }
}
