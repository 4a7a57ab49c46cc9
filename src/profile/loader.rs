//! Load profiles and goals from CSV

use super::{Goal, Profile};
use crate::error::Result;
use csv::Reader;
use std::path::Path;

/// Raw CSV row of a profiles file
#[derive(Debug, serde::Deserialize)]
struct ProfileRow {
    #[serde(rename = "ProfileID", default)]
    profile_id: Option<String>,
    #[serde(rename = "Age")]
    age: u8,
    #[serde(rename = "AnnualIncome")]
    annual_income: f64,
    #[serde(rename = "MonthlyExpenses")]
    monthly_expenses: f64,
    #[serde(rename = "RiskAppetite")]
    risk_appetite: String,
    #[serde(rename = "TotalAssets")]
    total_assets: f64,
    #[serde(rename = "TotalLoans")]
    total_loans: f64,
}

impl ProfileRow {
    fn into_record(self, line: usize) -> Result<ProfileRecord> {
        let profile = Profile::new(
            self.age,
            self.annual_income,
            self.monthly_expenses,
            self.risk_appetite.parse()?,
            self.total_assets,
            self.total_loans,
        );
        profile.validate()?;

        Ok(ProfileRecord {
            id: self.profile_id.unwrap_or_else(|| line.to_string()),
            profile,
        })
    }
}

/// Raw CSV row of a goals file
#[derive(Debug, serde::Deserialize)]
struct GoalRow {
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "TargetAmount")]
    target_amount: f64,
    #[serde(rename = "HorizonYears")]
    horizon_years: u32,
}

/// A profile tagged with the identifier it was loaded under
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProfileRecord {
    /// `ProfileID` column, or the 1-based data row number when absent
    pub id: String,
    pub profile: Profile,
}

/// Load all profiles from a CSV file
pub fn load_profiles<P: AsRef<Path>>(path: P) -> Result<Vec<ProfileRecord>> {
    let reader = Reader::from_path(path.as_ref())?;
    let records = read_profiles(reader)?;
    log::info!("Loaded {} profiles from {}", records.len(), path.as_ref().display());
    Ok(records)
}

/// Load profiles from any reader (e.g., string buffer, stdin)
pub fn load_profiles_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<ProfileRecord>> {
    read_profiles(Reader::from_reader(reader))
}

fn read_profiles<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<ProfileRecord>> {
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize().enumerate() {
        let row: ProfileRow = result?;
        records.push(row.into_record(idx + 1)?);
    }

    Ok(records)
}

/// Load goals from a CSV file, validating each one
pub fn load_goals<P: AsRef<Path>>(path: P) -> Result<Vec<Goal>> {
    let reader = Reader::from_path(path.as_ref())?;
    let goals = read_goals(reader)?;
    log::info!("Loaded {} goals from {}", goals.len(), path.as_ref().display());
    Ok(goals)
}

/// Load goals from any reader
pub fn load_goals_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Goal>> {
    read_goals(Reader::from_reader(reader))
}

fn read_goals<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Goal>> {
    let mut goals = Vec::new();

    for result in reader.deserialize() {
        let row: GoalRow = result?;
        let goal = Goal::new(row.name, row.target_amount, row.horizon_years);
        goal.validate()?;
        goals.push(goal);
    }

    Ok(goals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisorError;
    use crate::profile::RiskAppetite;

    #[test]
    fn test_load_profiles_from_reader() {
        let data = "\
ProfileID,Age,AnnualIncome,MonthlyExpenses,RiskAppetite,TotalAssets,TotalLoans
alice,30,1200000,20000,Aggressive,500000,0
bob,65,600000,30000,conservative,2000000,100000
";
        let records = load_profiles_from_reader(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "alice");
        assert_eq!(records[0].profile.risk_appetite, RiskAppetite::Aggressive);
        assert_eq!(records[1].profile.age, 65);
        assert_eq!(records[1].profile.risk_appetite, RiskAppetite::Conservative);
    }

    #[test]
    fn test_profile_id_defaults_to_row_number() {
        let data = "\
Age,AnnualIncome,MonthlyExpenses,RiskAppetite,TotalAssets,TotalLoans
30,1000000,20000,Moderate,500000,0
40,900000,25000,Moderate,100000,50000
";
        let records = load_profiles_from_reader(data.as_bytes()).unwrap();
        assert_eq!(records[0].id, "1");
        assert_eq!(records[1].id, "2");
    }

    #[test]
    fn test_unknown_risk_tier_is_rejected() {
        let data = "\
Age,AnnualIncome,MonthlyExpenses,RiskAppetite,TotalAssets,TotalLoans
30,1000000,20000,Yolo,500000,0
";
        let err = load_profiles_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, AdvisorError::UnknownRiskAppetite(_)));
    }

    #[test]
    fn test_load_goals_from_reader() {
        let data = "\
Name,TargetAmount,HorizonYears
Retirement,50000000,25
Car,800000,3
";
        let goals = load_goals_from_reader(data.as_bytes()).unwrap();
        assert_eq!(goals.len(), 2);
        assert_eq!(goals[0].name, "Retirement");
        assert_eq!(goals[1].horizon_years, 3);

        let bad = "Name,TargetAmount,HorizonYears\nCar,800000,0\n";
        assert!(matches!(
            load_goals_from_reader(bad.as_bytes()),
            Err(AdvisorError::InvalidGoal(_))
        ));
    }

    #[test]
    fn test_load_sample_files() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/samples");

        let records = load_profiles(dir.join("profiles.csv")).expect("Failed to load profiles");
        assert_eq!(records.len(), 4);
        assert_eq!(records[2].id, "pre-retiree");
        assert_eq!(records[2].profile.risk_appetite, RiskAppetite::Conservative);

        let goals = load_goals(dir.join("goals.csv")).expect("Failed to load goals");
        assert_eq!(goals.len(), 3);
        assert_eq!(goals[2].horizon_years, 25);
    }
}
