//! Salary profile model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The worker's pay arrangement.
///
/// Earnings never accrue before `employment_start_date`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryProfile {
    /// The gross monthly salary.
    pub monthly_salary: Decimal,
    /// The first day of employment.
    pub employment_start_date: NaiveDate,
}

impl SalaryProfile {
    /// Creates a salary profile, rejecting a negative salary.
    ///
    /// # Examples
    ///
    /// ```
    /// use paytimer_engine::models::SalaryProfile;
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    /// let profile = SalaryProfile::new(Decimal::new(10000, 0), start).unwrap();
    /// assert!(profile.is_employed_on(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()));
    /// assert!(!profile.is_employed_on(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
    ///
    /// assert!(SalaryProfile::new(Decimal::new(-1, 0), start).is_err());
    /// ```
    pub fn new(monthly_salary: Decimal, employment_start_date: NaiveDate) -> EngineResult<Self> {
        let profile = Self {
            monthly_salary,
            employment_start_date,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Checks that the monthly salary is not negative.
    pub fn validate(&self) -> EngineResult<()> {
        if self.monthly_salary < Decimal::ZERO {
            return Err(EngineError::InvalidSalary {
                amount: self.monthly_salary,
            });
        }
        Ok(())
    }

    /// Returns true if `date` is on or after the employment start date.
    pub fn is_employed_on(&self, date: NaiveDate) -> bool {
        date >= self.employment_start_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_zero_salary_is_valid() {
        let profile = SalaryProfile::new(Decimal::ZERO, make_date("2025-01-01"));
        assert!(profile.is_ok());
    }

    #[test]
    fn test_negative_salary_is_rejected() {
        match SalaryProfile::new(dec("-0.01"), make_date("2025-01-01")) {
            Err(EngineError::InvalidSalary { amount }) => assert_eq!(amount, dec("-0.01")),
            other => panic!("Expected InvalidSalary, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_salary_profile() {
        let json = r#"{
            "monthly_salary": "12500.50",
            "employment_start_date": "2023-06-01"
        }"#;

        let profile: SalaryProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.monthly_salary, dec("12500.50"));
        assert_eq!(profile.employment_start_date, make_date("2023-06-01"));
    }

    #[test]
    fn test_is_employed_on_start_date() {
        let profile = SalaryProfile::new(dec("8000"), make_date("2026-03-10")).unwrap();
        assert!(profile.is_employed_on(make_date("2026-03-10")));
        assert!(profile.is_employed_on(make_date("2026-12-31")));
        assert!(!profile.is_employed_on(make_date("2026-03-09")));
    }
}
