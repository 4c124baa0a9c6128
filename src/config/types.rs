//! Settings types.
//!
//! [`SettingsSnapshot`] is the raw configuration supplied by a settings
//! collaborator (a YAML file, a JSON request body). It is not trusted:
//! [`SettingsSnapshot::validate`] and the typed accessors turn it into the
//! checked models the engine works with.

use chrono::{NaiveDate, NaiveTime, Timelike};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Holiday, HolidaySet, SalaryProfile, ShiftWindow, WeeklyMask};

/// An immutable view of the worker's settings.
///
/// # Example
///
/// ```
/// use paytimer_engine::config::SettingsSnapshot;
///
/// let yaml = r#"
/// monthly_salary: "15000"
/// shift_start: "09:30:00"
/// shift_end: "18:30:00"
/// weekly_mask: [true, true, true, true, true, false, false]
/// employment_start_date: 2024-03-01
/// holidays:
///   - date: 2025-10-01
///     name: National Day
/// "#;
///
/// let settings: SettingsSnapshot = serde_yaml::from_str(yaml).unwrap();
/// assert!(settings.validate().is_ok());
/// assert_eq!(settings.holiday_set().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SettingsSnapshot {
    /// The gross monthly salary.
    #[serde(default = "default_monthly_salary")]
    pub monthly_salary: Decimal,
    /// Daily shift start (wall-clock).
    #[serde(default = "default_shift_start")]
    pub shift_start: NaiveTime,
    /// Daily shift end (wall-clock).
    #[serde(default = "default_shift_end")]
    pub shift_end: NaiveTime,
    /// Work-day flags, Monday first. Must have seven entries.
    #[serde(default = "default_weekly_mask")]
    pub weekly_mask: Vec<bool>,
    /// The first day of employment.
    pub employment_start_date: NaiveDate,
    /// Legal holidays overriding the weekly mask.
    #[serde(default)]
    pub holidays: Vec<Holiday>,
}

fn default_monthly_salary() -> Decimal {
    Decimal::new(10000, 0)
}

fn default_shift_start() -> NaiveTime {
    ShiftWindow::default().start
}

fn default_shift_end() -> NaiveTime {
    ShiftWindow::default().end
}

fn default_weekly_mask() -> Vec<bool> {
    WeeklyMask::default().into()
}

fn to_minute(time: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time)
}

impl SettingsSnapshot {
    /// Creates settings with default salary, shift and mask for a worker who
    /// started on `employment_start_date`.
    pub fn new(employment_start_date: NaiveDate) -> Self {
        Self {
            monthly_salary: default_monthly_salary(),
            shift_start: default_shift_start(),
            shift_end: default_shift_end(),
            weekly_mask: default_weekly_mask(),
            employment_start_date,
            holidays: Vec::new(),
        }
    }

    /// Checks every configuration invariant.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidShiftWindow`](crate::error::EngineError::InvalidShiftWindow)
    ///   if the shift does not start before it ends
    /// - [`EngineError::InvalidWeeklyMask`](crate::error::EngineError::InvalidWeeklyMask)
    ///   if the mask does not have seven entries
    /// - [`EngineError::InvalidSalary`](crate::error::EngineError::InvalidSalary)
    ///   if the salary is negative
    pub fn validate(&self) -> EngineResult<()> {
        self.shift_window()?;
        self.weekly_mask()?;
        self.salary_profile()?;
        Ok(())
    }

    /// Returns the checked shift window.
    ///
    /// Shift times are whole minutes of the day: seconds and fractions in
    /// the settings are dropped before the window is validated.
    pub fn shift_window(&self) -> EngineResult<ShiftWindow> {
        ShiftWindow::new(to_minute(self.shift_start), to_minute(self.shift_end))
    }

    /// Returns the checked weekly mask.
    pub fn weekly_mask(&self) -> EngineResult<WeeklyMask> {
        WeeklyMask::from_slice(&self.weekly_mask)
    }

    /// Returns the checked salary profile.
    pub fn salary_profile(&self) -> EngineResult<SalaryProfile> {
        SalaryProfile::new(self.monthly_salary, self.employment_start_date)
    }

    /// Returns the holidays as a set; later entries for a date win.
    pub fn holiday_set(&self) -> HolidaySet {
        self.holidays.iter().cloned().collect()
    }
}
