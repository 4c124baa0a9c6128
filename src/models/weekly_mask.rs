//! Weekly work-day mask.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Which days of the week are scheduled work days, Monday first.
///
/// Index 0 is Monday and index 6 is Sunday. The mask always has exactly
/// seven entries; a sequence of any other length is rejected with
/// [`EngineError::InvalidWeeklyMask`].
///
/// # Example
///
/// ```
/// use paytimer_engine::models::WeeklyMask;
/// use chrono::Weekday;
///
/// let mask = WeeklyMask::default(); // Monday to Friday
/// assert!(mask.is_work_day(Weekday::Fri));
/// assert!(!mask.is_work_day(Weekday::Sat));
///
/// assert!(WeeklyMask::from_slice(&[true, false]).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<bool>", into = "Vec<bool>")]
pub struct WeeklyMask([bool; 7]);

impl WeeklyMask {
    /// Creates a mask from seven Monday-first flags.
    pub const fn new(days: [bool; 7]) -> Self {
        Self(days)
    }

    /// Creates a mask from a slice, which must hold exactly seven flags.
    pub fn from_slice(days: &[bool]) -> EngineResult<Self> {
        let days: [bool; 7] = days
            .try_into()
            .map_err(|_| EngineError::InvalidWeeklyMask { len: days.len() })?;
        Ok(Self(days))
    }

    /// A mask with no work days at all.
    pub const fn all_rest() -> Self {
        Self([false; 7])
    }

    /// Returns whether the given weekday is a scheduled work day.
    pub fn is_work_day(&self, weekday: Weekday) -> bool {
        self.0[weekday.num_days_from_monday() as usize]
    }

    /// Returns whether the weekday of `date` is a scheduled work day.
    ///
    /// Holidays are not considered here; see
    /// [`CalendarPolicy`](crate::calculation::CalendarPolicy).
    pub fn is_work_date(&self, date: NaiveDate) -> bool {
        self.is_work_day(date.weekday())
    }

    /// Number of scheduled work days per week.
    pub fn work_days_per_week(&self) -> usize {
        self.0.iter().filter(|d| **d).count()
    }

    /// Returns the flags, Monday first.
    pub fn as_array(&self) -> [bool; 7] {
        self.0
    }
}

impl Default for WeeklyMask {
    fn default() -> Self {
        Self([true, true, true, true, true, false, false])
    }
}

impl TryFrom<Vec<bool>> for WeeklyMask {
    type Error = EngineError;

    fn try_from(days: Vec<bool>) -> Result<Self, Self::Error> {
        Self::from_slice(&days)
    }
}

impl From<WeeklyMask> for Vec<bool> {
    fn from(mask: WeeklyMask) -> Self {
        mask.0.to_vec()
    }
}
