//! Daily shift window.
//!
//! A [`ShiftWindow`] is a pair of wall-clock times. It is not tied to any
//! particular date: [`ShiftWindow::start_on`] and [`ShiftWindow::end_on`]
//! anchor it to a local calendar day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The daily paid period, from `start` to `end` on the same local day.
///
/// The fields are public so that settings can carry an unchecked window;
/// every engine operation calls [`ShiftWindow::validate`] (or applies the
/// zero-earnings guard) before using it. Windows read from settings are
/// truncated to whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Start of the shift (e.g., 09:00).
    pub start: NaiveTime,
    /// End of the shift (e.g., 18:00).
    pub end: NaiveTime,
}

impl ShiftWindow {
    /// Creates a shift window, rejecting one that does not start before it ends.
    ///
    /// # Examples
    ///
    /// ```
    /// use paytimer_engine::models::ShiftWindow;
    /// use chrono::NaiveTime;
    ///
    /// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let six = NaiveTime::from_hms_opt(18, 0, 0).unwrap();
    ///
    /// let window = ShiftWindow::new(nine, six).unwrap();
    /// assert_eq!(window.duration_seconds(), 9 * 3600);
    ///
    /// assert!(ShiftWindow::new(six, nine).is_err());
    /// ```
    pub fn new(start: NaiveTime, end: NaiveTime) -> EngineResult<Self> {
        let window = Self { start, end };
        window.validate()?;
        Ok(window)
    }

    /// Checks that the window starts strictly before it ends.
    pub fn validate(&self) -> EngineResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(EngineError::InvalidShiftWindow {
                start: self.start,
                end: self.end,
            })
        }
    }

    /// Returns true if the window starts strictly before it ends.
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// The shift start on the given day.
    pub fn start_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.start)
    }

    /// The shift end on the given day.
    pub fn end_on(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(self.end)
    }

    /// Length of the shift in seconds. Zero or negative for an invalid window.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

impl Default for ShiftWindow {
    /// 09:00 to 18:00.
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(9, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(18, 0, 0).unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_default_is_nine_to_six() {
        let window = ShiftWindow::default();
        assert_eq!(window.start, make_time("09:00:00"));
        assert_eq!(window.end, make_time("18:00:00"));
        assert!(window.is_valid());
    }

    #[test]
    fn test_anchors_to_given_day() {
        let window = ShiftWindow::default();
        let date = make_date("2026-01-14");

        assert_eq!(
            window.start_on(date),
            NaiveDateTime::parse_from_str("2026-01-14 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
        );
        assert_eq!(
            window.end_on(date),
            NaiveDateTime::parse_from_str("2026-01-14 18:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
        );
    }

    #[test]
    fn test_equal_start_and_end_is_invalid() {
        let window = ShiftWindow {
            start: make_time("09:00:00"),
            end: make_time("09:00:00"),
        };
        assert!(!window.is_valid());
        assert_eq!(window.duration_seconds(), 0);

        match window.validate() {
            Err(EngineError::InvalidShiftWindow { start, end }) => {
                assert_eq!(start, make_time("09:00:00"));
                assert_eq!(end, make_time("09:00:00"));
            }
            other => panic!("Expected InvalidShiftWindow, got {:?}", other),
        }
    }

    #[test]
    fn test_reversed_window_is_rejected() {
        let result = ShiftWindow::new(make_time("22:00:00"), make_time("06:00:00"));
        assert!(result.is_err());
    }

    #[test]
    fn test_duration_with_minutes() {
        let window = ShiftWindow::new(make_time("08:30:00"), make_time("17:15:00")).unwrap();
        assert_eq!(window.duration_seconds(), 8 * 3600 + 45 * 60);
    }

    #[test]
    fn test_shift_window_deserialization() {
        let json = r#"{"start": "09:30:00", "end": "18:30:00"}"#;
        let window: ShiftWindow = serde_json::from_str(json).unwrap();
        assert_eq!(window.start, make_time("09:30:00"));
        assert_eq!(window.end, make_time("18:30:00"));
    }
}
