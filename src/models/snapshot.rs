//! Engine output models.
//!
//! This module contains the [`CountdownState`] produced by the shift resolver
//! and the [`EarningsSnapshot`] produced by the earnings calculator. Both are
//! recomputed on every call and never persisted by the engine.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const SECONDS_PER_DAY: u64 = 86_400;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_MINUTE: u64 = 60;

/// Where "now" falls relative to the work schedule.
///
/// # Example
///
/// ```
/// use paytimer_engine::models::ShiftState;
///
/// let state = ShiftState::DuringShift;
/// assert_eq!(state.to_string(), "During shift");
/// assert!(state.is_working());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShiftState {
    /// Today is a workday and the shift has not started; target is today's start.
    BeforeShift,
    /// Inside today's shift; target is today's end.
    DuringShift,
    /// No workday found within the scan bound; target is "now".
    AfterShiftNoMoreWorkdays,
    /// Today's shift is over; target is the next workday's start.
    AfterShiftNextWorkday,
    /// Today is a rest day; target is the next workday's start.
    RestDayNextWorkday,
}

impl ShiftState {
    /// Returns true while a shift is in progress.
    pub fn is_working(&self) -> bool {
        matches!(self, ShiftState::DuringShift)
    }
}

impl std::fmt::Display for ShiftState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftState::BeforeShift => write!(f, "Before shift"),
            ShiftState::DuringShift => write!(f, "During shift"),
            ShiftState::AfterShiftNoMoreWorkdays => write!(f, "No upcoming workday"),
            ShiftState::AfterShiftNextWorkday => write!(f, "After shift"),
            ShiftState::RestDayNextWorkday => write!(f, "Rest day"),
        }
    }
}

/// The countdown to the next schedule boundary.
///
/// The remaining time is never negative. Once `target` has passed the state is
/// stale: the caller must resolve again to obtain the next target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountdownState {
    /// The schedule state at the time of resolution.
    pub state: ShiftState,
    /// The instant being counted down to.
    pub target: NaiveDateTime,
    /// Whole days remaining.
    pub days_remaining: u64,
    /// Hours remaining after whole days (0-23).
    pub hours_remaining: u64,
    /// Minutes remaining after whole hours (0-59).
    pub minutes_remaining: u64,
    /// Seconds remaining after whole minutes (0-59), truncated.
    pub seconds_remaining: u64,
}

impl CountdownState {
    /// Builds a countdown from `now` to `target`.
    ///
    /// A target in the past yields a zero countdown. Sub-second remainders are
    /// truncated, not rounded.
    ///
    /// # Example
    ///
    /// ```
    /// use paytimer_engine::models::{CountdownState, ShiftState};
    /// use chrono::NaiveDateTime;
    ///
    /// let now = NaiveDateTime::parse_from_str("2026-01-17 10:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    /// let target = NaiveDateTime::parse_from_str("2026-01-19 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
    ///
    /// let countdown = CountdownState::new(ShiftState::RestDayNextWorkday, target, now);
    /// assert_eq!(countdown.days_remaining, 1);
    /// assert_eq!(countdown.hours_remaining, 23);
    /// assert_eq!(countdown.minutes_remaining, 0);
    /// ```
    pub fn new(state: ShiftState, target: NaiveDateTime, now: NaiveDateTime) -> Self {
        let total = u64::try_from((target - now).num_seconds()).unwrap_or(0);
        Self {
            state,
            target,
            days_remaining: total / SECONDS_PER_DAY,
            hours_remaining: (total % SECONDS_PER_DAY) / SECONDS_PER_HOUR,
            minutes_remaining: (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE,
            seconds_remaining: total % SECONDS_PER_MINUTE,
        }
    }

    /// The remaining duration in whole seconds.
    pub fn total_seconds_remaining(&self) -> u64 {
        self.days_remaining * SECONDS_PER_DAY
            + self.hours_remaining * SECONDS_PER_HOUR
            + self.minutes_remaining * SECONDS_PER_MINUTE
            + self.seconds_remaining
    }

    /// Returns true if `now` is at or past the target.
    pub fn is_target_reached(&self, now: NaiveDateTime) -> bool {
        now >= self.target
    }
}

/// Earnings accrued so far for the current day, month and year.
///
/// Amounts are full-precision and never negative. Formatting, rounding for
/// display and hiding amounts are presentation concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EarningsSnapshot {
    /// Earned so far today.
    pub today: Decimal,
    /// Earned so far this calendar month, including today.
    pub month: Decimal,
    /// Earned so far this calendar year.
    pub year: Decimal,
}
