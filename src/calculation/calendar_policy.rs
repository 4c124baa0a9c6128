//! Workday classification.
//!
//! This module provides the [`WorkdayCalendar`] trait used by the shift
//! resolver and the earnings calculators, and [`CalendarPolicy`], its
//! implementation over a [`WeeklyMask`] and a [`HolidaySet`].

use chrono::{Datelike, Months, NaiveDate};

use crate::models::{Holiday, HolidaySet, WeeklyMask};

/// How many days [`WorkdayCalendar::next_workday`] scans, counting the start date.
///
/// The bound keeps an all-rest configuration from scanning forever.
pub const NEXT_WORKDAY_SCAN_DAYS: usize = 365;

/// Decides which calendar dates are workdays.
///
/// Implementors provide the holiday lookup and the per-date verdict; the
/// forward scan and range counting are shared.
pub trait WorkdayCalendar {
    /// Returns true if `date` is a legal holiday.
    fn is_legal_holiday(&self, date: NaiveDate) -> bool;

    /// Returns true if `date` is a scheduled workday.
    fn is_workday(&self, date: NaiveDate) -> bool;

    /// Finds the first workday on or after `from`.
    ///
    /// The scan is inclusive of `from` and covers at most
    /// [`NEXT_WORKDAY_SCAN_DAYS`] days. `None` means no workday was found
    /// within that bound.
    fn next_workday(&self, from: NaiveDate) -> Option<NaiveDate> {
        from.iter_days()
            .take(NEXT_WORKDAY_SCAN_DAYS)
            .find(|date| self.is_workday(*date))
    }

    /// Counts workdays in the inclusive range `first..=last`.
    ///
    /// An empty range (`first > last`) has no workdays.
    fn count_workdays(&self, first: NaiveDate, last: NaiveDate) -> u32 {
        if first > last {
            return 0;
        }
        first
            .iter_days()
            .take_while(|date| *date <= last)
            .filter(|date| self.is_workday(*date))
            .count() as u32
    }
}

/// Returns the first and last day of the month containing `date`.
///
/// # Example
///
/// ```
/// use paytimer_engine::calculation::month_bounds;
/// use chrono::NaiveDate;
///
/// let (first, last) = month_bounds(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
/// assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
/// assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX);
    (first, last)
}

/// The worker's calendar: a weekly mask overridden by legal holidays.
///
/// A legal holiday is never a workday, whatever the mask says for its
/// weekday. Every other date follows the mask.
///
/// # Example
///
/// ```
/// use paytimer_engine::calculation::{CalendarPolicy, WorkdayCalendar};
/// use paytimer_engine::models::{Holiday, HolidaySet, WeeklyMask};
/// use chrono::NaiveDate;
///
/// // 2026-01-14 is a Wednesday
/// let wednesday = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// let mut policy = CalendarPolicy::new(WeeklyMask::default(), HolidaySet::new());
/// assert!(policy.is_workday(wednesday));
///
/// policy.add_holiday(Holiday::named(wednesday, "Company Day"));
/// assert!(!policy.is_workday(wednesday));
/// assert_eq!(
///     policy.next_workday(wednesday),
///     NaiveDate::from_ymd_opt(2026, 1, 15)
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarPolicy {
    weekly_mask: WeeklyMask,
    holidays: HolidaySet,
}

impl CalendarPolicy {
    /// Creates a policy from a weekly mask and a holiday set.
    pub fn new(weekly_mask: WeeklyMask, holidays: HolidaySet) -> Self {
        Self {
            weekly_mask,
            holidays,
        }
    }

    /// Returns the weekly mask.
    pub fn weekly_mask(&self) -> &WeeklyMask {
        &self.weekly_mask
    }

    /// Returns the holiday set.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Replaces the weekly mask wholesale.
    pub fn set_weekly_mask(&mut self, weekly_mask: WeeklyMask) {
        self.weekly_mask = weekly_mask;
    }

    /// Adds a legal holiday, returning the entry it replaced on the same date.
    pub fn add_holiday(&mut self, holiday: Holiday) -> Option<Holiday> {
        self.holidays.add(holiday)
    }

    /// Removes the legal holiday on `date`, returning it if present.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> Option<Holiday> {
        self.holidays.remove(date)
    }

    /// Returns the display name of the holiday on `date`, if any.
    pub fn holiday_name(&self, date: NaiveDate) -> Option<&str> {
        self.holidays.name(date)
    }

    /// Evaluates `date` against an alternative weekly mask, keeping this
    /// policy's holidays.
    pub fn is_workday_with(&self, date: NaiveDate, weekly_mask: &WeeklyMask) -> bool {
        !self.is_legal_holiday(date) && weekly_mask.is_work_day(date.weekday())
    }
}

impl WorkdayCalendar for CalendarPolicy {
    fn is_legal_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(date)
    }

    fn is_workday(&self, date: NaiveDate) -> bool {
        self.is_workday_with(date, &self.weekly_mask)
    }
}
