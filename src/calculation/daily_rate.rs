//! Daily rate derivation and caching.
//!
//! The daily rate is the monthly salary spread evenly over the workdays of
//! the reference month. Counting those workdays walks every day of the
//! month, so [`DailyRateCache`] keeps the last result until the month or the
//! salary changes, or until it is explicitly invalidated.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use super::calendar_policy::{WorkdayCalendar, month_bounds};

/// Counts the workdays in the calendar month containing `reference_date`.
pub fn workdays_in_month<C>(reference_date: NaiveDate, calendar: &C) -> u32
where
    C: WorkdayCalendar + ?Sized,
{
    let (first, last) = month_bounds(reference_date);
    calendar.count_workdays(first, last)
}

/// Computes the daily rate for the month containing `reference_date`.
///
/// Returns zero when the month has no workdays or the salary is not
/// positive; there is no division by zero.
///
/// # Example
///
/// ```
/// use paytimer_engine::calculation::{CalendarPolicy, daily_rate};
/// use paytimer_engine::models::{HolidaySet, WeeklyMask};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = CalendarPolicy::new(WeeklyMask::default(), HolidaySet::new());
/// // January 2026 has 22 weekdays
/// let date = NaiveDate::from_ymd_opt(2026, 1, 14).unwrap();
/// assert_eq!(daily_rate(Decimal::new(11000, 0), date, &policy), Decimal::new(500, 0));
///
/// let no_work = CalendarPolicy::new(WeeklyMask::all_rest(), HolidaySet::new());
/// assert_eq!(daily_rate(Decimal::new(11000, 0), date, &no_work), Decimal::ZERO);
/// ```
pub fn daily_rate<C>(monthly_salary: Decimal, reference_date: NaiveDate, calendar: &C) -> Decimal
where
    C: WorkdayCalendar + ?Sized,
{
    if monthly_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    match workdays_in_month(reference_date, calendar) {
        0 => Decimal::ZERO,
        workdays => monthly_salary / Decimal::from(workdays),
    }
}

/// Cached daily rate, keyed by month and salary.
///
/// The owner must call [`DailyRateCache::invalidate`] whenever the weekly
/// mask or the holiday set changes; month roll-over and salary changes are
/// detected from the key.
#[derive(Debug, Clone, Default)]
pub struct DailyRateCache {
    entry: Option<CachedRate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CachedRate {
    year: i32,
    month: u32,
    monthly_salary: Decimal,
    rate: Decimal,
}

impl DailyRateCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the daily rate for the month of `reference_date`, computing it
    /// only when the cached entry is missing or stale.
    pub fn get_or_compute<C>(
        &mut self,
        monthly_salary: Decimal,
        reference_date: NaiveDate,
        calendar: &C,
    ) -> Decimal
    where
        C: WorkdayCalendar + ?Sized,
    {
        let (year, month) = (reference_date.year(), reference_date.month());

        if let Some(cached) = self.entry {
            if cached.year == year && cached.month == month && cached.monthly_salary == monthly_salary
            {
                return cached.rate;
            }
        }

        let rate = daily_rate(monthly_salary, reference_date, calendar);
        debug!(year, month, %monthly_salary, %rate, "Recomputed daily rate");

        self.entry = Some(CachedRate {
            year,
            month,
            monthly_salary,
            rate,
        });
        rate
    }

    /// Drops the cached rate.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// Returns true if a rate is cached.
    pub fn is_populated(&self) -> bool {
        self.entry.is_some()
    }
}
