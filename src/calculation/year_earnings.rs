//! Year-to-date accrual.
//!
//! Each month of the current year is clipped to the credited range, from the
//! later of January 1 and the employment start date through today. A month
//! contributes its own daily rate (salary over the workdays of the full
//! month) for every workday inside the clipped range, which prorates the
//! joining month and the current month and fully credits the months between.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::calendar_policy::{WorkdayCalendar, month_bounds};

/// Computes year-to-date earnings at `now`.
///
/// Today is included in the credited range as a whole day. An employment
/// start date after today, or in a later year, yields zero. The total
/// saturates at [`Decimal::MAX`].
///
/// # Arguments
///
/// * `now` - The current local time
/// * `join_date` - The employment start date
/// * `monthly_salary` - The gross monthly salary
/// * `calendar` - Decides which days are workdays
///
/// # Example
///
/// ```
/// use paytimer_engine::calculation::{CalendarPolicy, year_earnings_so_far};
/// use paytimer_engine::models::{HolidaySet, WeeklyMask};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let policy = CalendarPolicy::new(WeeklyMask::default(), HolidaySet::new());
/// let joined = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
/// // Friday 2026-01-30: every workday of January 2026 is in range
/// let now = NaiveDateTime::parse_from_str("2026-01-30 20:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let earned = year_earnings_so_far(now, joined, Decimal::new(11000, 0), &policy);
/// assert_eq!(earned, Decimal::new(11000, 0));
/// ```
pub fn year_earnings_so_far<C>(
    now: NaiveDateTime,
    join_date: NaiveDate,
    monthly_salary: Decimal,
    calendar: &C,
) -> Decimal
where
    C: WorkdayCalendar + ?Sized,
{
    if monthly_salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let today = now.date();
    let Some(jan_first) = NaiveDate::from_ymd_opt(today.year(), 1, 1) else {
        return Decimal::ZERO;
    };
    let range_start = join_date.max(jan_first);
    let range_end = today;
    if range_start > range_end {
        return Decimal::ZERO;
    }

    (1..=today.month())
        .filter_map(|month| NaiveDate::from_ymd_opt(today.year(), month, 1))
        .map(|month_first| {
            let (first, last) = month_bounds(month_first);
            let clip_start = first.max(range_start);
            let clip_end = last.min(range_end);
            if clip_start > clip_end {
                return Decimal::ZERO;
            }

            let month_workdays = calendar.count_workdays(first, last);
            if month_workdays == 0 {
                return Decimal::ZERO;
            }
            let credited = calendar.count_workdays(clip_start, clip_end);

            let credited = Decimal::from(credited);
            let month_workdays = Decimal::from(month_workdays);
            match monthly_salary.checked_mul(credited) {
                Some(scaled) => scaled / month_workdays,
                None => (monthly_salary / month_workdays).saturating_mul(credited),
            }
        })
        .fold(Decimal::ZERO, Decimal::saturating_add)
}
