//! Month-to-date accrual.
//!
//! Every workday of the current month that ended before today is credited at
//! the full daily rate; today contributes its partial accrual. Days before
//! the employment start date are never credited.

use chrono::{Datelike, NaiveDateTime};
use rust_decimal::Decimal;

use crate::models::{SalaryProfile, ShiftWindow};

use super::calendar_policy::WorkdayCalendar;
use super::daily_rate::daily_rate;
use super::today_earnings::today_earnings_so_far;

/// Computes month-to-date earnings at `now`.
///
/// The daily rate is derived from the salary and the workdays of `now`'s
/// month. Callers that keep a cached rate should use
/// [`month_earnings_with_rate`] instead.
///
/// # Example
///
/// ```
/// use paytimer_engine::calculation::{CalendarPolicy, month_earnings_so_far};
/// use paytimer_engine::models::{HolidaySet, SalaryProfile, ShiftWindow, WeeklyMask};
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let policy = CalendarPolicy::new(WeeklyMask::default(), HolidaySet::new());
/// let profile = SalaryProfile::new(
///     Decimal::new(11000, 0), // 500 per day in January 2026
///     NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
/// ).unwrap();
///
/// // Thursday 2026-01-15: ten completed workdays, a quarter of today
/// let now = NaiveDateTime::parse_from_str("2026-01-15 11:15:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let earned = month_earnings_so_far(now, &policy, &profile, &ShiftWindow::default());
/// assert_eq!(earned, Decimal::new(5125, 0));
/// ```
pub fn month_earnings_so_far<C>(
    now: NaiveDateTime,
    calendar: &C,
    profile: &SalaryProfile,
    window: &ShiftWindow,
) -> Decimal
where
    C: WorkdayCalendar + ?Sized,
{
    let rate = daily_rate(profile.monthly_salary, now.date(), calendar);
    month_earnings_with_rate(now, calendar, profile, window, rate)
}

/// Computes month-to-date earnings using a precomputed daily rate.
///
/// # Arguments
///
/// * `now` - The current local time
/// * `calendar` - Decides which days are workdays
/// * `profile` - Supplies the employment start date
/// * `window` - The daily shift window, for today's partial accrual
/// * `daily_rate` - The daily rate for `now`'s month
///
/// # Returns
///
/// `completed_workdays * daily_rate + today`, where completed workdays run
/// from the later of the 1st of the month and the employment start date up
/// to, but excluding, today. Zero if employment starts after today.
/// Saturates at [`Decimal::MAX`].
pub fn month_earnings_with_rate<C>(
    now: NaiveDateTime,
    calendar: &C,
    profile: &SalaryProfile,
    window: &ShiftWindow,
    daily_rate: Decimal,
) -> Decimal
where
    C: WorkdayCalendar + ?Sized,
{
    let today = now.date();
    if daily_rate <= Decimal::ZERO || !profile.is_employed_on(today) {
        return Decimal::ZERO;
    }

    let first_of_month = today.with_day(1).unwrap_or(today);
    let first_credited = first_of_month.max(profile.employment_start_date);
    let completed = match today.pred_opt() {
        Some(yesterday) => calendar.count_workdays(first_credited, yesterday),
        None => 0,
    };

    let today_amount = today_earnings_so_far(now, window, calendar.is_workday(today), daily_rate);

    daily_rate
        .saturating_mul(Decimal::from(completed))
        .saturating_add(today_amount)
}
