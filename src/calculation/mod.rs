//! Calculation logic for the Paytimer engine.
//!
//! This module contains the calendar policy that classifies dates as
//! workdays, the shift resolver that finds the next schedule boundary, and
//! the earnings calculators for today, month-to-date and year-to-date
//! accrual, along with the cached daily rate they share.

mod calendar_policy;
mod daily_rate;
mod month_earnings;
mod shift_resolver;
mod today_earnings;
mod year_earnings;

pub use calendar_policy::{CalendarPolicy, NEXT_WORKDAY_SCAN_DAYS, WorkdayCalendar, month_bounds};
pub use daily_rate::{DailyRateCache, daily_rate, workdays_in_month};
pub use month_earnings::{month_earnings_so_far, month_earnings_with_rate};
pub use shift_resolver::resolve_countdown;
pub use today_earnings::today_earnings_so_far;
pub use year_earnings::year_earnings_so_far;
