//! Same-day accrual.
//!
//! Earnings are spread evenly across the shift: the fraction of the daily
//! rate earned is the fraction of the shift that has elapsed.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

use crate::models::ShiftWindow;

/// Computes how much of today's daily rate has been earned at `now`.
///
/// # Arguments
///
/// * `now` - The current local time; its date is "today"
/// * `window` - The daily shift window
/// * `is_today_workday` - Whether today is a workday per the calendar
/// * `daily_rate` - The daily rate for the current month
///
/// # Returns
///
/// - zero if today is not a workday, the rate is not positive, or the window
///   is invalid
/// - zero before the shift starts
/// - the full `daily_rate` at or after the shift end
/// - otherwise `daily_rate * elapsed_seconds / shift_seconds`
///
/// # Example
///
/// ```
/// use paytimer_engine::calculation::today_earnings_so_far;
/// use paytimer_engine::models::ShiftWindow;
/// use chrono::NaiveDateTime;
/// use rust_decimal::Decimal;
///
/// let now = NaiveDateTime::parse_from_str("2026-01-14 13:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let earned = today_earnings_so_far(now, &ShiftWindow::default(), true, Decimal::new(500, 0));
/// assert_eq!(earned, Decimal::new(250, 0));
/// ```
pub fn today_earnings_so_far(
    now: NaiveDateTime,
    window: &ShiftWindow,
    is_today_workday: bool,
    daily_rate: Decimal,
) -> Decimal {
    if !is_today_workday || daily_rate <= Decimal::ZERO || !window.is_valid() {
        return Decimal::ZERO;
    }

    let today = now.date();
    let shift_start = window.start_on(today);
    let shift_end = window.end_on(today);

    if now < shift_start {
        return Decimal::ZERO;
    }
    if now >= shift_end {
        return daily_rate;
    }

    let elapsed = Decimal::from((now - shift_start).num_milliseconds());
    let total = Decimal::from((shift_end - shift_start).num_milliseconds());

    // Multiplying first keeps the result exact; very large rates overflow
    // the mantissa and fall back to scaling by the elapsed fraction.
    match daily_rate.checked_mul(elapsed) {
        Some(scaled) => scaled / total,
        None => daily_rate * (elapsed / total),
    }
}
