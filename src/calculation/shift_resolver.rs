//! Countdown target resolution.
//!
//! This module determines, for a caller-supplied `now`, the next schedule
//! boundary (today's shift start, today's shift end, or the next workday's
//! shift start) and the [`ShiftState`] describing where `now` falls.

use chrono::NaiveDateTime;

use crate::error::EngineResult;
use crate::models::{CountdownState, ShiftState, ShiftWindow};

use super::calendar_policy::WorkdayCalendar;

/// Resolves the countdown state at `now`.
///
/// On a workday, `now` before the shift start targets the start
/// ([`ShiftState::BeforeShift`]), `now` within `[start, end)` targets the end
/// ([`ShiftState::DuringShift`]), and `now` at or after the end targets the
/// next workday's start ([`ShiftState::AfterShiftNextWorkday`]). On a rest
/// day the target is the next workday's start
/// ([`ShiftState::RestDayNextWorkday`]).
///
/// The next-workday search starts from tomorrow, because the calendar scan is
/// inclusive of its start date. When no workday is found the state is
/// [`ShiftState::AfterShiftNoMoreWorkdays`] and the target is `now`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidShiftWindow`](crate::error::EngineError::InvalidShiftWindow)
/// if the window does not start before it ends.
///
/// # Example
///
/// ```
/// use paytimer_engine::calculation::{CalendarPolicy, resolve_countdown};
/// use paytimer_engine::models::{HolidaySet, ShiftState, ShiftWindow, WeeklyMask};
/// use chrono::NaiveDateTime;
///
/// let policy = CalendarPolicy::new(WeeklyMask::default(), HolidaySet::new());
/// // 2026-01-14 is a Wednesday
/// let now = NaiveDateTime::parse_from_str("2026-01-14 13:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let countdown = resolve_countdown(now, &ShiftWindow::default(), &policy).unwrap();
/// assert_eq!(countdown.state, ShiftState::DuringShift);
/// assert_eq!(countdown.hours_remaining, 4);
/// assert_eq!(countdown.minutes_remaining, 30);
/// ```
pub fn resolve_countdown<C>(
    now: NaiveDateTime,
    window: &ShiftWindow,
    calendar: &C,
) -> EngineResult<CountdownState>
where
    C: WorkdayCalendar + ?Sized,
{
    window.validate()?;

    let today = now.date();
    let shift_start = window.start_on(today);
    let shift_end = window.end_on(today);

    let (state, target) = if calendar.is_workday(today) {
        if now < shift_start {
            (ShiftState::BeforeShift, shift_start)
        } else if now < shift_end {
            (ShiftState::DuringShift, shift_end)
        } else {
            after_today(now, window, calendar, ShiftState::AfterShiftNextWorkday)
        }
    } else {
        after_today(now, window, calendar, ShiftState::RestDayNextWorkday)
    };

    Ok(CountdownState::new(state, target, now))
}

/// Targets the first workday after today, or `now` if there is none.
fn after_today<C>(
    now: NaiveDateTime,
    window: &ShiftWindow,
    calendar: &C,
    found: ShiftState,
) -> (ShiftState, NaiveDateTime)
where
    C: WorkdayCalendar + ?Sized,
{
    match now
        .date()
        .succ_opt()
        .and_then(|tomorrow| calendar.next_workday(tomorrow))
    {
        Some(next) => (found, window.start_on(next)),
        None => (ShiftState::AfterShiftNoMoreWorkdays, now),
    }
}
