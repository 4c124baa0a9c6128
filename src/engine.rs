//! The recompute entry point.
//!
//! [`Engine`] owns the worker's calendar, shift window and salary profile,
//! plus the daily-rate cache. A caller (typically a once-per-second timer)
//! passes in the current local time and gets back a fresh countdown and
//! earnings snapshot; the engine never reads the clock itself.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::calculation::{
    CalendarPolicy, DailyRateCache, WorkdayCalendar, month_earnings_with_rate, resolve_countdown,
    today_earnings_so_far, year_earnings_so_far,
};
use crate::config::SettingsSnapshot;
use crate::error::EngineResult;
use crate::models::{
    CountdownState, EarningsSnapshot, Holiday, SalaryProfile, ShiftWindow, WeeklyMask,
};

/// Computes countdowns and earnings for a single worker.
///
/// Every setter that can change a month's workday count or the salary drops
/// the cached daily rate, so the next call recomputes it.
///
/// # Example
///
/// ```
/// use paytimer_engine::config::SettingsSnapshot;
/// use paytimer_engine::engine::Engine;
/// use paytimer_engine::models::ShiftState;
/// use chrono::{NaiveDate, NaiveDateTime};
/// use rust_decimal::Decimal;
///
/// let mut settings = SettingsSnapshot::new(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
/// settings.monthly_salary = Decimal::new(11000, 0);
/// let mut engine = Engine::from_settings(&settings).unwrap();
///
/// // Wednesday 2026-01-14, halfway through a 09:00-18:00 shift
/// let now = NaiveDateTime::parse_from_str("2026-01-14 13:30:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let (countdown, earnings) = engine.recompute(now).unwrap();
///
/// assert_eq!(countdown.state, ShiftState::DuringShift);
/// assert_eq!(earnings.today, Decimal::new(250, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    policy: CalendarPolicy,
    shift_window: ShiftWindow,
    salary: SalaryProfile,
    rate_cache: DailyRateCache,
}

impl Engine {
    /// Creates an engine from checked parts.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the shift window or the salary
    /// profile is invalid.
    pub fn new(
        policy: CalendarPolicy,
        shift_window: ShiftWindow,
        salary: SalaryProfile,
    ) -> EngineResult<Self> {
        shift_window.validate()?;
        salary.validate()?;

        Ok(Self {
            policy,
            shift_window,
            salary,
            rate_cache: DailyRateCache::new(),
        })
    }

    /// Creates an engine from a settings snapshot.
    ///
    /// # Errors
    ///
    /// Returns the first configuration error found in `settings`.
    pub fn from_settings(settings: &SettingsSnapshot) -> EngineResult<Self> {
        let policy = CalendarPolicy::new(settings.weekly_mask()?, settings.holiday_set());
        let engine = Self::new(policy, settings.shift_window()?, settings.salary_profile()?)?;

        info!(
            monthly_salary = %engine.salary.monthly_salary,
            shift_start = %engine.shift_window.start,
            shift_end = %engine.shift_window.end,
            work_days_per_week = engine.policy.weekly_mask().work_days_per_week(),
            holidays = engine.policy.holidays().len(),
            "Engine configured"
        );

        Ok(engine)
    }

    /// Recomputes the countdown and the earnings snapshot at `now`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidShiftWindow`](crate::error::EngineError::InvalidShiftWindow)
    /// if the shift window is invalid. The engine's setters reject invalid
    /// windows, so this only happens for a window built by hand.
    pub fn recompute(
        &mut self,
        now: NaiveDateTime,
    ) -> EngineResult<(CountdownState, EarningsSnapshot)> {
        let countdown = self.countdown(now)?;
        let earnings = self.earnings(now);

        debug!(
            %now,
            state = %countdown.state,
            target = %countdown.target,
            today = %earnings.today,
            month = %earnings.month,
            year = %earnings.year,
            "Recomputed"
        );

        Ok((countdown, earnings))
    }

    /// Resolves the countdown at `now`.
    pub fn countdown(&self, now: NaiveDateTime) -> EngineResult<CountdownState> {
        resolve_countdown(now, &self.shift_window, &self.policy)
    }

    /// Computes today's, the month's and the year's earnings at `now`.
    ///
    /// Amounts carry full precision; round only for display.
    pub fn earnings(&mut self, now: NaiveDateTime) -> EarningsSnapshot {
        let today = now.date();
        let rate = self.daily_rate(today);

        let today_amount = if self.salary.is_employed_on(today) {
            today_earnings_so_far(now, &self.shift_window, self.policy.is_workday(today), rate)
        } else {
            Decimal::ZERO
        };
        let month = month_earnings_with_rate(now, &self.policy, &self.salary, &self.shift_window, rate);
        let year = year_earnings_so_far(
            now,
            self.salary.employment_start_date,
            self.salary.monthly_salary,
            &self.policy,
        );

        EarningsSnapshot {
            today: today_amount,
            month,
            year,
        }
    }

    /// Returns the daily rate for the month containing `date`, using the cache.
    pub fn daily_rate(&mut self, date: NaiveDate) -> Decimal {
        self.rate_cache
            .get_or_compute(self.salary.monthly_salary, date, &self.policy)
    }

    /// Returns the calendar policy.
    pub fn policy(&self) -> &CalendarPolicy {
        &self.policy
    }

    /// Returns the shift window.
    pub fn shift_window(&self) -> &ShiftWindow {
        &self.shift_window
    }

    /// Returns the salary profile.
    pub fn salary(&self) -> &SalaryProfile {
        &self.salary
    }

    /// Changes the monthly salary.
    ///
    /// # Errors
    ///
    /// Rejects a negative salary and leaves the engine unchanged.
    pub fn set_monthly_salary(&mut self, monthly_salary: Decimal) -> EngineResult<()> {
        self.salary = SalaryProfile::new(monthly_salary, self.salary.employment_start_date)?;
        self.rate_cache.invalidate();
        Ok(())
    }

    /// Changes the employment start date.
    pub fn set_employment_start_date(&mut self, date: NaiveDate) {
        self.salary.employment_start_date = date;
    }

    /// Changes the shift window.
    ///
    /// # Errors
    ///
    /// Rejects a window that does not start before it ends and leaves the
    /// engine unchanged.
    pub fn set_shift_window(&mut self, shift_window: ShiftWindow) -> EngineResult<()> {
        shift_window.validate()?;
        self.shift_window = shift_window;
        Ok(())
    }

    /// Replaces the weekly mask.
    pub fn set_weekly_mask(&mut self, weekly_mask: WeeklyMask) {
        self.policy.set_weekly_mask(weekly_mask);
        self.rate_cache.invalidate();
    }

    /// Adds a legal holiday, returning the entry it replaced.
    pub fn add_holiday(&mut self, holiday: Holiday) -> Option<Holiday> {
        let replaced = self.policy.add_holiday(holiday);
        self.rate_cache.invalidate();
        replaced
    }

    /// Removes the legal holiday on `date`, returning it if present.
    pub fn remove_holiday(&mut self, date: NaiveDate) -> Option<Holiday> {
        let removed = self.policy.remove_holiday(date);
        if removed.is_some() {
            self.rate_cache.invalidate();
        }
        removed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::{HolidaySet, ShiftState};
    use chrono::NaiveTime;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_datetime(date_str: &str, time_str: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(&format!("{} {}", date_str, time_str), "%Y-%m-%d %H:%M:%S")
            .unwrap()
    }

    fn make_engine(salary: &str, start: &str) -> Engine {
        Engine::new(
            CalendarPolicy::new(WeeklyMask::default(), HolidaySet::new()),
            ShiftWindow::default(),
            SalaryProfile::new(dec(salary), make_date(start)).unwrap(),
        )
        .unwrap()
    }

    /// EN-001: mid-month recompute during the shift
    #[test]
    fn test_recompute_during_shift() {
        let mut engine = make_engine("11000", "2020-01-01");
        let now = make_datetime("2026-01-15", "11:15:00");

        let (countdown, earnings) = engine.recompute(now).unwrap();

        assert_eq!(countdown.state, ShiftState::DuringShift);
        assert_eq!(countdown.target, make_datetime("2026-01-15", "18:00:00"));
        assert_eq!(earnings.today, dec("125"));
        assert_eq!(earnings.month, dec("5125"));
        // Year credits today in full: 11 of 22 January workdays
        assert_eq!(earnings.year, dec("5500"));
    }

    /// EN-002: adding a holiday invalidates the cached rate
    #[test]
    fn test_add_holiday_recomputes_rate() {
        let mut engine = make_engine("10000", "2020-01-01");
        let date = make_date("2026-01-14");
        assert_eq!(engine.daily_rate(date).round_dp(4), dec("454.5455"));

        engine.add_holiday(Holiday::new(make_date("2026-01-01")));
        engine.add_holiday(Holiday::new(make_date("2026-01-02")));

        assert_eq!(engine.daily_rate(date), dec("500"));
    }

    /// EN-003: removing a holiday restores the rate
    #[test]
    fn test_remove_holiday_recomputes_rate() {
        let mut engine = make_engine("10500", "2020-01-01");
        let date = make_date("2026-01-14");
        engine.add_holiday(Holiday::new(make_date("2026-01-01")));
        assert_eq!(engine.daily_rate(date), dec("500"));

        assert!(engine.remove_holiday(make_date("2026-01-01")).is_some());
        assert_eq!(engine.daily_rate(date).round_dp(4), dec("477.2727"));
        assert!(engine.remove_holiday(make_date("2026-01-01")).is_none());
    }

    /// EN-004: mask change invalidates the cached rate
    #[test]
    fn test_weekly_mask_change_recomputes_rate() {
        let mut engine = make_engine("11000", "2020-01-01");
        let date = make_date("2026-01-14");
        assert_eq!(engine.daily_rate(date), dec("500"));

        engine.set_weekly_mask(WeeklyMask::all_rest());
        assert_eq!(engine.daily_rate(date), Decimal::ZERO);
    }

    /// EN-005: salary change
    #[test]
    fn test_set_monthly_salary() {
        let mut engine = make_engine("11000", "2020-01-01");
        let date = make_date("2026-01-14");
        assert_eq!(engine.daily_rate(date), dec("500"));

        engine.set_monthly_salary(dec("22000")).unwrap();
        assert_eq!(engine.daily_rate(date), dec("1000"));
    }

    /// EN-006: invalid settings are rejected and leave the engine unchanged
    #[test]
    fn test_invalid_updates_rejected() {
        let mut engine = make_engine("11000", "2020-01-01");

        assert!(matches!(
            engine.set_monthly_salary(dec("-1")),
            Err(EngineError::InvalidSalary { .. })
        ));
        assert_eq!(engine.salary().monthly_salary, dec("11000"));

        let inverted = ShiftWindow {
            start: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            end: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        };
        assert!(matches!(
            engine.set_shift_window(inverted),
            Err(EngineError::InvalidShiftWindow { .. })
        ));
        assert_eq!(*engine.shift_window(), ShiftWindow::default());
    }

    /// EN-007: inverted window cannot construct an engine
    #[test]
    fn test_new_rejects_inverted_window() {
        let result = Engine::new(
            CalendarPolicy::default(),
            ShiftWindow {
                start: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
                end: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            },
            SalaryProfile::new(dec("1000"), make_date("2020-01-01")).unwrap(),
        );
        assert!(result.is_err());
    }

    /// EN-008: before employment starts everything is zero
    #[test]
    fn test_before_employment_start() {
        let mut engine = make_engine("11000", "2026-02-01");
        let now = make_datetime("2026-01-15", "12:00:00");

        let (_, earnings) = engine.recompute(now).unwrap();
        assert_eq!(earnings, EarningsSnapshot::default());
    }

    #[test]
    fn test_from_settings() {
        let mut settings = SettingsSnapshot::new(make_date("2020-01-01"));
        settings.holidays = vec![Holiday::named(make_date("2026-01-01"), "New Year's Day")];

        let engine = Engine::from_settings(&settings).unwrap();
        assert!(engine.policy().is_legal_holiday(make_date("2026-01-01")));
        assert!(!engine.policy().is_workday(make_date("2026-01-01")));
    }

    #[test]
    fn test_from_settings_rejects_bad_mask() {
        let mut settings = SettingsSnapshot::new(make_date("2020-01-01"));
        settings.weekly_mask = vec![true; 8];

        assert!(matches!(
            Engine::from_settings(&settings),
            Err(EngineError::InvalidWeeklyMask { len: 8 })
        ));
    }

    #[test]
    fn test_rest_day_countdown_and_earnings() {
        let mut engine = make_engine("11000", "2020-01-01");
        // Saturday 2026-01-17
        let now = make_datetime("2026-01-17", "10:00:00");

        let (countdown, earnings) = engine.recompute(now).unwrap();
        assert_eq!(countdown.state, ShiftState::RestDayNextWorkday);
        assert_eq!(countdown.target, make_datetime("2026-01-19", "09:00:00"));
        assert_eq!(earnings.today, Decimal::ZERO);
        assert_eq!(earnings.month, dec("6000"));
    }
}
