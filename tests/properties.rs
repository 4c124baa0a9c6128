//! Property tests for calendar and accrual invariants.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use paytimer_engine::calculation::{
    CalendarPolicy, WorkdayCalendar, month_earnings_with_rate, today_earnings_so_far,
};
use paytimer_engine::models::{Holiday, HolidaySet, SalaryProfile, ShiftWindow, WeeklyMask};

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap()
}

prop_compose! {
    fn arb_date()(offset in 0i64..20_000) -> NaiveDate {
        epoch() + Duration::days(offset)
    }
}

prop_compose! {
    fn arb_mask()(flags in any::<[bool; 7]>()) -> WeeklyMask {
        WeeklyMask::new(flags)
    }
}

prop_compose! {
    fn arb_holidays()(dates in prop::collection::vec(arb_date(), 0..40)) -> HolidaySet {
        dates.into_iter().map(Holiday::new).collect()
    }
}

prop_compose! {
    fn arb_window()(start in 0u32..1_380, length in 1u32..600) -> ShiftWindow {
        let end = (start + length).min(1_439);
        ShiftWindow::new(
            NaiveTime::from_hms_opt(start / 60, start % 60, 0).unwrap(),
            NaiveTime::from_hms_opt(end / 60, end % 60, 0).unwrap(),
        )
        .unwrap()
    }
}

prop_compose! {
    fn arb_rate()(cents in 0i64..10_000_000) -> Decimal {
        Decimal::new(cents, 2)
    }
}

proptest! {
    /// The calendar departs from the mask only on holidays.
    #[test]
    fn test_holidays_are_the_only_override(
        mask in arb_mask(),
        holidays in arb_holidays(),
        date in arb_date(),
    ) {
        let policy = CalendarPolicy::new(mask, holidays.clone());
        let mask_says = mask.is_work_day(date.weekday());

        if policy.is_workday(date) != mask_says {
            prop_assert!(holidays.contains(date));
        }
        prop_assert_eq!(policy.is_legal_holiday(date), holidays.contains(date));
    }

    /// Adding then removing a holiday restores the mask verdict.
    #[test]
    fn test_holiday_round_trip(mask in arb_mask(), date in arb_date()) {
        let mut policy = CalendarPolicy::new(mask, HolidaySet::new());
        let before = policy.is_workday(date);

        policy.add_holiday(Holiday::new(date));
        prop_assert!(!policy.is_workday(date));

        policy.remove_holiday(date);
        prop_assert_eq!(policy.is_workday(date), before);
        prop_assert_eq!(before, mask.is_work_day(date.weekday()));
    }

    /// A workday is its own next workday; anything found is a workday.
    #[test]
    fn test_next_workday_inclusive(
        mask in arb_mask(),
        holidays in arb_holidays(),
        date in arb_date(),
    ) {
        let policy = CalendarPolicy::new(mask, holidays);

        match policy.next_workday(date) {
            Some(next) => {
                prop_assert!(next >= date);
                prop_assert!(policy.is_workday(next));
                if policy.is_workday(date) {
                    prop_assert_eq!(next, date);
                }
            }
            None => prop_assert!(!policy.is_workday(date)),
        }
    }

    /// An all-rest calendar never yields a workday.
    #[test]
    fn test_all_rest_has_no_next_workday(date in arb_date()) {
        let policy = CalendarPolicy::new(WeeklyMask::all_rest(), HolidaySet::new());
        prop_assert_eq!(policy.next_workday(date), None);
    }

    /// Today's accrual never decreases and never exceeds the daily rate.
    #[test]
    fn test_today_earnings_monotone(
        window in arb_window(),
        rate in arb_rate(),
        date in arb_date(),
        a in 0i64..86_400,
        b in 0i64..86_400,
    ) {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let midnight = date.and_time(NaiveTime::MIN);
        let at = |secs: i64| -> NaiveDateTime { midnight + Duration::seconds(secs) };

        let first = today_earnings_so_far(at(earlier), &window, true, rate);
        let second = today_earnings_so_far(at(later), &window, true, rate);

        prop_assert!(first <= second);
        prop_assert!(second <= rate);
        prop_assert!(first >= Decimal::ZERO);
    }

    /// At and after the shift end the full daily rate is earned.
    #[test]
    fn test_today_earnings_pinned_after_end(
        window in arb_window(),
        rate in arb_rate(),
        date in arb_date(),
        extra in 0i64..3_600,
    ) {
        let end = window.end_on(date);
        let now = (end + Duration::seconds(extra)).min(date.and_hms_opt(23, 59, 59).unwrap());

        prop_assert_eq!(today_earnings_so_far(now, &window, true, rate), rate);
        prop_assert_eq!(today_earnings_so_far(now, &window, false, rate), Decimal::ZERO);
    }

    /// Month-to-date is completed workdays at the full rate plus today.
    #[test]
    fn test_month_is_completed_days_plus_today(
        mask in arb_mask(),
        holidays in arb_holidays(),
        rate in arb_rate(),
        date in arb_date(),
        secs in 0i64..86_400,
    ) {
        let policy = CalendarPolicy::new(mask, holidays);
        let window = ShiftWindow::default();
        let profile = SalaryProfile::new(Decimal::new(10_000, 0), epoch()).unwrap();
        let now = date.and_time(NaiveTime::MIN) + Duration::seconds(secs);

        let first = date.with_day(1).unwrap();
        let completed = policy.count_workdays(first, date.pred_opt().unwrap());
        let today = today_earnings_so_far(now, &window, policy.is_workday(date), rate);

        prop_assert_eq!(
            month_earnings_with_rate(now, &policy, &profile, &window, rate),
            rate * Decimal::from(completed) + today
        );
    }
}
