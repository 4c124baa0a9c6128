//! Legal holiday models.
//!
//! This module contains the [`Holiday`] entry and the [`HolidaySet`] that the
//! calendar policy consults before falling back to the weekly mask.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A legal holiday on a single calendar date.
///
/// # Example
///
/// ```
/// use paytimer_engine::models::Holiday;
/// use chrono::NaiveDate;
///
/// let holiday = Holiday::named(
///     NaiveDate::from_ymd_opt(2025, 10, 1).unwrap(),
///     "National Day",
/// );
/// assert_eq!(holiday.name.as_deref(), Some("National Day"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// Optional display name (e.g., "Spring Festival").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Holiday {
    /// Creates an unnamed holiday.
    pub fn new(date: NaiveDate) -> Self {
        Self { date, name: None }
    }

    /// Creates a holiday with a display name.
    pub fn named(date: NaiveDate, name: impl Into<String>) -> Self {
        Self {
            date,
            name: Some(name.into()),
        }
    }
}

/// The set of legal holidays, keyed by date.
///
/// A date appears at most once: adding a holiday on a date that is already
/// present replaces its name. Entries never expire; they change only through
/// [`add`](HolidaySet::add) and [`remove`](HolidaySet::remove).
///
/// # Example
///
/// ```
/// use paytimer_engine::models::{Holiday, HolidaySet};
/// use chrono::NaiveDate;
///
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// let mut holidays = HolidaySet::new();
/// holidays.add(Holiday::named(new_year, "New Year's Day"));
///
/// assert!(holidays.contains(new_year));
/// assert_eq!(holidays.name(new_year), Some("New Year's Day"));
///
/// holidays.remove(new_year);
/// assert!(holidays.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Holiday>", into = "Vec<Holiday>")]
pub struct HolidaySet {
    entries: BTreeMap<NaiveDate, Option<String>>,
}

impl HolidaySet {
    /// Creates an empty holiday set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday, returning the entry it replaced on the same date.
    pub fn add(&mut self, holiday: Holiday) -> Option<Holiday> {
        self.entries
            .insert(holiday.date, holiday.name)
            .map(|name| Holiday {
                date: holiday.date,
                name,
            })
    }

    /// Removes the holiday on `date`, returning it if it was present.
    pub fn remove(&mut self, date: NaiveDate) -> Option<Holiday> {
        self.entries
            .remove(&date)
            .map(|name| Holiday { date, name })
    }

    /// Returns true if `date` is a legal holiday.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Returns the holiday on `date`, if any.
    pub fn get(&self, date: NaiveDate) -> Option<Holiday> {
        self.entries.get(&date).map(|name| Holiday {
            date,
            name: name.clone(),
        })
    }

    /// Returns the display name of the holiday on `date`, if it has one.
    pub fn name(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).and_then(|name| name.as_deref())
    }

    /// Iterates over all holidays in date order.
    pub fn iter(&self) -> impl Iterator<Item = Holiday> + '_ {
        self.entries.iter().map(|(date, name)| Holiday {
            date: *date,
            name: name.clone(),
        })
    }

    /// Returns the number of holidays.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no holidays.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Extend<Holiday> for HolidaySet {
    fn extend<I: IntoIterator<Item = Holiday>>(&mut self, iter: I) {
        for holiday in iter {
            self.add(holiday);
        }
    }
}

impl FromIterator<Holiday> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl From<Vec<Holiday>> for HolidaySet {
    fn from(holidays: Vec<Holiday>) -> Self {
        holidays.into_iter().collect()
    }
}

impl From<HolidaySet> for Vec<Holiday> {
    fn from(set: HolidaySet) -> Self {
        set.iter().collect()
    }
}
