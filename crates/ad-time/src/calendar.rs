//! `Calendar` — the public face of the day-counting engine.
//!
//! A calendar wraps the [`DayCounter`] selected by its [`Convention`] and
//! forwards to it. [`latest_before`](Calendar::latest_before),
//! [`next`](Calendar::next) and [`previous`](Calendar::previous) are derived
//! from [`add`](Calendar::add) and inherit its guarantees.

use crate::convention::Convention;
use crate::date::Date;
use crate::day_counter::{day_counter, DayCounter};
use ad_core::Time;

/// Date arithmetic with respect to an active-day convention.
///
/// Calendars are cheap `Copy` handles onto a shared, stateless counter.
#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    counter: &'static dyn DayCounter,
    convention: Convention,
}

impl Calendar {
    /// Create a calendar following `convention`.
    pub fn new(convention: Convention) -> Self {
        Self {
            counter: day_counter(convention),
            convention,
        }
    }

    /// Create a calendar from a convention name.
    ///
    /// Unrecognised names yield a business-days calendar; parse the name with
    /// [`str::parse`] first to reject them instead.
    pub fn from_name(name: &str) -> Self {
        Self::new(Convention::from_name(name))
    }

    /// The calendar convention.
    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// Human-readable name of the underlying day counter.
    pub fn name(&self) -> &str {
        self.counter.name()
    }

    /// Return `true` if `date` is active in this calendar.
    pub fn is_active(&self, date: Date) -> bool {
        self.counter.is_active(date)
    }

    /// Standard year duration in active days (252 or 365).
    pub fn days_in_year(&self) -> i32 {
        self.counter.days_in_year()
    }

    /// Shift `origin` by `days` active days. See [`DayCounter::add`].
    pub fn add(&self, origin: Date, days: i32) -> Date {
        self.counter.add(origin, days)
    }

    /// Number of active dates between `from` (excluded) and `to` (included).
    pub fn days_between(&self, from: Date, to: Date) -> i32 {
        self.counter.days_between(from, to)
    }

    /// Fraction of a standard year between `from` and `to`.
    pub fn year_fraction(&self, from: Date, to: Date) -> Time {
        self.counter.year_fraction(from, to)
    }

    /// The latest active date at or before `date`.
    pub fn latest_before(&self, date: Date) -> Date {
        self.add(date, 0)
    }

    /// The active date following `date`.
    pub fn next(&self, date: Date) -> Date {
        self.add(date, 1)
    }

    /// The active date preceding `date`.
    pub fn previous(&self, date: Date) -> Date {
        self.add(date, -1)
    }
}

impl Default for Calendar {
    fn default() -> Self {
        Self::new(Convention::default())
    }
}

impl From<Convention> for Calendar {
    fn from(convention: Convention) -> Self {
        Self::new(convention)
    }
}

impl PartialEq for Calendar {
    fn eq(&self, other: &Self) -> bool {
        self.convention == other.convention
    }
}

impl Eq for Calendar {}
