//! `DayCounter` trait and the convention-to-counter factory.
//!
//! A day counter defines the properties of a calendar convention:
//! * the active (working) date criterion;
//! * the standard year duration;
//! * the number of active days between two dates;
//! * the shift of an origin date by a number of active days.

use crate::convention::Convention;
use crate::date::Date;
use crate::day_counters::{BusinessDayCounter, PhysicalDayCounter};
use ad_core::{Real, Time};

/// Active-day arithmetic for one [`Convention`].
///
/// Implementations hold no state, so one instance can be shared by any number
/// of threads.
///
/// Every implementation must keep [`add`](Self::add) and
/// [`days_between`](Self::days_between) consistent: for an active `from` and
/// any `n`, `days_between(from, add(from, n)) == n`.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this counter (e.g. `"Business Days"`).
    fn name(&self) -> &str;

    /// The convention this counter implements.
    fn convention(&self) -> Convention;

    /// Return `true` if `date` is counted by this convention.
    fn is_active(&self, date: Date) -> bool;

    /// Standard year duration in active days.
    fn days_in_year(&self) -> i32;

    /// Shift `origin` by `days` active days (`days` may be negative).
    ///
    /// A zero shift returns the latest active day at or before `origin`, and
    /// is idempotent. Results past [`Date::MIN`] / [`Date::MAX`] stop at that
    /// bound.
    fn add(&self, origin: Date, days: i32) -> Date;

    /// Number of active dates between `from` (excluded) and `to` (included).
    ///
    /// Negative when `from` is after `to`. Saturates at `±i32::MAX`.
    fn days_between(&self, from: Date, to: Date) -> i32;

    /// Fraction of a standard year between `from` and `to`.
    fn year_fraction(&self, from: Date, to: Date) -> Time {
        self.days_between(from, to) as Real / self.days_in_year() as Real
    }
}

static BUSINESS_DAYS: BusinessDayCounter = BusinessDayCounter;
static CALENDAR_DAYS: PhysicalDayCounter = PhysicalDayCounter;

/// Return the shared day counter implementing `convention`.
pub fn day_counter(convention: Convention) -> &'static dyn DayCounter {
    match convention {
        Convention::BusinessDays => &BUSINESS_DAYS,
        Convention::CalendarDays => &CALENDAR_DAYS,
    }
}
