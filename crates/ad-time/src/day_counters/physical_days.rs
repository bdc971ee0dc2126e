//! Physical day counter — every calendar day is active.

use crate::convention::Convention;
use crate::date::Date;
use crate::day_counter::DayCounter;

/// A counter in which all days, weekends included, are active.
///
/// Implements [`Convention::CalendarDays`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhysicalDayCounter;

impl DayCounter for PhysicalDayCounter {
    fn name(&self) -> &str {
        "Calendar Days"
    }

    fn convention(&self) -> Convention {
        Convention::CalendarDays
    }

    fn is_active(&self, _date: Date) -> bool {
        true
    }

    fn days_in_year(&self) -> i32 {
        365
    }

    fn add(&self, origin: Date, days: i32) -> Date {
        origin + days
    }

    fn days_between(&self, from: Date, to: Date) -> i32 {
        if from > to {
            return -self.days_between(to, from);
        }
        to - from
    }
}
