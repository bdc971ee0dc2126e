//! Business day counter — Saturdays and Sundays are inactive.
//!
//! No holidays are taken into account. Both [`add`](DayCounter::add) and
//! [`days_between`](DayCounter::days_between) are closed forms, so their cost
//! does not depend on the size of the shift or span. Intermediate arithmetic
//! is done in `i64`; shifts stop at [`Date::MIN`] / [`Date::MAX`] and counts
//! saturate at the `i32` bounds.

use crate::convention::Convention;
use crate::date::{saturate, Date};
use crate::day_counter::DayCounter;
use crate::weekday::Weekday;

/// Direction of a closest-business-day search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards later dates.
    Forward,
    /// Towards earlier dates.
    Backward,
}

/// A counter whose active days are the working days, Monday to Friday.
///
/// Implements [`Convention::BusinessDays`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BusinessDayCounter;

impl BusinessDayCounter {
    /// Return `true` if `date` falls on a Saturday or Sunday.
    pub fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is a working day.
    pub fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date)
    }

    /// The first business day at or after `origin`.
    pub fn next_business_day(&self, origin: Date) -> Date {
        self.closest_business_day(origin, Direction::Forward)
    }

    /// The last business day at or before `origin`.
    pub fn previous_business_day(&self, origin: Date) -> Date {
        self.closest_business_day(origin, Direction::Backward)
    }

    /// Step from `origin` in `direction` until a business day is found.
    ///
    /// Returns `origin` itself when it is a business day. At most two steps
    /// are taken.
    pub fn closest_business_day(&self, origin: Date, direction: Direction) -> Date {
        let step = match direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        };
        let mut current = origin;
        while !self.is_business_day(current) {
            current += step;
        }
        current
    }
}

impl DayCounter for BusinessDayCounter {
    fn name(&self) -> &str {
        "Business Days"
    }

    fn convention(&self) -> Convention {
        Convention::BusinessDays
    }

    fn is_active(&self, date: Date) -> bool {
        self.is_business_day(date)
    }

    fn days_in_year(&self) -> i32 {
        252
    }

    fn add(&self, origin: Date, days: i32) -> Date {
        // Weekend origins fall back to the preceding Friday.
        let anchor = self.previous_business_day(origin);
        if days == 0 {
            return anchor;
        }

        let weeks = days / 5;
        let days_left = skip_weekend(anchor, days - weeks * 5, days);

        anchor.shift(weeks as i64 * 7 + days_left as i64)
    }

    fn days_between(&self, from: Date, to: Date) -> i32 {
        if from > to {
            return -self.days_between(to, from);
        }

        // A Friday or Saturday start moves to the following Sunday.
        let from_serial = from.serial() as i64;
        let (start, start_pos) = match from.weekday() {
            Weekday::Friday => (from_serial + 2, SUNDAY),
            Weekday::Saturday => (from_serial + 1, SUNDAY),
            weekday => (from_serial, weekday.days_from_sunday()),
        };

        // A weekend end moves back to the preceding Friday.
        let to_serial = to.serial() as i64;
        let (end, end_pos) = match to.weekday() {
            Weekday::Saturday => (to_serial - 1, FRIDAY),
            Weekday::Sunday => (to_serial - 2, FRIDAY),
            weekday => (to_serial, weekday.days_from_sunday()),
        };

        let mut raw_days = end - start;
        if raw_days <= 0 {
            return 0;
        }

        // The span wraps past a weekend not covered by whole weeks.
        if start_pos > end_pos {
            raw_days -= 2;
        }

        saturate(raw_days / 7 * 5 + raw_days % 7)
    }
}

const SUNDAY: u8 = 0;
const FRIDAY: u8 = 5;

/// Widen the leftover (non whole-week) part of a shift by the two weekend
/// days when it does not fit in the anchor's own week.
///
/// `anchor` must be a business day; `days` is the full requested shift.
fn skip_weekend(anchor: Date, days_left: i32, days: i32) -> i32 {
    let weekday = anchor.weekday().ordinal() as i32;
    let to_friday = Weekday::Friday.ordinal() as i32 - weekday;
    let from_monday = weekday - Weekday::Monday.ordinal() as i32;

    if days > 0 && to_friday < days_left {
        return days_left + 2;
    }
    if days < 0 && from_monday < -days_left {
        return days_left - 2;
    }
    days_left
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn is_active() {
        let dc = BusinessDayCounter;
        assert!(dc.is_active(date(2020, 1, 3))); // Friday
        assert!(!dc.is_active(date(2020, 1, 4))); // Saturday
        assert!(!dc.is_active(date(2020, 1, 5))); // Sunday
        assert!(dc.is_active(date(2020, 1, 6))); // Monday
    }

    #[test]
    fn days_in_year() {
        assert_eq!(BusinessDayCounter.days_in_year(), 252);
    }

    #[test]
    fn weekend_and_business_day() {
        let dc = BusinessDayCounter;
        // Friday to Monday
        let friday = date(2021, 9, 24);
        assert!(!dc.is_weekend(friday));
        assert!(dc.is_weekend(friday + 1));
        assert!(dc.is_weekend(friday + 2));
        assert!(!dc.is_weekend(friday + 3));

        assert!(dc.is_business_day(friday));
        assert!(!dc.is_business_day(friday + 1));
        assert!(!dc.is_business_day(friday + 2));
        assert!(dc.is_business_day(friday + 3));
    }

    #[test]
    fn closest_business_day() {
        let dc = BusinessDayCounter;
        let friday = date(2021, 9, 24);
        let saturday = date(2021, 9, 25);
        let sunday = date(2021, 9, 26);
        let monday = date(2021, 9, 27);

        let cases = [
            (friday, Direction::Forward, friday),
            (friday, Direction::Backward, friday),
            (saturday, Direction::Forward, monday),
            (saturday, Direction::Backward, friday),
            (sunday, Direction::Forward, monday),
            (sunday, Direction::Backward, friday),
        ];
        for (origin, direction, expected) in cases {
            assert_eq!(
                dc.closest_business_day(origin, direction),
                expected,
                "{origin} {direction:?}"
            );
        }
        assert_eq!(dc.next_business_day(sunday), monday);
        assert_eq!(dc.previous_business_day(saturday), friday);
    }

    #[test]
    fn add() {
        let dc = BusinessDayCounter;
        let cases = [
            (date(2020, 9, 1), 0, date(2020, 9, 1)),
            (date(2020, 8, 30), 0, date(2020, 8, 28)),
            (date(2020, 9, 1), 3, date(2020, 9, 4)),
            (date(2020, 8, 30), 1, date(2020, 8, 31)),
            (date(2020, 9, 1), -1, date(2020, 8, 31)),
            (date(2020, 8, 30), -1, date(2020, 8, 27)),
            (date(2020, 9, 1), -3, date(2020, 8, 27)),
            (date(2020, 9, 1), 4, date(2020, 9, 7)),
            (date(2020, 9, 1), 10, date(2020, 9, 15)),
            (date(2020, 9, 4), -5, date(2020, 8, 28)),
        ];
        for (origin, days, expected) in cases {
            assert_eq!(dc.add(origin, days), expected, "{origin} + {days}");
        }
    }

    #[test]
    fn zero_shift() {
        let dc = BusinessDayCounter;
        let thursday = date(2018, 8, 30);
        let friday = thursday + 1;
        let saturday = thursday + 2;
        let sunday = thursday + 3;

        assert_eq!(dc.add(thursday, 0), thursday);
        assert_eq!(dc.add(friday, 0), friday);
        assert_eq!(dc.add(saturday, 0), friday);
        assert_eq!(dc.add(sunday, 0), friday);
    }

    #[test]
    fn days_between() {
        let dc = BusinessDayCounter;
        let cases = [
            (date(2020, 1, 1), date(2020, 1, 2), 1),
            (date(2020, 8, 28), date(2020, 9, 1), 2),
            (date(2020, 8, 29), date(2020, 8, 30), 0),
            (date(2020, 8, 28), date(2020, 8, 29), 0),
            (date(2020, 8, 30), date(2020, 8, 31), 1),
            (date(2020, 1, 1), date(2020, 1, 10), 7),
            (date(2020, 2, 1), date(2020, 3, 1), 20),
            (date(2020, 9, 3), date(2020, 9, 8), 3),
        ];
        for (from, to, expected) in cases {
            assert_eq!(dc.days_between(from, to), expected, "{from} -> {to}");
            assert_eq!(dc.days_between(to, from), -expected, "{to} -> {from}");
        }
    }

    #[test]
    fn shift_across_weekend() {
        let dc = BusinessDayCounter;
        let from = date(2018, 8, 2);
        let business_before_to = date(2018, 8, 31);
        let to = date(2018, 9, 1);

        assert_eq!(dc.days_between(from, to), 21);
        assert_eq!(dc.add(to, -21), from);
        assert_eq!(dc.previous_business_day(to), business_before_to);
        assert_eq!(dc.add(from, 21), business_before_to);
    }

    #[test]
    fn large_shifts_stay_exact() {
        let dc = BusinessDayCounter;
        // Date::MIN is a Tuesday; 320 million whole weeks still fit.
        let far = dc.add(Date::MIN, 1_600_000_000);
        assert_eq!(far, Date::from_serial(92_516_352));
        assert_eq!(dc.days_between(Date::MIN, far), 1_600_000_000);
        assert_eq!(dc.add(far, -1_600_000_000), Date::MIN);

        let epoch_shift = dc.add(Date::EPOCH, 1_000_000_000);
        assert_eq!(epoch_shift, Date::from_serial(1_400_000_000));
        assert_eq!(dc.days_between(epoch_shift, Date::EPOCH), -1_000_000_000);
    }

    #[test]
    fn extreme_shifts_saturate() {
        let dc = BusinessDayCounter;
        let origin = date(2020, 1, 1);

        assert_eq!(dc.add(origin, i32::MAX), Date::MAX);
        assert_eq!(dc.add(origin, i32::MIN), Date::MIN);
        assert_eq!(dc.add(origin, 1_600_000_000), Date::MAX);
        assert!(dc.is_active(Date::MAX));
        assert!(dc.is_active(Date::MIN));

        assert_eq!(dc.days_between(Date::MIN, Date::MAX), i32::MAX);
        assert_eq!(dc.days_between(Date::MAX, Date::MIN), -i32::MAX);
        assert_eq!(dc.days_between(Date::MAX - 1, Date::MAX), 1);
        assert_eq!(dc.days_between(Date::MIN, Date::MIN + 1), 1);
    }

    #[test]
    fn leftover_widened_only_past_friday() {
        let wednesday = date(2021, 9, 22);
        assert_eq!(skip_weekend(wednesday, 2, 2), 2);
        assert_eq!(skip_weekend(wednesday, 3, 3), 5);
        assert_eq!(skip_weekend(wednesday, -2, -2), -2);
        assert_eq!(skip_weekend(wednesday, -3, -3), -5);
        assert_eq!(skip_weekend(wednesday, 0, 10), 0);
    }
}
