//! `Date` type.
//!
//! Dates are represented as a serial number of days on the proleptic
//! Gregorian calendar.
//!
//! # Serial number convention
//! * Serial 0 = January 1, 1970.
//! * Negative serials are dates before 1970.
//! * [`Date::from_ymd`] accepts years in `[-9999, 9999]`; day arithmetic may
//!   leave that range and saturates at the `i32` serial bounds.

use crate::weekday::Weekday;
use ad_core::ensure_or;
use ad_core::errors::Result;

/// A calendar date represented as a serial number.
///
/// Dates are plain values: day arithmetic never fails and two dates compare
/// by their position on the time line. Shifts past [`Date::MIN`] or
/// [`Date::MAX`] stop at that bound.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// January 1, 1970 (serial 0).
    pub const EPOCH: Date = Date(0);

    /// Earliest representable date (a Tuesday).
    pub const MIN: Date = Date(i32::MIN);

    /// Latest representable date (a Friday).
    pub const MAX: Date = Date(i32::MAX);

    /// Smallest year accepted by [`Date::from_ymd`].
    pub const MIN_YEAR: i32 = -9999;

    /// Largest year accepted by [`Date::from_ymd`].
    pub const MAX_YEAR: i32 = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub const fn from_serial(serial: i32) -> Self {
        Date(serial)
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        ensure_or!(
            (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year),
            Date,
            "year {year} out of range [{}, {}]",
            Self::MIN_YEAR,
            Self::MAX_YEAR
        );
        ensure_or!(
            (1..=12).contains(&month),
            Date,
            "month {month} out of range [1, 12]"
        );
        let days_in = days_in_month(year, month);
        ensure_or!(
            (1..=days_in).contains(&day),
            Date,
            "day {day} out of range [1, {days_in}] for {year}-{month:02}"
        );
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = d as u16;
        for mon in 1..m {
            doy += days_in_month(y, mon) as u16;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        WEEKDAY_OF_SERIAL[(self.0 as i64).rem_euclid(7) as usize]
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Shift by `n` calendar days (`n` may be negative or zero).
    ///
    /// Saturates at [`Date::MIN`] / [`Date::MAX`].
    pub fn add_days(self, n: i32) -> Self {
        self.shift(n as i64)
    }

    /// Shift by `n` calendar days, saturating at [`Date::MIN`] / [`Date::MAX`].
    pub fn shift(self, n: i64) -> Self {
        Date(saturate(self.0 as i64 + n))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`; saturates at the `i32` bounds.
    pub fn days_between(self, other: Date) -> i32 {
        other - self
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.shift(rhs as i64)
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.shift(-(rhs as i64))
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        saturate(self.0 as i64 - rhs.0 as i64)
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.shift(rhs as i64);
    }
}

impl std::ops::SubAssign<i32> for Date {
    fn sub_assign(&mut self, rhs: i32) {
        *self = self.shift(-(rhs as i64));
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        let mon = [
            "January",
            "February",
            "March",
            "April",
            "May",
            "June",
            "July",
            "August",
            "September",
            "October",
            "November",
            "December",
        ][m as usize - 1];
        write!(f, "{d} {mon} {y}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year; 0 for a month outside `1..=12`.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Clamp a widened day count back into the `i32` range.
pub(crate) fn saturate(n: i64) -> i32 {
    n.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Weekday by serial modulo 7; serial 0 (1970-01-01) is a Thursday.
const WEEKDAY_OF_SERIAL: [Weekday; 7] = [
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
];

/// Days in a 400-year Gregorian cycle.
const DAYS_PER_ERA: i64 = 146_097;

/// Days from 0000-03-01 to 1970-01-01.
const EPOCH_SHIFT: i64 = 719_468;

/// Convert (year, month, day) to a serial number.
///
/// Years are counted from March so that the leap day closes the year.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let m = month as i64;
    let d = day as i64;
    let y = year as i64 - i64::from(m <= 2);
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = (m + 9) % 12; // March = 0 … February = 11
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * DAYS_PER_ERA + doe - EPOCH_SHIFT) as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (i32, u8, u8) {
    let z = serial as i64 + EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z.rem_euclid(DAYS_PER_ERA);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y as i32, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
