//! # ad-time
//!
//! Date arithmetic relative to an active-day convention.
//!
//! A [`Calendar`] distinguishes active dates from inactive ones, shifts dates
//! by a signed number of active days and counts the active days between two
//! dates:
//!
//! ```
//! use ad_time::{Calendar, Convention, Date};
//!
//! let calendar = Calendar::new(Convention::BusinessDays);
//! let friday = Date::from_ymd(2021, 10, 1).unwrap();
//! let monday = calendar.next(friday);
//!
//! assert_eq!(monday, Date::from_ymd(2021, 10, 4).unwrap());
//! assert_eq!(calendar.days_between(friday, monday), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` facade.
pub mod calendar;

/// `Convention` — the active-day policy.
pub mod convention;

/// `Date` type.
pub mod date;

/// `DayCounter` trait and the convention-to-counter factory.
pub mod day_counter;

/// Concrete day counters.
pub mod day_counters;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::Calendar;
pub use convention::Convention;
pub use date::Date;
pub use day_counter::{day_counter, DayCounter};
pub use day_counters::{BusinessDayCounter, Direction, PhysicalDayCounter};
pub use weekday::Weekday;
