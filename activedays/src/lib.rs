//! # activedays
//!
//! Date arithmetic relative to an "active day" convention: business days
//! (weekends inactive) or calendar days (every day active).
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `ad-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! activedays = "0.1"
//! ```
//!
//! ```rust
//! use activedays::{Calendar, Convention, Date};
//!
//! let calendar = Calendar::from_name("BusinessDays");
//! let saturday = Date::from_ymd(2021, 10, 2).unwrap();
//!
//! assert_eq!(calendar.convention(), Convention::BusinessDays);
//! assert_eq!(calendar.latest_before(saturday), Date::from_ymd(2021, 10, 1).unwrap());
//! assert_eq!(calendar.next(saturday), Date::from_ymd(2021, 10, 4).unwrap());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use ad_core as core;

/// Date, convention, day counter, and calendar types.
pub use ad_time as time;

pub use ad_core::{Error, Result};
pub use ad_time::{Calendar, Convention, Date, DayCounter, Weekday};
