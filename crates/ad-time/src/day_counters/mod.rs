//! Concrete day counters, one per [`Convention`](crate::Convention).

/// Weekends-excluded counter.
pub mod business_days;

/// All-days counter.
pub mod physical_days;

pub use business_days::{BusinessDayCounter, Direction};
pub use physical_days::PhysicalDayCounter;
