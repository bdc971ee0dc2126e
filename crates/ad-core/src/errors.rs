//! Error types for activedays.
//!
//! The day-counting engine is total and never fails. Errors only arise at the
//! edges: building a `Date` from unchecked components, or strictly validating
//! a convention name.

use thiserror::Error;

/// The top-level error type used throughout activedays.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Date-related error.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout activedays.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::$variant(...))` if `$cond` is false.
///
/// The message takes `format!` arguments.
///
/// # Example
/// ```
/// use ad_core::{ensure_or, errors::Error};
/// fn month(m: u8) -> ad_core::errors::Result<u8> {
///     ensure_or!((1..=12).contains(&m), Date, "month {m} out of range [1, 12]");
///     Ok(m)
/// }
/// assert_eq!(month(13), Err(Error::Date("month 13 out of range [1, 12]".into())));
/// ```
#[macro_export]
macro_rules! ensure_or {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
}
