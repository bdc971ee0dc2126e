//! Active-day conventions.
//!
//! A [`Convention`] names the policy that decides which dates a calendar
//! counts. Two identifiers are recognised, `"BusinessDays"` and
//! `"CalendarDays"`.
//!
//! Name resolution comes in two flavours:
//! * [`Convention::from_name`] never fails and resolves any unrecognised name
//!   to [`Convention::BusinessDays`];
//! * [`str::parse`] (via [`FromStr`]) rejects unrecognised names, for callers
//!   that want to catch typos before building a calendar.

use std::str::FromStr;

use ad_core::errors::{Error, Result};

/// The calendar convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Convention {
    /// A no-holiday calendar: only working days are active, weekends are
    /// neglected.
    #[default]
    BusinessDays,
    /// A nominal ISO calendar: all days, including weekends, are active.
    CalendarDays,
}

impl Convention {
    /// Every recognised convention.
    pub const ALL: [Convention; 2] = [Convention::BusinessDays, Convention::CalendarDays];

    /// The identifier of this convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            Convention::BusinessDays => "BusinessDays",
            Convention::CalendarDays => "CalendarDays",
        }
    }

    /// Resolve a convention name, falling back to
    /// [`BusinessDays`](Convention::BusinessDays) for anything unrecognised.
    pub fn from_name(name: &str) -> Self {
        match name.parse() {
            Ok(convention) => convention,
            Err(_) => {
                tracing::debug!(
                    name,
                    fallback = Convention::BusinessDays.as_str(),
                    "unrecognised convention name"
                );
                Convention::BusinessDays
            }
        }
    }
}

impl FromStr for Convention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Convention::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown convention {s:?}")))
    }
}

impl std::fmt::Display for Convention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Convention {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Convention {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        Ok(Convention::from_name(&name))
    }
}
