//! Concrete predicates carried by unary and binary constraints.
//!
//! | Kind                     | Holds when                                   |
//! |--------------------------|----------------------------------------------|
//! | `Before(t)` / `After(t)` | value strictly earlier / later than `t`      |
//! | `Not(t)` / `Exactly(t)`  | value differs from / equals `t`              |
//! | `OnDate` / `NotOnDate`   | calendar date of the value (not) equal       |
//! | `HourBetween`            | hour of the value within `first..=last`      |

use chrono::{NaiveDate, NaiveDateTime, TimeDelta, Timelike};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Predicate over a single meeting time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UnaryPredicate {
    /// Strictly before the given instant.
    Before(NaiveDateTime),
    /// Strictly after the given instant.
    After(NaiveDateTime),
    /// Anything but the given instant.
    Not(NaiveDateTime),
    /// Exactly the given instant.
    Exactly(NaiveDateTime),
    /// Any slot on the given calendar date.
    OnDate(NaiveDate),
    /// Any slot not on the given calendar date.
    NotOnDate(NaiveDate),
    /// Slots whose hour lies in `first..=last`.
    HourBetween { first: u32, last: u32 },
}

impl UnaryPredicate {
    pub fn holds(&self, value: NaiveDateTime) -> bool {
        match *self {
            Self::Before(t) => value < t,
            Self::After(t) => value > t,
            Self::Not(t) => value != t,
            Self::Exactly(t) => value == t,
            Self::OnDate(d) => value.date() == d,
            Self::NotOnDate(d) => value.date() != d,
            Self::HourBetween { first, last } => (first..=last).contains(&value.hour()),
        }
    }
}

impl fmt::Display for UnaryPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before(t) => write!(f, "< {t}"),
            Self::After(t) => write!(f, "> {t}"),
            Self::Not(t) => write!(f, "!= {t}"),
            Self::Exactly(t) => write!(f, "== {t}"),
            Self::OnDate(d) => write!(f, "on {d}"),
            Self::NotOnDate(d) => write!(f, "not on {d}"),
            Self::HourBetween { first, last } => write!(f, "in {first:02}h..={last:02}h"),
        }
    }
}

/// Relation between a left and a right meeting time.
///
/// Every relation has a reverse such that `r.holds(a, b) == r.reverse().holds(b, a)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Relation {
    Equal,
    NotEqual,
    /// Left strictly earlier than right.
    Before,
    /// Left strictly later than right.
    After,
    SameDay,
    DifferentDay,
    /// The two times are at least this many hours apart, in either order.
    AtLeastHoursApart(u32),
}

impl Relation {
    pub fn holds(&self, left: NaiveDateTime, right: NaiveDateTime) -> bool {
        match *self {
            Self::Equal => left == right,
            Self::NotEqual => left != right,
            Self::Before => left < right,
            Self::After => left > right,
            Self::SameDay => left.date() == right.date(),
            Self::DifferentDay => left.date() != right.date(),
            Self::AtLeastHoursApart(hours) => {
                (left - right).abs() >= TimeDelta::hours(i64::from(hours))
            }
        }
    }

    /// Relation that holds for `(right, left)` exactly when `self` holds for `(left, right)`.
    pub const fn reverse(self) -> Self {
        match self {
            Self::Before => Self::After,
            Self::After => Self::Before,
            symmetric => symmetric,
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Before => "<",
            Self::After => ">",
            Self::SameDay => "same day as",
            Self::DifferentDay => "different day from",
            Self::AtLeastHoursApart(_) => "apart from",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AtLeastHoursApart(hours) => write!(f, ">= {hours}h apart from"),
            other => f.write_str(other.symbol()),
        }
    }
}
