//! Shared types used across weekplan crates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a project, assigned by the state store.
pub type ProjectId = u64;

/// Number of working days in the planning horizon (Monday..=Friday).
pub const HORIZON_DAYS: u8 = 5;

/// A working day inside the one-week horizon.
///
/// Serialized as its 1-based index (`1` = Monday, `5` = Friday), which is
/// the shape the `scheduledDay` field carries on the wire and in storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    /// All days of the horizon, earliest first.
    pub const ALL: [Day; HORIZON_DAYS as usize] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    /// Day for a 1-based index, or `None` outside `1..=5`.
    pub fn from_number(n: i64) -> Option<Self> {
        if (1..=i64::from(HORIZON_DAYS)).contains(&n) {
            Some(Self::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    /// 1-based index of this day.
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// 0-based slot index of this day.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
        }
    }

    /// Latest day a project with the given deadline may occupy.
    ///
    /// Deadlines past the horizon are clamped to Friday. Deadlines below 1
    /// cannot be met by any day and yield `None`.
    pub fn latest_for_deadline(deadline_days: i64) -> Option<Self> {
        if deadline_days < 1 {
            return None;
        }
        Self::from_number(deadline_days.min(i64::from(HORIZON_DAYS)))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.number()
    }
}

impl TryFrom<u8> for Day {
    type Error = InvalidDay;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Day::from_number(i64::from(n)).ok_or(InvalidDay(i64::from(n)))
    }
}

/// A day index outside the working week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("day {0} is outside the working week (1..=5)")]
pub struct InvalidDay(pub i64);

/// Where the scheduler put a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", content = "day", rename_all = "snake_case")]
pub enum Placement {
    Scheduled(Day),
    Unscheduled,
}

impl Placement {
    pub fn day(self) -> Option<Day> {
        match self {
            Placement::Scheduled(day) => Some(day),
            Placement::Unscheduled => None,
        }
    }

    pub fn is_scheduled(self) -> bool {
        matches!(self, Placement::Scheduled(_))
    }
}

impl From<Option<Day>> for Placement {
    fn from(day: Option<Day>) -> Self {
        day.map_or(Placement::Unscheduled, Placement::Scheduled)
    }
}
