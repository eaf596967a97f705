mod consts;
mod format;
mod grid;
mod locale;
mod picker;
mod prelude;
mod range;
mod types;
mod view;

#[cfg(test)]
mod test_utils;

pub use consts::*;
pub use format::{FormatSpec, Segment, Token};
pub use grid::{Grid, GridCell};
pub use locale::Locale;
pub use picker::{ChangeHook, CloseHook, OpenHook, Picker, PickerConfig, PositionHint, ViewSummary};
pub use range::{BoundsError, DateBounds};
pub use types::{Day, Month, Year};
pub use view::{NavStep, NavUnit, Navigator, SelectionInput, ViewState};

use crate::prelude::*;
use std::fmt;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use types::days_in_month;

/// A calendar day: year, month and day of month with no time component.
/// Two dates are equal iff all three fields match; ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: types::Year,
    month: types::Month,
    day: types::Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Input {input:?} does not match format {format:?}")]
    NoMatch { format: String, input: String },
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid navigation step: {_0:?}")]
    InvalidStep(String),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDate {
    /// Creates a date, validating each field (including the day against the
    /// month's length).
    ///
    /// # Errors
    /// Returns the `ParseError` of the first field out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year_nz = types::Year::new(year)?;
        let month_nz = types::Month::new(month)?;
        let day_nz = types::Day::new(day, year, month)?;
        Ok(Self {
            year: year_nz,
            month: month_nz,
            day: day_nz,
        })
    }

    /// The current civil date, derived from the system clock's Unix day
    /// count. A clock before the epoch falls back to the epoch itself.
    pub fn today() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        let (year, month, day) = types::civil_from_unix_days(secs as i64 / SECONDS_PER_DAY);
        let year_nz = types::Year::clamped(year);
        let month_nz = types::Month::from_index(month.wrapping_sub(1));
        let day_nz = types::Day::clamped(day, year_nz.get(), month_nz.get());
        Self {
            year: year_nz,
            month: month_nz,
            day: day_nz,
        }
    }

    /// Returns the year as u16
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month as u8 (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month as u8
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> types::Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> types::Month {
        self.month
    }

    /// Weekday index of this date, 0 = Sunday through 6 = Saturday.
    pub const fn weekday(&self) -> u8 {
        types::weekday_of(self.year(), self.month(), self.day())
    }

    /// Same month with the day pinned to 1.
    pub const fn first_of_month(self) -> Self {
        Self {
            year: self.year,
            month: self.month,
            day: types::Day::first(),
        }
    }

    /// The following day, or `None` past the end of the supported calendar.
    pub fn next_day(self) -> Option<Self> {
        let (y, m, d) = (self.year(), self.month(), self.day());
        if d < days_in_month(y, m) {
            Self::new(y, m, d + 1).ok()
        } else if m < MAX_MONTH {
            Self::new(y, m + 1, MIN_DAY).ok()
        } else if y < MAX_YEAR {
            Self::new(y + 1, JANUARY, MIN_DAY).ok()
        } else {
            None
        }
    }

    /// The preceding day, or `None` before the start of the supported
    /// calendar.
    pub fn prev_day(self) -> Option<Self> {
        let (y, m, d) = (self.year(), self.month(), self.day());
        if d > MIN_DAY {
            Self::new(y, m, d - 1).ok()
        } else if m > JANUARY {
            Self::new(y, m - 1, days_in_month(y, m - 1)).ok()
        } else if y > 1 {
            Self::new(y - 1, DECEMBER, DAYS_IN_MONTH[DECEMBER as usize]).ok()
        } else {
            None
        }
    }

    /// Shifts by whole months. The day is clamped to the target month's
    /// length and the year saturates at the supported calendar's edges.
    pub fn add_months(self, delta: i32) -> Self {
        let months = i64::from(self.year()) * i64::from(MAX_MONTH)
            + i64::from(self.month() - 1)
            + i64::from(delta);
        let months = months.clamp(
            i64::from(MAX_MONTH),
            i64::from(MAX_YEAR) * i64::from(MAX_MONTH) + i64::from(MAX_MONTH - 1),
        );
        let year = types::Year::clamped(months.div_euclid(i64::from(MAX_MONTH)));
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let month = types::Month::from_index(months.rem_euclid(i64::from(MAX_MONTH)) as u8);
        let day = types::Day::clamped(self.day(), year.get(), month.get());
        Self { year, month, day }
    }

    /// Shifts by whole years, clamping and saturating like `add_months`.
    pub fn add_years(self, delta: i32) -> Self {
        self.add_months(delta.saturating_mul(i32::from(MAX_MONTH)))
    }

    /// First of January for a year clamped into the supported calendar.
    pub(crate) fn year_start(year: u16) -> Self {
        let year = types::Year::clamped(i64::from(year));
        Self {
            year,
            month: types::Month::from_index(0),
            day: types::Day::first(),
        }
    }

    /// Last of December for a year clamped into the supported calendar.
    pub(crate) fn year_end(year: u16) -> Self {
        let year = types::Year::clamped(i64::from(year));
        let month = types::Month::from_index(MAX_MONTH - 1);
        let day = types::Day::clamped(DAYS_IN_MONTH[DECEMBER as usize], year.get(), month.get());
        Self { year, month, day }
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year.get(),
            self.month.get(),
            self.day.get()
        )
    }
}

impl FromStr for CalendarDate {
    type Err = ParseError;

    /// Parses the canonical `%Y-%m-%d` rendering.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatSpec::compile(DEFAULT_DATE_FORMAT).parse(s)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
