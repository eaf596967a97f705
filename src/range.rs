use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::BOUNDS_SEPARATOR;
use crate::prelude::*;
use crate::{CalendarDate, ParseError};

/// Inclusive `[min, max]` range of selectable dates.
/// The minimum must be less than or equal to the maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{min}/{max}")]
pub struct DateBounds {
    min: CalendarDate,
    max: CalendarDate,
}

/// Error type for date bounds operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoundsError {
    /// Minimum date is after maximum date.
    #[error("Invalid bounds: min ({min}) is after max ({max})")]
    Inverted {
        min: CalendarDate,
        max: CalendarDate,
    },

    /// Error parsing a bound date.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid bounds string.
    #[error("Invalid bounds format: {0}")]
    InvalidFormat(String),
}

impl DateBounds {
    /// Creates bounds with validation.
    ///
    /// # Errors
    /// Returns `BoundsError::Inverted` if min > max.
    pub fn new(min: CalendarDate, max: CalendarDate) -> Result<Self, BoundsError> {
        if min > max {
            return Err(BoundsError::Inverted { min, max });
        }
        Ok(Self { min, max })
    }

    /// Bounds spanning whole years: January 1st of `min_year` through
    /// December 31st of `max_year`, each clamped into the supported
    /// calendar.
    ///
    /// # Errors
    /// Returns `BoundsError::Inverted` if `min_year > max_year`.
    pub fn from_years(min_year: u16, max_year: u16) -> Result<Self, BoundsError> {
        Self::new(
            CalendarDate::year_start(min_year),
            CalendarDate::year_end(max_year),
        )
    }

    /// Orders the endpoints instead of failing, for callers resolving
    /// untrusted configuration.
    pub(crate) fn canonical(a: CalendarDate, b: CalendarDate) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Returns the earliest selectable date
    pub const fn min(&self) -> CalendarDate {
        self.min
    }

    /// Returns the latest selectable date
    pub const fn max(&self) -> CalendarDate {
        self.max
    }

    /// Checks if the bounds contain a given date (inclusive on both ends)
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.min <= date && date <= self.max
    }

    /// Nearest in-bounds date to the given one.
    pub fn clamp(&self, date: CalendarDate) -> CalendarDate {
        if date < self.min {
            self.min
        } else if date > self.max {
            self.max
        } else {
            date
        }
    }

    /// Inclusive year span, for host year selectors.
    pub fn year_range(&self) -> RangeInclusive<u16> {
        self.min.year()..=self.max.year()
    }
}

impl FromStr for DateBounds {
    type Err = BoundsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(BOUNDS_SEPARATOR).count();
        match separator_count {
            0 => Err(BoundsError::InvalidFormat(format!(
                "No bounds separator found (expected '{BOUNDS_SEPARATOR}'): {s}"
            ))),
            1 => {
                let pos = trimmed.find(BOUNDS_SEPARATOR).ok_or_else(|| {
                    BoundsError::InvalidFormat(format!(
                        "Separator '{BOUNDS_SEPARATOR}' not found despite count == 1"
                    ))
                })?;
                let min = trimmed[..pos].trim().parse::<CalendarDate>()?;
                let max = trimmed[pos + 1..].trim().parse::<CalendarDate>()?;
                Self::new(min, max)
            }
            _ => Err(BoundsError::InvalidFormat(format!(
                "Too many '{BOUNDS_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DateBounds {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateBounds {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
