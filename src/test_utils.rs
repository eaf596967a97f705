//! Shared constructors for unit tests.

use crate::{CalendarDate, DateBounds};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).expect("valid test date")
}

pub fn bounds(min: (u16, u8, u8), max: (u16, u8, u8)) -> DateBounds {
    DateBounds::new(date(min.0, min.1, min.2), date(max.0, max.1, max.2))
        .expect("valid test bounds")
}

/// Bounds comfortably containing every date the tests touch.
pub fn wide_bounds() -> DateBounds {
    bounds((1900, 1, 1), (2100, 12, 31))
}
