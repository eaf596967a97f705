use std::fmt;
use std::str::FromStr;

use crate::consts::{DAYS_PER_WEEK, MIN_DAY};
use crate::format::FormatSpec;
use crate::range::DateBounds;
use crate::{CalendarDate, ParseError};

/// The month on display plus the committed selection for one session.
///
/// Owned by the `Picker` and written only through a `Navigator`; the view
/// date is always pinned to the first day of its month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    view_date: CalendarDate,
    selected: Option<CalendarDate>,
    first_weekday: u8,
}

impl ViewState {
    /// A fresh state anchored at the current month with no selection.
    /// `first_weekday` is normalized modulo a week.
    pub fn new(first_weekday: u8) -> Self {
        Self {
            view_date: CalendarDate::today().first_of_month(),
            selected: None,
            first_weekday: first_weekday % DAYS_PER_WEEK,
        }
    }

    /// First day of the month on display.
    pub const fn view_date(&self) -> CalendarDate {
        self.view_date
    }

    pub const fn selected(&self) -> Option<CalendarDate> {
        self.selected
    }

    /// Weekday index (0 = Sunday) leading each grid row.
    pub const fn first_weekday(&self) -> u8 {
        self.first_weekday
    }
}

/// Unit of a relative view move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavUnit {
    Month,
    Year,
}

/// A relative view move in the widget's compact `"+1m"` / `"-1y"` form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStep {
    pub amount: i32,
    pub unit: NavUnit,
}

impl fmt::Display for NavStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = match self.unit {
            NavUnit::Month => 'm',
            NavUnit::Year => 'y',
        };
        write!(f, "{:+}{unit}", self.amount)
    }
}

impl FromStr for NavStep {
    type Err = ParseError;

    /// Accepts exactly an optionally signed decimal count followed by a
    /// unit letter: `+1m`, `-1y`, `12m`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ParseError::InvalidStep(s.to_owned());

        let unit = match trimmed.chars().last() {
            Some('m') => NavUnit::Month,
            Some('y') => NavUnit::Year,
            _ => return Err(invalid()),
        };
        let count = &trimmed[..trimmed.len() - 1];
        let digits = count.strip_prefix(['+', '-']).unwrap_or(count);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let amount = count.parse::<i32>().map_err(|_| invalid())?;
        Ok(Self { amount, unit })
    }
}

/// Polymorphic input to `select`: a concrete date, text in the session's
/// date format, or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SelectionInput {
    #[default]
    Empty,
    Date(CalendarDate),
    Text(String),
}

impl From<CalendarDate> for SelectionInput {
    fn from(date: CalendarDate) -> Self {
        Self::Date(date)
    }
}

impl From<Option<CalendarDate>> for SelectionInput {
    fn from(date: Option<CalendarDate>) -> Self {
        date.map_or(Self::Empty, Self::Date)
    }
}

impl From<String> for SelectionInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for SelectionInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

/// Sole writer of a session's `ViewState`: applies relative moves and
/// absolute selections, and answers the boundary-disable questions hosts
/// use to grey out their controls.
#[derive(Debug, Clone)]
pub struct Navigator {
    bounds: DateBounds,
    format: FormatSpec,
}

impl Navigator {
    pub fn new(bounds: DateBounds, format: FormatSpec) -> Self {
        Self { bounds, format }
    }

    pub const fn bounds(&self) -> &DateBounds {
        &self.bounds
    }

    pub const fn format(&self) -> &FormatSpec {
        &self.format
    }

    /// Pins the view to the first day of `date`'s month, unclamped.
    pub fn set_view_date(&self, state: &mut ViewState, date: CalendarDate) {
        state.view_date = date.first_of_month();
    }

    /// Absolute year move from a host's year selector; an out-of-calendar
    /// year is ignored.
    pub fn set_view_year(&self, state: &mut ViewState, year: u16) {
        if let Ok(moved) = CalendarDate::new(year, state.view_date.month(), MIN_DAY) {
            state.view_date = moved;
        }
    }

    /// Absolute month move from a host's month selector; an invalid month
    /// number is ignored.
    pub fn set_view_month(&self, state: &mut ViewState, month: u8) {
        if let Ok(moved) = CalendarDate::new(state.view_date.year(), month, MIN_DAY) {
            state.view_date = moved;
        }
    }

    /// Moves the view by whole months or years, re-pinned to day 1.
    ///
    /// Deliberately unclamped: the view may leave the bounds so the user
    /// can still see that region; the disable predicates are the only
    /// boundary affordance.
    pub fn navigate(&self, state: &mut ViewState, amount: i32, unit: NavUnit) {
        let moved = match unit {
            NavUnit::Month => state.view_date.add_months(amount),
            NavUnit::Year => state.view_date.add_years(amount),
        };
        state.view_date = moved.first_of_month();
        log::debug!("view moved to {}", state.view_date);
    }

    pub fn navigate_step(&self, state: &mut ViewState, step: NavStep) {
        self.navigate(state, step.amount, step.unit);
    }

    /// Records a selection and re-bases the view month.
    ///
    /// Empty input or a failed parse clears the selection and bases the
    /// view on today. A parsed date is recorded as-is even when out of
    /// bounds; only the view month is clamped into bounds.
    pub fn select(&self, state: &mut ViewState, input: SelectionInput) {
        let parsed = match input {
            SelectionInput::Date(date) => Some(date),
            SelectionInput::Text(text) => self.format.parse(&text).ok(),
            SelectionInput::Empty => None,
        };
        state.selected = parsed;
        let base = parsed.unwrap_or_else(CalendarDate::today);
        state.view_date = self.bounds.clamp(base).first_of_month();
    }

    pub fn prev_year_disabled(&self, state: &ViewState) -> bool {
        state.view_date.year() <= self.bounds.min().year()
    }

    pub fn prev_month_disabled(&self, state: &ViewState) -> bool {
        let (view, min) = (state.view_date, self.bounds.min());
        view.year() < min.year() || (view.year() == min.year() && view.month() <= min.month())
    }

    pub fn next_year_disabled(&self, state: &ViewState) -> bool {
        state.view_date.year() >= self.bounds.max().year()
    }

    pub fn next_month_disabled(&self, state: &ViewState) -> bool {
        let (view, max) = (state.view_date, self.bounds.max());
        view.year() > max.year() || (view.year() == max.year() && view.month() >= max.month())
    }
}
