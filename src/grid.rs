use crate::consts::{DAYS_PER_WEEK, GRID_CELLS, GRID_COLS};
use crate::range::DateBounds;
use crate::CalendarDate;

/// One slot of the 6x7 month view.
///
/// A slot outside the selectable bounds carries no date and renders as a
/// placeholder; it is never clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    pub date: Option<CalendarDate>,
    /// The day belongs to a month adjacent to the anchor month.
    pub is_other_month: bool,
    /// The day equals the session's selected date.
    pub is_selected: bool,
    /// The day lies within the selectable bounds.
    pub is_in_range: bool,
}

impl GridCell {
    const fn placeholder() -> Self {
        Self {
            date: None,
            is_other_month: false,
            is_selected: false,
            is_in_range: false,
        }
    }
}

/// A fully materialized month view: always exactly 42 cells in 6 rows of 7,
/// regardless of month length or first-weekday offset. Built fresh for each
/// render pass, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    anchor: CalendarDate,
    cells: [GridCell; GRID_CELLS],
}

impl Grid {
    /// Enumerates the view for the month containing `view_date`.
    ///
    /// The first cell is the nearest date on or before the month's first
    /// day whose weekday equals `first_weekday`; 42 sequential days follow.
    /// Days outside `bounds` (or outside the supported calendar entirely)
    /// become placeholders.
    pub fn build(
        view_date: CalendarDate,
        bounds: &DateBounds,
        first_weekday: u8,
        selected: Option<CalendarDate>,
    ) -> Self {
        let anchor = view_date.first_of_month();
        let back = (anchor.weekday() + DAYS_PER_WEEK - first_weekday % DAYS_PER_WEEK)
            % DAYS_PER_WEEK;

        // Walk back to the row start; steps past the calendar's first day
        // become leading placeholders.
        let mut start = anchor;
        let mut leading = 0usize;
        for _ in 0..back {
            match start.prev_day() {
                Some(prev) => start = prev,
                None => leading += 1,
            }
        }

        let mut cells = [GridCell::placeholder(); GRID_CELLS];
        let mut cursor = Some(start);
        for (index, cell) in cells.iter_mut().enumerate() {
            if index < leading {
                continue;
            }
            let Some(date) = cursor else {
                break;
            };
            if bounds.contains(date) {
                *cell = GridCell {
                    date: Some(date),
                    is_other_month: (date.year(), date.month()) != (anchor.year(), anchor.month()),
                    is_selected: selected == Some(date),
                    is_in_range: true,
                };
            }
            cursor = date.next_day();
        }

        Self { anchor, cells }
    }

    /// First day of the anchor month.
    pub const fn anchor(&self) -> CalendarDate {
        self.anchor
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// The six weekday-aligned rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(GRID_COLS)
    }
}
