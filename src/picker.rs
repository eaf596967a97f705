use std::fmt;
use std::ops::RangeInclusive;

use crate::consts::{
    DAYS_PER_WEEK, DEFAULT_DATE_FORMAT, DEFAULT_LOCALE, DEFAULT_MAX_YEAR_AHEAD, DEFAULT_MIN_YEAR,
    MAX_YEAR,
};
use crate::format::FormatSpec;
use crate::grid::Grid;
use crate::locale::Locale;
use crate::range::DateBounds;
use crate::view::{NavStep, NavUnit, Navigator, SelectionInput, ViewState};
use crate::CalendarDate;

/// Called after the session opens, with the freshly established state.
pub type OpenHook = Box<dyn FnMut(&ViewState)>;
/// Called after the session closes.
pub type CloseHook = Box<dyn FnMut()>;
/// Called after a selection commit, with the formatted date and the
/// post-commit state.
pub type ChangeHook = Box<dyn FnMut(&str, &ViewState)>;

/// Placement metadata the core stores for the Host and never interprets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PositionHint {
    pub position: Option<String>,
    pub left: Option<String>,
    pub top: Option<String>,
}

/// Per-instance configuration; resolved once at construction and immutable
/// for the session's lifetime. Every field has a defined fallback, so
/// resolution never fails.
pub struct PickerConfig {
    /// Token format used for both display and parsing.
    pub date_format: String,
    /// Locale code; unknown codes fall back to the default table.
    pub locale: String,
    /// Custom label table; takes precedence over `locale` when set.
    pub locale_table: Option<Locale>,
    /// First weekday of each grid row; normalized as `abs(value) % 7`.
    pub first_day: i32,
    /// Earliest selectable date, as a date or a `date_format` string.
    pub min_date: SelectionInput,
    /// Latest selectable date, as a date or a `date_format` string.
    pub max_date: SelectionInput,
    /// Year fallback when `min_date` is empty or unparsable.
    pub min_year: u16,
    /// Year fallback when `max_date` is empty or unparsable; defaults to
    /// ten years past the current one.
    pub max_year: Option<u16>,
    /// Opaque mount handle echoed back to the Host.
    pub mount: Option<String>,
    pub on_open: Option<OpenHook>,
    pub on_close: Option<CloseHook>,
    pub on_change: Option<ChangeHook>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_owned(),
            locale: DEFAULT_LOCALE.to_owned(),
            locale_table: None,
            first_day: 0,
            min_date: SelectionInput::Empty,
            max_date: SelectionInput::Empty,
            min_year: DEFAULT_MIN_YEAR,
            max_year: None,
            mount: None,
            on_open: None,
            on_close: None,
            on_change: None,
        }
    }
}

impl fmt::Debug for PickerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickerConfig")
            .field("date_format", &self.date_format)
            .field("locale", &self.locale)
            .field("locale_table", &self.locale_table)
            .field("first_day", &self.first_day)
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("min_year", &self.min_year)
            .field("max_year", &self.max_year)
            .field("mount", &self.mount)
            .field("on_open", &self.on_open.is_some())
            .field("on_close", &self.on_close.is_some())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Header-row summary of the current view, ready for a Host to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSummary {
    pub year: u16,
    /// Month number, 1-12.
    pub month: u8,
    /// Year with the locale's suffix applied.
    pub year_label: String,
    pub month_label: &'static str,
    /// The locale asks for the year selector before the month selector.
    pub show_year_before_month: bool,
    /// Weekday labels rotated to the session's first weekday.
    pub weekday_labels: [&'static str; 7],
    /// Year span of the bounds, for populating a year selector.
    pub year_range: RangeInclusive<u16>,
    pub prev_year_disabled: bool,
    pub prev_month_disabled: bool,
    pub next_year_disabled: bool,
    pub next_month_disabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open,
    Destroyed,
}

/// One date-picking session: wires the format engine, locale table, bounds
/// and navigator together, tracks the open/closed lifecycle and dispatches
/// the Host notifications.
///
/// Every operation is a silent no-op once the session is destroyed.
pub struct Picker {
    navigator: Navigator,
    locale: Locale,
    state: Option<ViewState>,
    phase: Phase,
    position: Option<PositionHint>,
    mount: Option<String>,
    on_open: Option<OpenHook>,
    on_close: Option<CloseHook>,
    on_change: Option<ChangeHook>,
}

impl Picker {
    /// Builds a session from its configuration. Configuration problems are
    /// resolved to fallbacks, never surfaced.
    pub fn new(config: PickerConfig) -> Self {
        let PickerConfig {
            date_format,
            locale,
            locale_table,
            first_day,
            min_date,
            max_date,
            min_year,
            max_year,
            mount,
            on_open,
            on_close,
            on_change,
        } = config;

        let format = FormatSpec::compile(&date_format);
        let locale = locale_table.unwrap_or_else(|| *Locale::lookup(&locale));
        #[allow(clippy::cast_possible_truncation)]
        let first_weekday = (first_day.unsigned_abs() % u32::from(DAYS_PER_WEEK)) as u8;
        let bounds = resolve_bounds(&format, min_date, max_date, min_year, max_year);

        Self {
            navigator: Navigator::new(bounds, format),
            locale,
            state: Some(ViewState::new(first_weekday)),
            phase: Phase::Closed,
            position: None,
            mount,
            on_open,
            on_close,
            on_change,
        }
    }

    /// Opens the session: establishes the view from `input`, stores the
    /// position hint and notifies the Host. Re-opening an open session
    /// re-runs the selection and notifies again.
    pub fn open(&mut self, input: impl Into<SelectionInput>, position: Option<PositionHint>) {
        if self.phase == Phase::Destroyed {
            return;
        }
        let Some(state) = self.state.as_mut() else {
            return;
        };
        self.navigator.select(state, input.into());
        if position.is_some() {
            self.position = position;
        }
        self.phase = Phase::Open;
        log::debug!("session opened at {}", state.view_date());
        if let Some(hook) = self.on_open.as_mut() {
            hook(state);
        }
    }

    /// Records a day-cell commit reported by the Host and notifies it with
    /// the formatted selection. Hosts only report clicks on dated in-range
    /// cells; a commit that yields no selection notifies nobody.
    pub fn commit(&mut self, input: impl Into<SelectionInput>) {
        if self.phase == Phase::Destroyed {
            return;
        }
        let Some(state) = self.state.as_mut() else {
            return;
        };
        self.navigator.select(state, input.into());
        if let Some(date) = state.selected() {
            let text = self.navigator.format().format(date);
            if let Some(hook) = self.on_change.as_mut() {
                hook(&text, state);
            }
        }
    }

    /// Moves the view by a relative amount of months or years.
    pub fn navigate(&mut self, amount: i32, unit: NavUnit) {
        if self.phase == Phase::Destroyed {
            return;
        }
        if let Some(state) = self.state.as_mut() {
            self.navigator.navigate(state, amount, unit);
        }
    }

    pub fn navigate_step(&mut self, step: NavStep) {
        self.navigate(step.amount, step.unit);
    }

    /// Absolute view-year move, as reported from a Host's year selector.
    pub fn set_view_year(&mut self, year: u16) {
        if self.phase == Phase::Destroyed {
            return;
        }
        if let Some(state) = self.state.as_mut() {
            self.navigator.set_view_year(state, year);
        }
    }

    /// Absolute view-month move, as reported from a Host's month selector.
    pub fn set_view_month(&mut self, month: u8) {
        if self.phase == Phase::Destroyed {
            return;
        }
        if let Some(state) = self.state.as_mut() {
            self.navigator.set_view_month(state, month);
        }
    }

    /// Closes the session, clearing the position hint but keeping the
    /// selection for a later reopen, then notifies the Host.
    pub fn close(&mut self) {
        if self.phase == Phase::Destroyed {
            return;
        }
        self.phase = Phase::Closed;
        self.position = None;
        log::debug!("session closed");
        if let Some(hook) = self.on_close.as_mut() {
            hook();
        }
    }

    /// Tears the session down: detaches the Host hooks and releases the
    /// view state. Idempotent, and every later operation is a silent
    /// no-op; no notification fires.
    pub fn destroy(&mut self) {
        self.phase = Phase::Destroyed;
        self.position = None;
        self.state = None;
        self.on_open = None;
        self.on_close = None;
        self.on_change = None;
    }

    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    pub fn is_destroyed(&self) -> bool {
        self.phase == Phase::Destroyed
    }

    pub fn state(&self) -> Option<&ViewState> {
        self.state.as_ref()
    }

    pub fn selected(&self) -> Option<CalendarDate> {
        self.state.as_ref().and_then(ViewState::selected)
    }

    /// The selection rendered through the session's date format.
    pub fn formatted_selection(&self) -> Option<String> {
        self.selected()
            .map(|date| self.navigator.format().format(date))
    }

    pub fn bounds(&self) -> &DateBounds {
        self.navigator.bounds()
    }

    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    pub fn position(&self) -> Option<&PositionHint> {
        self.position.as_ref()
    }

    pub fn mount(&self) -> Option<&str> {
        self.mount.as_deref()
    }

    /// A fresh 42-cell grid for the current view, or `None` once the
    /// session is destroyed.
    pub fn grid(&self) -> Option<Grid> {
        let state = self.state.as_ref()?;
        Some(Grid::build(
            state.view_date(),
            self.navigator.bounds(),
            state.first_weekday(),
            state.selected(),
        ))
    }

    /// Header-row summary for the current view, or `None` once the session
    /// is destroyed.
    pub fn view_summary(&self) -> Option<ViewSummary> {
        let state = self.state.as_ref()?;
        let view = state.view_date();
        Some(ViewSummary {
            year: view.year(),
            month: view.month(),
            year_label: self.locale.year_label(view.year_typed()),
            month_label: self.locale.month_label(view.month_typed()),
            show_year_before_month: self.locale.show_year_before_month,
            weekday_labels: self.locale.weekday_labels(state.first_weekday()),
            year_range: self.navigator.bounds().year_range(),
            prev_year_disabled: self.navigator.prev_year_disabled(state),
            prev_month_disabled: self.navigator.prev_month_disabled(state),
            next_year_disabled: self.navigator.next_year_disabled(state),
            next_month_disabled: self.navigator.next_month_disabled(state),
        })
    }
}

impl fmt::Debug for Picker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Picker")
            .field("navigator", &self.navigator)
            .field("locale", &self.locale.code)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("position", &self.position)
            .field("mount", &self.mount)
            .finish_non_exhaustive()
    }
}

/// Resolves configured bounds to a usable range: explicit dates win, then
/// format-parsed strings, then the year fallbacks. Inverted endpoints are
/// swapped rather than rejected.
fn resolve_bounds(
    format: &FormatSpec,
    min_date: SelectionInput,
    max_date: SelectionInput,
    min_year: u16,
    max_year: Option<u16>,
) -> DateBounds {
    let max_year = max_year
        .unwrap_or_else(|| {
            CalendarDate::today()
                .year()
                .saturating_add(DEFAULT_MAX_YEAR_AHEAD)
        })
        .min(MAX_YEAR);

    let min = parse_bound(format, min_date, "min")
        .unwrap_or_else(|| CalendarDate::year_start(min_year));
    let max =
        parse_bound(format, max_date, "max").unwrap_or_else(|| CalendarDate::year_end(max_year));

    if min > max {
        log::warn!("configured bounds are inverted ({min} > {max}); swapping");
    }
    DateBounds::canonical(min, max)
}

fn parse_bound(format: &FormatSpec, input: SelectionInput, which: &str) -> Option<CalendarDate> {
    match input {
        SelectionInput::Date(date) => Some(date),
        SelectionInput::Empty => None,
        SelectionInput::Text(text) => match format.parse(&text) {
            Ok(date) => Some(date),
            Err(err) => {
                log::warn!("ignoring unparsable {which} bound {text:?}: {err}");
                None
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn year_bounds_config(min_year: u16, max_year: u16) -> PickerConfig {
        PickerConfig {
            min_year,
            max_year: Some(max_year),
            ..PickerConfig::default()
        }
    }

    /// Counts every notification and remembers the last change payload.
    #[derive(Debug, Default)]
    struct HookLog {
        opened: usize,
        closed: usize,
        changed: usize,
        last_change: Option<String>,
    }

    fn hooked_picker(mut config: PickerConfig) -> (Picker, Rc<RefCell<HookLog>>) {
        let hook_log = Rc::new(RefCell::new(HookLog::default()));

        let opens = Rc::clone(&hook_log);
        config.on_open = Some(Box::new(move |_| opens.borrow_mut().opened += 1));
        let closes = Rc::clone(&hook_log);
        config.on_close = Some(Box::new(move || closes.borrow_mut().closed += 1));
        let changes = Rc::clone(&hook_log);
        config.on_change = Some(Box::new(move |text, _| {
            let mut entry = changes.borrow_mut();
            entry.changed += 1;
            entry.last_change = Some(text.to_owned());
        }));

        (Picker::new(config), hook_log)
    }

    #[test]
    fn test_default_config_resolution() {
        let picker = Picker::new(PickerConfig::default());
        assert_eq!(picker.locale().code, "en");
        assert_eq!(picker.bounds().min(), date(DEFAULT_MIN_YEAR, 1, 1));
        assert_eq!(
            picker.bounds().max().year(),
            CalendarDate::today().year() + DEFAULT_MAX_YEAR_AHEAD
        );
        assert!(!picker.is_open());
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn test_first_day_normalization() {
        let config = PickerConfig {
            first_day: -8,
            ..PickerConfig::default()
        };
        let picker = Picker::new(config);
        assert_eq!(picker.state().map(ViewState::first_weekday), Some(1));

        let config = PickerConfig {
            first_day: 13,
            ..PickerConfig::default()
        };
        let picker = Picker::new(config);
        assert_eq!(picker.state().map(ViewState::first_weekday), Some(6));
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        let config = PickerConfig {
            locale: "xx".to_owned(),
            ..PickerConfig::default()
        };
        assert_eq!(Picker::new(config).locale().code, "en");
    }

    #[test]
    fn test_custom_locale_table_wins() {
        let table = Locale {
            code: "custom",
            ..crate::locale::EN
        };
        let config = PickerConfig {
            locale: "ja".to_owned(),
            locale_table: Some(table),
            ..PickerConfig::default()
        };
        assert_eq!(Picker::new(config).locale().code, "custom");
    }

    #[test]
    fn test_string_bounds_parsed_with_session_format() {
        let config = PickerConfig {
            date_format: "%d/%m/%Y".to_owned(),
            min_date: "01/01/2020".into(),
            max_date: "31/12/2020".into(),
            ..PickerConfig::default()
        };
        let picker = Picker::new(config);
        assert_eq!(picker.bounds().min(), date(2020, 1, 1));
        assert_eq!(picker.bounds().max(), date(2020, 12, 31));
    }

    #[test]
    fn test_unparsable_bound_falls_back_to_years() {
        let config = PickerConfig {
            min_date: "garbage".into(),
            min_year: 1990,
            max_year: Some(1999),
            ..PickerConfig::default()
        };
        let picker = Picker::new(config);
        assert_eq!(picker.bounds().min(), date(1990, 1, 1));
        assert_eq!(picker.bounds().max(), date(1999, 12, 31));
    }

    #[test]
    fn test_inverted_bounds_are_swapped() {
        let config = PickerConfig {
            min_date: date(2021, 6, 1).into(),
            max_date: date(2019, 6, 1).into(),
            ..PickerConfig::default()
        };
        let picker = Picker::new(config);
        assert_eq!(picker.bounds().min(), date(2019, 6, 1));
        assert_eq!(picker.bounds().max(), date(2021, 6, 1));
    }

    #[test]
    fn test_open_establishes_view_and_notifies_once() {
        let (mut picker, hook_log) = hooked_picker(year_bounds_config(2019, 2021));
        picker.open("2020-03-10", None);

        assert!(picker.is_open());
        assert_eq!(picker.selected(), Some(date(2020, 3, 10)));
        assert_eq!(picker.state().map(ViewState::view_date), Some(date(2020, 3, 1)));
        assert_eq!(hook_log.borrow().opened, 1);
        assert_eq!(hook_log.borrow().changed, 0);
    }

    #[test]
    fn test_open_hook_sees_post_mutation_state() {
        let seen = Rc::new(RefCell::new(None));
        let seen_in_hook = Rc::clone(&seen);
        let mut config = year_bounds_config(2019, 2021);
        config.on_open = Some(Box::new(move |state| {
            *seen_in_hook.borrow_mut() = Some((state.selected(), state.view_date()));
        }));

        let mut picker = Picker::new(config);
        picker.open("2020-03-10", None);
        assert_eq!(
            *seen.borrow(),
            Some((Some(date(2020, 3, 10)), date(2020, 3, 1)))
        );
    }

    #[test]
    fn test_reopen_notifies_again() {
        let (mut picker, hook_log) = hooked_picker(year_bounds_config(2019, 2021));
        picker.open("2020-03-10", None);
        picker.open("2020-04-20", None);

        assert_eq!(hook_log.borrow().opened, 2);
        assert_eq!(picker.selected(), Some(date(2020, 4, 20)));
    }

    #[test]
    fn test_open_with_empty_input_clears_selection() {
        let (mut picker, _) = hooked_picker(PickerConfig::default());
        picker.open("2020-03-10", None);
        picker.open(SelectionInput::Empty, None);
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn test_open_stores_position_hint() {
        let (mut picker, _) = hooked_picker(PickerConfig::default());
        let hint = PositionHint {
            position: Some("absolute".to_owned()),
            left: Some("10px".to_owned()),
            top: Some("20px".to_owned()),
        };
        picker.open("2020-03-10", Some(hint.clone()));
        assert_eq!(picker.position(), Some(&hint));
    }

    #[test]
    fn test_commit_notifies_with_formatted_payload() {
        let (mut picker, hook_log) = hooked_picker(year_bounds_config(2019, 2021));
        picker.open("2020-03-10", None);
        picker.commit(date(2020, 3, 17));

        let entry = hook_log.borrow();
        assert_eq!(entry.changed, 1);
        assert_eq!(entry.last_change.as_deref(), Some("2020-03-17"));
        drop(entry);
        assert_eq!(picker.selected(), Some(date(2020, 3, 17)));
    }

    #[test]
    fn test_commit_empty_does_not_notify() {
        let (mut picker, hook_log) = hooked_picker(year_bounds_config(2019, 2021));
        picker.open("2020-03-10", None);
        picker.commit(SelectionInput::Empty);

        assert_eq!(hook_log.borrow().changed, 0);
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn test_commit_uses_session_format() {
        let mut config = year_bounds_config(2019, 2021);
        config.date_format = "%d/%m/%Y".to_owned();
        let (mut picker, hook_log) = hooked_picker(config);
        picker.open(SelectionInput::Empty, None);
        picker.commit("17/03/2020");

        assert_eq!(hook_log.borrow().last_change.as_deref(), Some("17/03/2020"));
    }

    #[test]
    fn test_close_keeps_selection_and_clears_position() {
        let (mut picker, hook_log) = hooked_picker(year_bounds_config(2019, 2021));
        picker.open("2020-03-10", Some(PositionHint::default()));
        picker.close();

        assert!(!picker.is_open());
        assert_eq!(picker.position(), None);
        assert_eq!(picker.selected(), Some(date(2020, 3, 10)));
        assert_eq!(hook_log.borrow().closed, 1);
    }

    #[test]
    fn test_notification_order_follows_operations() {
        let (mut picker, hook_log) = hooked_picker(year_bounds_config(2019, 2021));
        picker.open("2020-03-10", None);
        picker.commit(date(2020, 3, 11));
        picker.close();
        picker.open("2020-03-12", None);

        let entry = hook_log.borrow();
        assert_eq!((entry.opened, entry.changed, entry.closed), (2, 1, 1));
    }

    #[test]
    fn test_destroy_is_idempotent_and_silences_everything() {
        let (mut picker, hook_log) = hooked_picker(year_bounds_config(2019, 2021));
        picker.open("2020-03-10", None);
        picker.destroy();
        picker.destroy();

        picker.open("2020-04-20", None);
        picker.commit(date(2020, 4, 21));
        picker.close();
        picker.navigate(1, NavUnit::Month);
        picker.set_view_year(2019);
        picker.set_view_month(7);

        let entry = hook_log.borrow();
        assert_eq!((entry.opened, entry.changed, entry.closed), (1, 0, 0));
        drop(entry);

        assert!(picker.is_destroyed());
        assert_eq!(picker.state(), None);
        assert_eq!(picker.grid(), None);
        assert_eq!(picker.view_summary(), None);
        assert_eq!(picker.selected(), None);
    }

    #[test]
    fn test_navigation_moves_the_view() {
        let (mut picker, _) = hooked_picker(year_bounds_config(2019, 2021));
        picker.open("2020-03-10", None);

        picker.navigate(1, NavUnit::Month);
        assert_eq!(picker.state().map(ViewState::view_date), Some(date(2020, 4, 1)));

        picker.navigate_step("-1y".parse().unwrap());
        assert_eq!(picker.state().map(ViewState::view_date), Some(date(2019, 4, 1)));

        picker.set_view_year(2021);
        picker.set_view_month(12);
        assert_eq!(
            picker.state().map(ViewState::view_date),
            Some(date(2021, 12, 1))
        );
    }

    #[test]
    fn test_grid_reflects_session_state() {
        let (mut picker, _) = hooked_picker(year_bounds_config(2020, 2020));
        picker.open("2020-03-10", None);

        let grid = picker.grid().expect("live session");
        assert_eq!(grid.anchor(), date(2020, 3, 1));
        let selected: Vec<_> = grid
            .cells()
            .iter()
            .filter(|cell| cell.is_selected)
            .collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].date, Some(date(2020, 3, 10)));
    }

    #[test]
    fn test_out_of_bounds_selection_pins_view_to_boundary() {
        let (mut picker, _) = hooked_picker(year_bounds_config(2020, 2020));
        picker.open("2019-06-15", None);

        assert_eq!(picker.selected(), Some(date(2019, 6, 15)));
        assert_eq!(picker.state().map(ViewState::view_date), Some(date(2020, 1, 1)));

        let grid = picker.grid().expect("live session");
        assert!(grid
            .cells()
            .iter()
            .flat_map(|cell| cell.date)
            .all(|d| d >= date(2020, 1, 1)));

        let summary = picker.view_summary().expect("live session");
        assert!(summary.prev_year_disabled);
        assert!(summary.prev_month_disabled);
        assert!(!summary.next_year_disabled);
        assert!(!summary.next_month_disabled);
    }

    #[test]
    fn test_view_summary_labels() {
        let mut config = year_bounds_config(2019, 2021);
        config.locale = "ja".to_owned();
        config.first_day = 1;
        let (mut picker, _) = hooked_picker(config);
        picker.open("2020-03-10", None);

        let summary = picker.view_summary().expect("live session");
        assert_eq!(summary.year, 2020);
        assert_eq!(summary.month, 3);
        assert_eq!(summary.year_label, "2020年");
        assert_eq!(summary.month_label, "3月");
        assert!(summary.show_year_before_month);
        assert_eq!(summary.weekday_labels[0], "月");
        assert_eq!(summary.year_range, 2019..=2021);
    }

    #[test]
    fn test_formatted_selection() {
        let mut config = year_bounds_config(2019, 2021);
        config.date_format = "%d/%m/%Y".to_owned();
        let (mut picker, _) = hooked_picker(config);

        assert_eq!(picker.formatted_selection(), None);
        picker.open("10/03/2020", None);
        assert_eq!(picker.formatted_selection().as_deref(), Some("10/03/2020"));
    }

    #[test]
    fn test_mount_is_echoed() {
        let config = PickerConfig {
            mount: Some("#sidebar".to_owned()),
            ..PickerConfig::default()
        };
        assert_eq!(Picker::new(config).mount(), Some("#sidebar"));
    }

    #[test]
    fn test_missing_hooks_are_ignored() {
        let mut picker = Picker::new(year_bounds_config(2019, 2021));
        picker.open("2020-03-10", None);
        picker.commit(date(2020, 3, 11));
        picker.close();
        assert_eq!(picker.selected(), Some(date(2020, 3, 11)));
    }
}
