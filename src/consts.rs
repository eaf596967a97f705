/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for pinned view dates
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Weekdays per calendar row
pub const DAYS_PER_WEEK: u8 = 7;

/// Rows in a rendered month grid
pub const GRID_ROWS: usize = 6;
/// Columns in a rendered month grid (one per weekday)
pub const GRID_COLS: usize = DAYS_PER_WEEK as usize;
/// Total cells in a rendered month grid; fixed regardless of month length
pub const GRID_CELLS: usize = GRID_ROWS * GRID_COLS;

/// Marker character introducing a format token
pub const TOKEN_MARKER: char = '%';

/// Separator between the two endpoints of a bounds string
pub const BOUNDS_SEPARATOR: char = '/';

/// Token format used when none is configured
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Locale code used when none is configured or the requested one is unknown
pub const DEFAULT_LOCALE: &str = "en";

/// Lower year bound used when no minimum is configured
pub const DEFAULT_MIN_YEAR: u16 = 1900;

/// Years past the current one covered by the default upper bound
pub const DEFAULT_MAX_YEAR_AHEAD: u16 = 10;

/// Seconds per civil day, for clock-to-date conversion
pub(crate) const SECONDS_PER_DAY: i64 = 86_400;
