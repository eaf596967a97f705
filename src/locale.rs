use crate::consts::{DAYS_PER_WEEK, DEFAULT_LOCALE};
use crate::types::{Month, Year};

/// Label tables for one language. Weekday labels are stored Sunday-first;
/// month labels January-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub code: &'static str,
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
    /// Appended when rendering a year label.
    pub year_suffix: &'static str,
    /// Hosts should place the year selector before the month selector.
    pub show_year_before_month: bool,
}

pub const EN: Locale = Locale {
    code: "en",
    weekdays: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    year_suffix: "",
    show_year_before_month: false,
};

pub const JA: Locale = Locale {
    code: "ja",
    weekdays: ["日", "月", "火", "水", "木", "金", "土"],
    months: [
        "1月", "2月", "3月", "4月", "5月", "6月", "7月", "8月", "9月", "10月", "11月", "12月",
    ],
    year_suffix: "年",
    show_year_before_month: true,
};

const TABLES: [&Locale; 2] = [&EN, &JA];

impl Locale {
    /// Table for a locale code, falling back to the default locale when the
    /// code is unknown.
    pub fn lookup(code: &str) -> &'static Self {
        match TABLES.iter().copied().find(|locale| locale.code == code) {
            Some(locale) => locale,
            None => {
                log::warn!("unknown locale {code:?}, falling back to {DEFAULT_LOCALE:?}");
                &EN
            }
        }
    }

    /// Weekday labels rotated so the given first weekday leads the row.
    pub fn weekday_labels(&self, first_weekday: u8) -> [&'static str; 7] {
        let first = usize::from(first_weekday % DAYS_PER_WEEK);
        let mut labels = [""; 7];
        for (offset, slot) in labels.iter_mut().enumerate() {
            *slot = self.weekdays[(offset + first) % usize::from(DAYS_PER_WEEK)];
        }
        labels
    }

    pub fn month_label(&self, month: Month) -> &'static str {
        self.months[usize::from(month.get() - 1)]
    }

    /// Year rendered with the locale's suffix.
    pub fn year_label(&self, year: Year) -> String {
        format!("{}{}", year.get(), self.year_suffix)
    }
}
