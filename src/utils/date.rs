use chrono::{Datelike, Local, NaiveDate};

/// Output format of the date picker, e.g. "05 Mar 2024".
pub const PICKER_FORMAT: &str = "%d %b %Y";

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn format_picker_date(date: NaiveDate) -> String {
    date.format(PICKER_FORMAT).to_string()
}

/// Number of days in the given month (1-based), 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return 0;
    };
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };

    match next_first {
        Some(next) => (next - first).num_days() as u32,
        None => 31,
    }
}

/// Column (0 = Sunday) of the first day of the month in a Sunday-first grid.
pub fn leading_blanks(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}
