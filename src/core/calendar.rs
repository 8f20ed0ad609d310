//! Drill-down date picker: Year -> Month -> Day.
//!
//! Only past or present dates can be picked. Selections that would land
//! after "today" are ignored rather than reported, and once the picker is
//! closed every operation is a no-op.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::utils::date;

/// How many years before the current one the year view offers.
pub const YEARS_BACK: i32 = 100;

pub const WEEKDAY_HEADER: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

const MONTH_SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const MONTH_LONG: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarView {
    Year,
    Month,
    Day,
}

/// The date handed back when a day is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectedDate(NaiveDate);

impl SelectedDate {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// "dd MMM yyyy", e.g. "05 Mar 2024".
    pub fn formatted(&self) -> String {
        date::format_picker_date(self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Open,
    Selected(SelectedDate),
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCell {
    /// 0-based month index.
    pub index: u32,
    pub name: &'static str,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    Blank,
    Day { day: u32, enabled: bool },
}

#[derive(Debug, Clone)]
pub struct CalendarPicker {
    today: NaiveDate,
    view: CalendarView,
    year: i32,
    month: u32, // 0-based
    day: u32,
    outcome: PickerOutcome,
}

impl Default for CalendarPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarPicker {
    pub fn new() -> Self {
        Self::with_today(date::today())
    }

    /// Picker anchored on an explicit "today"; the selection starts there.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            today,
            view: CalendarView::Year,
            year: today.year(),
            month: today.month0(),
            day: today.day(),
            outcome: PickerOutcome::Open,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn view(&self) -> CalendarView {
        self.view
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Selected month, 0-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn outcome(&self) -> PickerOutcome {
        self.outcome
    }

    pub fn is_open(&self) -> bool {
        self.outcome == PickerOutcome::Open
    }

    fn current_year(&self) -> i32 {
        self.today.year()
    }

    fn current_month(&self) -> u32 {
        self.today.month0()
    }

    fn days_in_selected_month(&self) -> u32 {
        date::days_in_month(self.year, self.month + 1)
    }

    pub fn first_offered_year(&self) -> i32 {
        self.current_year() - YEARS_BACK
    }

    pub fn select_year(&mut self, year: i32) {
        if !self.is_open() || self.view != CalendarView::Year {
            return;
        }
        if year < self.first_offered_year() || year > self.current_year() {
            debug!(year, "year outside the offered range ignored");
            return;
        }

        self.year = year;
        self.view = CalendarView::Month;
    }

    /// `month` is 0-based.
    pub fn select_month(&mut self, month: u32) {
        if !self.is_open() || self.view != CalendarView::Month {
            return;
        }
        if !self.is_month_enabled(month) {
            debug!(year = self.year, month, "future month ignored");
            return;
        }

        self.month = month;
        self.day = self.day.min(self.days_in_selected_month());
        self.view = CalendarView::Day;
    }

    /// Accepting a day closes the picker and returns the chosen date.
    pub fn select_day(&mut self, day: u32) -> Option<SelectedDate> {
        if !self.is_open() || self.view != CalendarView::Day {
            return None;
        }

        let candidate = NaiveDate::from_ymd_opt(self.year, self.month + 1, day)?;
        if candidate > self.today {
            debug!(%candidate, "future day ignored");
            return None;
        }

        self.day = day;
        let selected = SelectedDate(candidate);
        self.outcome = PickerOutcome::Selected(selected);
        Some(selected)
    }

    pub fn back(&mut self) {
        if !self.is_open() {
            return;
        }
        self.view = match self.view {
            CalendarView::Day => CalendarView::Month,
            CalendarView::Month | CalendarView::Year => CalendarView::Year,
        };
    }

    pub fn dismiss(&mut self) {
        if self.is_open() {
            self.outcome = PickerOutcome::Dismissed;
        }
    }

    fn is_month_enabled(&self, month: u32) -> bool {
        month < 12 && (self.year < self.current_year() || month <= self.current_month())
    }

    fn is_day_enabled(&self, day: u32) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day).is_some_and(|d| d <= self.today)
    }

    // ------------------------------------------------
    // Rendering data
    // ------------------------------------------------

    /// Offered years, ascending, current year last.
    pub fn year_cells(&self) -> Vec<i32> {
        (self.first_offered_year()..=self.current_year()).collect()
    }

    pub fn month_cells(&self) -> Vec<MonthCell> {
        (0..12)
            .map(|index| MonthCell {
                index,
                name: MONTH_SHORT[index as usize],
                enabled: self.is_month_enabled(index),
            })
            .collect()
    }

    /// Leading blanks align day 1 under its weekday (Sunday first).
    pub fn day_cells(&self) -> Vec<DayCell> {
        let blanks = date::leading_blanks(self.year, self.month + 1);
        let mut cells: Vec<DayCell> = (0..blanks).map(|_| DayCell::Blank).collect();

        cells.extend((1..=self.days_in_selected_month()).map(|day| DayCell::Day {
            day,
            enabled: self.is_day_enabled(day),
        }));

        cells
    }

    pub fn weekday_header(&self) -> [&'static str; 7] {
        WEEKDAY_HEADER
    }

    pub fn title(&self) -> String {
        let month_name = MONTH_LONG[self.month as usize % 12];
        match self.view {
            CalendarView::Year => self.year.to_string(),
            CalendarView::Month => format!("{} {}", month_name, self.year),
            CalendarView::Day => format!("{} {}, {}", month_name, self.day, self.year),
        }
    }
}
