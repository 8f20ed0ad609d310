use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::errors::AppError;

static MONTH_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{4})-(\d{2})$").expect("static month key pattern"));

/// A calendar year-month, keyed as `YYYY-MM` in attendance documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    year: i32,
    month: u32, // 1..=12
}

impl MonthKey {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::from_date(crate::utils::date::today())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn first_day(&self) -> NaiveDate {
        // month is validated on construction
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        crate::utils::date::days_in_month(self.year, self.month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// "OCTOBER 2026", as used in heatmap headers.
    pub fn long_label(&self) -> String {
        self.first_day().format("%B %Y").to_string().to_uppercase()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = MONTH_KEY_RE
            .captures(s.trim())
            .ok_or_else(|| AppError::InvalidMonth(s.to_string()))?;

        let year: i32 = caps[1]
            .parse()
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;
        let month: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::InvalidMonth(s.to_string()))?;

        MonthKey::new(year, month).ok_or_else(|| AppError::InvalidMonth(s.to_string()))
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
