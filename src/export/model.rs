use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::models::month_key::MonthKey;

/// One exported visit row.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct VisitExport {
    pub user: String,
    pub gym: String,
    pub month: MonthKey,
    pub date: String,
    pub weekday: String,
}

impl VisitExport {
    pub fn new(user: &str, gym: &str, month: &MonthKey, day: &NaiveDate) -> Self {
        Self {
            user: user.to_string(),
            gym: gym.to_string(),
            month: *month,
            date: day.format("%Y-%m-%d").to_string(),
            weekday: day.weekday().to_string(),
        }
    }
}

pub(crate) fn get_headers() -> [&'static str; 5] {
    ["user", "gym", "month", "date", "weekday"]
}
