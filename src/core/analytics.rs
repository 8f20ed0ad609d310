//! Attendance analytics for one user at one gym.
//!
//! The source document lives in the `attendance` collection under
//! `"<username>-<gymId>"` and maps `YYYY-MM` to ISO dates. A missing,
//! unreadable or malformed document is treated as "no visits".

use std::collections::{BTreeMap, BTreeSet};

use ansi_term::Colour;
use chrono::{Duration, NaiveDate};
use serde_json::{Map, Value};
use tracing::warn;

use crate::db::documents::DocumentStore;
use crate::errors::{AppError, AppResult};
use crate::models::month_key::MonthKey;
use crate::utils::date;

pub const ATTENDANCE_COLLECTION: &str = "attendance";
pub const DEFAULT_SESSION_MINUTES: i64 = 45;

/// Document key for a user's attendance at a gym.
pub fn document_key(username: &str, gym_id: &str) -> String {
    format!("{}-{}", username, gym_id)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceData {
    months: BTreeMap<MonthKey, Vec<NaiveDate>>,
}

impl AttendanceData {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn months(&self) -> impl Iterator<Item = &MonthKey> {
        self.months.keys()
    }

    pub fn days_in(&self, month: &MonthKey) -> &[NaiveDate] {
        self.months.get(month).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every recorded date, month by month.
    pub fn all_days(&self) -> impl Iterator<Item = (&MonthKey, &NaiveDate)> {
        self.months
            .iter()
            .flat_map(|(k, days)| days.iter().map(move |d| (k, d)))
    }

    pub fn total_visits(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }

    /// Append a visit to the month of `day`, keeping the month sorted.
    pub fn add_visit(&mut self, day: NaiveDate) {
        let days = self.months.entry(MonthKey::from_date(day)).or_default();
        let pos = days.partition_point(|d| *d <= day);
        days.insert(pos, day);
    }

    /// Strict parse: any malformed entry rejects the whole document.
    pub fn try_from_document(doc: &Value) -> AppResult<Self> {
        let obj = doc
            .as_object()
            .ok_or_else(|| AppError::Other("attendance document is not an object".into()))?;

        let mut months = BTreeMap::new();
        for (raw_key, raw_days) in obj {
            let key: MonthKey = raw_key.parse()?;
            let list = raw_days.as_array().ok_or_else(|| {
                AppError::Other(format!("attendance entry '{}' is not a list", raw_key))
            })?;

            let mut days = Vec::with_capacity(list.len());
            for item in list {
                let s = item
                    .as_str()
                    .ok_or_else(|| AppError::InvalidDate(item.to_string()))?;
                let d = date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))?;
                days.push(d);
            }
            months.insert(key, days);
        }

        Ok(Self { months })
    }

    /// Lenient parse: malformed documents degrade to an empty mapping.
    pub fn from_document(doc: &Value) -> Self {
        Self::try_from_document(doc).unwrap_or_else(|e| {
            warn!(error = %e, "malformed attendance document, using empty data");
            Self::default()
        })
    }

    pub fn to_document(&self) -> Value {
        let mut obj = Map::new();
        for (key, days) in &self.months {
            let list = days
                .iter()
                .map(|d| Value::String(d.format("%Y-%m-%d").to_string()))
                .collect();
            obj.insert(key.to_string(), Value::Array(list));
        }
        Value::Object(obj)
    }
}

/// Fetch and parse the attendance document. Never fails.
pub fn load_attendance(store: &dyn DocumentStore, username: &str, gym_id: &str) -> AttendanceData {
    let key = document_key(username, gym_id);
    match store.get(ATTENDANCE_COLLECTION, &key) {
        Ok(Some(doc)) => AttendanceData::from_document(&doc),
        Ok(None) => AttendanceData::default(),
        Err(e) => {
            warn!(key = %key, error = %e, "failed to fetch attendance document");
            AttendanceData::default()
        }
    }
}

/// Add one visit to the stored document, creating it when missing.
///
/// Unlike `load_attendance`, this refuses to overwrite a malformed
/// document.
pub fn record_visit(
    store: &dyn DocumentStore,
    username: &str,
    gym_id: &str,
    day: NaiveDate,
) -> AppResult<AttendanceData> {
    let key = document_key(username, gym_id);
    let mut data = match store.get(ATTENDANCE_COLLECTION, &key)? {
        Some(doc) => AttendanceData::try_from_document(&doc)?,
        None => AttendanceData::default(),
    };

    data.add_visit(day);
    store.put(ATTENDANCE_COLLECTION, &key, &data.to_document())?;
    Ok(data)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickStats {
    pub weekly_visits: usize,
    pub total_minutes: i64,
    pub active_days: usize,
}

impl QuickStats {
    /// Weekly visits are the days strictly after `today - 7 days`.
    pub fn compute(days: &[NaiveDate], today: NaiveDate, session_minutes: i64) -> Self {
        let week_ago = today - Duration::weeks(1);
        let active: BTreeSet<&NaiveDate> = days.iter().collect();

        Self {
            weekly_visits: days.iter().filter(|d| **d > week_ago).count(),
            total_minutes: days.len() as i64 * session_minutes,
            active_days: active.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeatCell {
    pub day: u32,
    pub visits: u32,
    /// 0..=255, 50 per visit.
    pub intensity: u8,
}

impl HeatCell {
    pub fn is_present(&self) -> bool {
        self.visits > 0
    }

    /// Green at `intensity` alpha over white; light grey when absent.
    pub fn rgb(&self) -> (u8, u8, u8) {
        if !self.is_present() {
            return (211, 211, 211);
        }
        let a = self.intensity as u32;
        let over_white = |c: u32| ((c * a + 255 * (255 - a)) / 255) as u8;
        (over_white(0), over_white(128), over_white(0))
    }
}

#[derive(Debug, Clone)]
pub struct Heatmap {
    pub month: MonthKey,
    pub cells: Vec<HeatCell>,
}

impl Heatmap {
    pub fn build(month: MonthKey, days: &[NaiveDate]) -> Self {
        let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
        for d in days {
            *counts.entry(chrono::Datelike::day(d)).or_default() += 1;
        }

        let cells = (1..=month.days_in_month())
            .map(|day| {
                let visits = counts.get(&day).copied().unwrap_or(0);
                HeatCell {
                    day,
                    visits,
                    intensity: (visits.saturating_mul(50)).min(255) as u8,
                }
            })
            .collect();

        Self { month, cells }
    }

    pub fn cell(&self, day: u32) -> Option<&HeatCell> {
        self.cells.get(day.checked_sub(1)? as usize)
    }

    /// Seven-column grid, Sunday first.
    pub fn render(&self, color: bool) -> String {
        let mut out = format!("Attendance for {}\n", self.month.long_label());
        let blanks = date::leading_blanks(self.month.year(), self.month.month()) as usize;

        for name in crate::core::calendar::WEEKDAY_HEADER {
            out.push_str(&format!("{:>4}", name));
        }
        out.push('\n');

        let mut column = 0;
        for _ in 0..blanks {
            out.push_str("    ");
            column += 1;
        }

        for cell in &self.cells {
            let text = if color {
                let (r, g, b) = cell.rgb();
                Colour::White
                    .on(Colour::RGB(r, g, b))
                    .paint(format!("{:>3}", cell.day))
                    .to_string()
            } else if cell.is_present() {
                format!("{:>3}", format!("{}*", cell.day))
            } else {
                format!("{:>3}", cell.day)
            };
            out.push(' ');
            out.push_str(&text);

            column += 1;
            if column == 7 {
                out.push('\n');
                column = 0;
            }
        }
        if column != 0 {
            out.push('\n');
        }

        out
    }
}
