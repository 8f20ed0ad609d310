use super::attendance_kind::AttendanceKind;
use chrono::{DateTime, Local};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct AttendanceEvent {
    pub timestamp: DateTime<Local>,
    pub kind: AttendanceKind,
}

impl AttendanceEvent {
    pub fn new(timestamp: DateTime<Local>, kind: AttendanceKind) -> Self {
        Self { timestamp, kind }
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }

    pub fn get_date_time(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}
