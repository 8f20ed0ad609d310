use super::attendance_event::AttendanceEvent;
use serde::Serialize;

/// An entry paired with the exit that closed it (if any).
#[derive(Debug, Clone, Serialize)]
pub struct Visit {
    pub entry: AttendanceEvent,
    pub exit: Option<AttendanceEvent>,
}

impl Visit {
    pub fn is_open(&self) -> bool {
        self.exit.is_none()
    }

    /// Minutes between entry and exit; `None` while the visit is open.
    pub fn duration_minutes(&self) -> Option<i64> {
        self.exit
            .map(|out| (out.timestamp - self.entry.timestamp).num_minutes())
    }
}
