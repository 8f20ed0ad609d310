use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceKind {
    Entry,
    Exit,
}

impl AttendanceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceKind::Entry => "entry",
            AttendanceKind::Exit => "exit",
        }
    }

    /// Human label used in log lines ("Entry logged at ...").
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceKind::Entry => "Entry",
            AttendanceKind::Exit => "Exit",
        }
    }

    /// The kind that follows this one in a session.
    pub fn toggled(&self) -> Self {
        match self {
            AttendanceKind::Entry => AttendanceKind::Exit,
            AttendanceKind::Exit => AttendanceKind::Entry,
        }
    }

    pub fn is_entry(&self) -> bool {
        matches!(self, AttendanceKind::Entry)
    }
}
