//! Check-in session: turns successful QR scans into an entry/exit log.
//!
//! The kind of each new event depends only on the previous event of the
//! same session. A session is created for an explicit user and gym and
//! owns its log; nothing is shared between sessions or persisted.

use chrono::{DateTime, Duration, Local};
use tracing::{debug, info};

use crate::models::attendance_event::AttendanceEvent;
use crate::models::attendance_kind::AttendanceKind;
use crate::models::visit::Visit;

/// Upper bound for the minimum-interval guard: one day.
pub const MAX_MIN_INTERVAL_SECS: i64 = 86_400;

/// Result of a scan submitted through the (optional) minimum-interval guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    Recorded(AttendanceEvent),
    /// The scan came too soon after `last` and was ignored.
    Debounced {
        last: AttendanceEvent,
        retry_after: Duration,
    },
}

impl ScanOutcome {
    pub fn event(&self) -> Option<&AttendanceEvent> {
        match self {
            ScanOutcome::Recorded(ev) => Some(ev),
            ScanOutcome::Debounced { .. } => None,
        }
    }

    pub fn is_recorded(&self) -> bool {
        matches!(self, ScanOutcome::Recorded(_))
    }
}

#[derive(Debug, Clone)]
pub struct AttendanceSession {
    username: String,
    gym_id: String,
    min_interval: Option<Duration>,
    log: Vec<AttendanceEvent>,
}

impl AttendanceSession {
    pub fn new(username: impl Into<String>, gym_id: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            gym_id: gym_id.into(),
            min_interval: None,
            log: Vec::new(),
        }
    }

    /// Ignore scans arriving less than `interval` after the previous event.
    ///
    /// Only `submit_scan` honours the guard; `record_scan` always appends.
    /// A zero or negative interval disables it.
    pub fn with_min_interval(mut self, interval: Duration) -> Self {
        self.min_interval = (interval > Duration::zero()).then_some(interval);
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn gym_id(&self) -> &str {
        &self.gym_id
    }

    /// The QR payload for this session's gym: the plain gym identifier.
    pub fn payload(&self) -> &str {
        &self.gym_id
    }

    pub fn min_interval(&self) -> Option<Duration> {
        self.min_interval
    }

    pub fn log(&self) -> &[AttendanceEvent] {
        &self.log
    }

    pub fn last_event(&self) -> Option<&AttendanceEvent> {
        self.log.last()
    }

    pub fn is_checked_in(&self) -> bool {
        self.last_event().is_some_and(|ev| ev.kind.is_entry())
    }

    /// Record a scan at the current local time.
    pub fn record_scan(&mut self) -> AttendanceEvent {
        self.record_scan_at(Local::now())
    }

    /// Append the next event: Exit after an Entry, Entry otherwise.
    pub fn record_scan_at(&mut self, now: DateTime<Local>) -> AttendanceEvent {
        let kind = self
            .log
            .last()
            .map_or(AttendanceKind::Entry, |last| last.kind.toggled());

        let event = AttendanceEvent::new(now, kind);
        self.log.push(event);

        info!(
            user = %self.username,
            gym = %self.gym_id,
            kind = kind.as_str(),
            "{} logged at {}",
            kind.label(),
            event.get_date_time()
        );

        event
    }

    pub fn submit_scan(&mut self) -> ScanOutcome {
        self.submit_scan_at(Local::now())
    }

    pub fn submit_scan_at(&mut self, now: DateTime<Local>) -> ScanOutcome {
        if let (Some(interval), Some(last)) = (self.min_interval, self.log.last().copied()) {
            let elapsed = now - last.timestamp;
            if elapsed < interval {
                let retry_after = interval - elapsed;
                debug!(
                    gym = %self.gym_id,
                    elapsed_secs = elapsed.num_seconds(),
                    "scan ignored by minimum interval guard"
                );
                return ScanOutcome::Debounced { last, retry_after };
            }
        }

        ScanOutcome::Recorded(self.record_scan_at(now))
    }

    /// Pair every entry with the exit that follows it.
    pub fn visits(&self) -> Vec<Visit> {
        let mut visits = Vec::new();
        let mut open: Option<AttendanceEvent> = None;

        for ev in &self.log {
            match ev.kind {
                AttendanceKind::Entry => {
                    if let Some(entry) = open.take() {
                        visits.push(Visit { entry, exit: None });
                    }
                    open = Some(*ev);
                }
                AttendanceKind::Exit => {
                    if let Some(entry) = open.take() {
                        visits.push(Visit {
                            entry,
                            exit: Some(*ev),
                        });
                    }
                }
            }
        }

        if let Some(entry) = open {
            visits.push(Visit { entry, exit: None });
        }

        visits
    }

    /// Total minutes of closed visits.
    pub fn total_minutes(&self) -> i64 {
        self.visits()
            .iter()
            .filter_map(Visit::duration_minutes)
            .sum()
    }
}
