//! Scheduled reminder bookkeeping.
//!
//! Pure and synchronous: the host environment owns the actual
//! notification surface (and the one-time permission request); this
//! module only tracks what should fire when, keyed by id so a reminder
//! can be canceled before it fires.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::model::CalendarEvent;

/// A pending reminder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: String,
    pub fire_at: DateTime<Utc>,
    pub title: String,
    pub body: Option<String>,
}

/// Pending-reminder registry.
#[derive(Debug, Clone, Default)]
pub struct ReminderScheduler {
    pending: Vec<Reminder>,
}

impl ReminderScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a reminder, replacing any pending one with the same id.
    pub fn schedule(&mut self, reminder: Reminder) {
        self.pending.retain(|r| r.id != reminder.id);
        self.pending.push(reminder);
    }

    /// Schedule from a calendar event's reminder offset, keyed by the
    /// event id. Events without an offset schedule nothing.
    pub fn schedule_for_event(&mut self, event: &CalendarEvent) {
        let Some(offset_min) = event.reminder_min else {
            return;
        };
        self.schedule(Reminder {
            id: event.id.clone(),
            fire_at: event.start_date - Duration::minutes(offset_min as i64),
            title: event.title.clone(),
            body: event.description.clone(),
        });
    }

    /// Cancel by id before it fires. Returns whether anything was
    /// pending under that id.
    pub fn cancel(&mut self, id: &str) -> bool {
        let before = self.pending.len();
        self.pending.retain(|r| r.id != id);
        before != self.pending.len()
    }

    /// Drain every reminder due at or before `now`, ordered by fire
    /// time. The host fires the actual notifications.
    pub fn due(&mut self, now: DateTime<Utc>) -> Vec<Reminder> {
        let mut fired: Vec<Reminder> = Vec::new();
        self.pending.retain(|r| {
            if r.fire_at <= now {
                fired.push(r.clone());
                false
            } else {
                true
            }
        });
        fired.sort_by_key(|r| r.fire_at);
        fired
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}
