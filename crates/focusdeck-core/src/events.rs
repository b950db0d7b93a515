//! Timer and session lifecycle events.
//!
//! Every engine state change produces an [`Event`]. Views subscribe to
//! one authoritative stream instead of racing their own intervals.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{TimerMode, TimerState};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: TimerMode,
        duration_secs: u64,
        /// True for a fresh start, false when resuming from pause.
        fresh: bool,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_ms: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        mode: TimerMode,
        at: DateTime<Utc>,
    },
    /// Natural expiry. The engine has already loaded `next_mode` and
    /// returned to idle, ready to be started again.
    TimerCompleted {
        mode: TimerMode,
        next_mode: TimerMode,
        completed_pomodoros: u32,
        at: DateTime<Utc>,
    },
    ModeChanged {
        from: TimerMode,
        to: TimerMode,
        at: DateTime<Utc>,
    },
    SessionOpened {
        session_id: String,
        at: DateTime<Utc>,
    },
    SessionCompleted {
        session_id: String,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        mode: TimerMode,
        remaining_ms: u64,
        total_ms: u64,
        progress: f64,
        completed_pomodoros: u32,
        at: DateTime<Utc>,
    },
}
