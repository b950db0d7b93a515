use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One pomodoro work interval.
///
/// A record is opened when a pomodoro timer starts and finalized only on
/// natural expiry. Abandoned sessions (reset before zero) simply stay
/// `completed: false` with no end time; statistics must filter on
/// `completed`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroSession {
    pub id: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    /// Whole minutes, computed at completion.
    pub duration_min: Option<u64>,
    pub completed: bool,
    /// Weak references, never validated against existence.
    pub task_id: Option<String>,
    pub project_id: Option<String>,
}
