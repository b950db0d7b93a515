use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Singleton user profile carrying the gamification state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub avatar: Option<String>,
    /// Game score. Awards add, toggle reversals subtract (floored at 0).
    pub points: u64,
    /// Consecutive calendar days with at least one qualifying completion.
    pub streak: u32,
    pub last_activity: Option<DateTime<Utc>>,
    pub total_tasks_completed: u64,
    pub total_pomodoros_completed: u64,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Guest".to_string(),
            avatar: None,
            points: 0,
            streak: 0,
            last_activity: None,
            total_tasks_completed: 0,
            total_pomodoros_completed: 0,
        }
    }
}
