use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The Ivy Lee method caps a day's focus list at six ranked tasks.
pub const MAX_DAILY_PRIORITIES: usize = 6;

/// The ordered task selection for one calendar day.
///
/// Keyed by `date` with upsert semantics -- the store guarantees at most
/// one record per distinct date. `task_ids` order is the priority rank.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPriority {
    pub id: String,
    pub date: NaiveDate,
    pub task_ids: Vec<String>,
}
