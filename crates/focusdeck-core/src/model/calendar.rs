use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Recurrence rule for a calendar event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A locally stored calendar event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub all_day: bool,
    pub repeat: Repeat,
    pub repeat_until: Option<NaiveDate>,
    /// Minutes before `start_date` at which to remind, if any.
    pub reminder_min: Option<u32>,
    pub color: Option<String>,
}

/// Caller-supplied fields for event creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCalendarEvent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default = "default_repeat")]
    pub repeat: Repeat,
    #[serde(default)]
    pub repeat_until: Option<NaiveDate>,
    #[serde(default)]
    pub reminder_min: Option<u32>,
    #[serde(default)]
    pub color: Option<String>,
}

fn default_repeat() -> Repeat {
    Repeat::None
}
