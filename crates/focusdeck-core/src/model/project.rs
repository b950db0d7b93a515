use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A project grouping related tasks.
///
/// `tasks` is a denormalized back-reference list of task ids the
/// project owns; the authoritative association is `Task::project_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub goal: Option<String>,
    pub color: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub tasks: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Caller-supplied fields for project creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

/// A label that can be attached to any number of tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
    /// Hex color string, e.g. "#3b82f6".
    pub color: String,
}
