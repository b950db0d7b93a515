use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Task priority as shown in list views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    High,
    Medium,
    Low,
}

/// Board column the task sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    Doing,
    Done,
}

/// An ordered checklist entry inside a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subtask {
    pub id: String,
    pub title: String,
    pub completed: bool,
}

/// A single task.
///
/// `completed` and `status` are tracked independently; callers that want
/// the board convention (`Done` implies completed) keep them in sync
/// themselves -- the store does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: TaskStatus,
    /// Tag ids. Dangling ids mean the tag was deleted; readers treat
    /// them as cleared.
    pub tags: Vec<String>,
    /// Weak reference -- never validated against the project collection.
    pub project_id: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub subtasks: Vec<Subtask>,
    /// Flag for sub-2-minute tasks. Explicit user choice, authoritative
    /// over any heuristic.
    pub is_quick: bool,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied by the caller when creating a task; the store fills
/// in id and timestamps.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub priority: Option<TaskPriority>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub is_quick: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serialization_roundtrip() {
        let task = Task {
            id: "t-1".to_string(),
            title: "Write report".to_string(),
            description: None,
            priority: Some(TaskPriority::High),
            status: TaskStatus::Doing,
            tags: vec!["tag-1".to_string()],
            project_id: Some("p-1".to_string()),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            subtasks: vec![Subtask {
                id: "s-1".to_string(),
                title: "Outline".to_string(),
                completed: true,
            }],
            is_quick: false,
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&task).unwrap();
        let decoded: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.id, "t-1");
        assert_eq!(decoded.status, TaskStatus::Doing);
    }

    #[test]
    fn priority_uses_lowercase_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaskPriority::Medium).unwrap(),
            "\"medium\""
        );
    }
}
