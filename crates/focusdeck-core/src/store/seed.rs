//! First-run demo dataset.
//!
//! Loaded exactly once so a new user never opens onto an empty screen.
//! The seeding gate lives in [`super::Store::load`].

use chrono::{Duration, Utc};

use super::{fresh_id, AppState};
use crate::model::{
    NewProject, NewTask, PomodoroSession, Subtask, TaskPriority,
};

pub(super) fn demo_state() -> AppState {
    let mut store = super::Store::default();

    let welcome = store.add_project(NewProject {
        name: "Getting started".to_string(),
        description: Some("A tour of FocusDeck".to_string()),
        goal: Some("Learn the basics".to_string()),
        color: Some("#3b82f6".to_string()),
        due_date: None,
    });

    let focus_tag = store.add_tag("focus".to_string(), "#ef4444".to_string());
    let admin_tag = store.add_tag("admin".to_string(), "#10b981".to_string());

    store.add_task(NewTask {
        title: "Plan your first pomodoro".to_string(),
        description: Some("Pick a task, start the timer, stay with it for 25 minutes.".to_string()),
        priority: Some(TaskPriority::High),
        tags: vec![focus_tag.id],
        project_id: Some(welcome.id.clone()),
        subtasks: vec![
            Subtask {
                id: fresh_id(),
                title: "Choose a task".to_string(),
                completed: false,
            },
            Subtask {
                id: fresh_id(),
                title: "Start the timer".to_string(),
                completed: false,
            },
        ],
        ..Default::default()
    });

    store.add_task(NewTask {
        title: "Pick today's six priorities".to_string(),
        description: Some("The Ivy Lee method: at most six ranked tasks per day.".to_string()),
        priority: Some(TaskPriority::Medium),
        tags: vec![admin_tag.id],
        project_id: Some(welcome.id),
        ..Default::default()
    });

    store.add_task(NewTask {
        title: "Reply to the onboarding email".to_string(),
        priority: Some(TaskPriority::Low),
        is_quick: true,
        ..Default::default()
    });

    // One finished session from "yesterday" so the stats page has shape.
    let start = Utc::now() - Duration::days(1);
    store.state.sessions.push(PomodoroSession {
        id: fresh_id(),
        start_time: start,
        end_time: Some(start + Duration::minutes(25)),
        duration_min: Some(25),
        completed: true,
        task_id: None,
        project_id: None,
    });

    store.state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_state_is_coherent() {
        let state = demo_state();
        assert_eq!(state.tasks.len(), 3);
        assert_eq!(state.projects.len(), 1);
        assert_eq!(state.tags.len(), 2);
        assert_eq!(state.sessions.len(), 1);
        // Seeded data never pre-awards points.
        assert_eq!(state.profile.points, 0);

        // Back-references line up with task project ids.
        let project = &state.projects[0];
        for tid in &project.tasks {
            let task = state.tasks.iter().find(|t| &t.id == tid).unwrap();
            assert_eq!(task.project_id.as_ref(), Some(&project.id));
        }
    }
}
