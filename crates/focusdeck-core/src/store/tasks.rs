//! Task actions.

use chrono::Utc;

use super::{fresh_id, Store};
use crate::gamification;
use crate::model::{NewTask, Task, TaskStatus};

impl Store {
    /// Create a task. Assigns a fresh id and timestamps; no field
    /// validation happens here -- callers validate before dispatching.
    pub fn add_task(&mut self, new: NewTask) -> Task {
        let now = Utc::now();
        let task = Task {
            id: fresh_id(),
            title: new.title,
            description: new.description,
            priority: new.priority,
            status: TaskStatus::Todo,
            tags: new.tags,
            project_id: new.project_id.clone(),
            due_date: new.due_date,
            subtasks: new.subtasks,
            is_quick: new.is_quick,
            completed: false,
            created_at: now,
            updated_at: now,
        };
        if let Some(project_id) = &new.project_id {
            if let Some(project) = self.state.projects.iter_mut().find(|p| &p.id == project_id) {
                project.tasks.push(task.id.clone());
            }
        }
        self.state.tasks.push(task.clone());
        task
    }

    pub fn get_task(&self, id: &str) -> Option<&Task> {
        self.state.tasks.iter().find(|t| t.id == id)
    }

    /// Replace the task with the matching id, refreshing `updated_at`.
    /// A changed `project_id` moves the back-reference between the old
    /// and new project task lists. Silently does nothing if the id is
    /// unknown.
    pub fn update_task(&mut self, mut task: Task) {
        let Some(pos) = self.state.tasks.iter().position(|t| t.id == task.id) else {
            return;
        };
        let old_project_id = self.state.tasks[pos].project_id.clone();
        if old_project_id != task.project_id {
            if let Some(old_id) = &old_project_id {
                if let Some(project) = self.state.projects.iter_mut().find(|p| &p.id == old_id) {
                    project.tasks.retain(|tid| tid != &task.id);
                }
            }
            if let Some(new_id) = &task.project_id {
                if let Some(project) = self.state.projects.iter_mut().find(|p| &p.id == new_id) {
                    project.tasks.push(task.id.clone());
                }
            }
        }
        task.updated_at = Utc::now();
        self.state.tasks[pos] = task;
    }

    /// Delete a task and scrub it from every project task list and
    /// daily priority record. Idempotent.
    pub fn delete_task(&mut self, id: &str) {
        self.state.tasks.retain(|t| t.id != id);
        for project in &mut self.state.projects {
            project.tasks.retain(|tid| tid != id);
        }
        for record in &mut self.state.daily_priorities {
            record.task_ids.retain(|tid| tid != id);
        }
    }

    /// Flip `completed`, crediting or revoking points. Returns the new
    /// completed state, or `None` if the id is unknown.
    pub fn toggle_task_completion(&mut self, id: &str) -> Option<bool> {
        let now = Utc::now();
        let task = self.state.tasks.iter_mut().find(|t| t.id == id)?;
        task.completed = !task.completed;
        task.updated_at = now;
        let completed = task.completed;
        if completed {
            gamification::award_task_completion(&mut self.state.profile, now);
        } else {
            gamification::revoke_task_completion(&mut self.state.profile);
        }
        Some(completed)
    }

    /// One-way completion: no-op if the task is already completed, so
    /// points can never be double-awarded through this path.
    pub fn complete_task(&mut self, id: &str) {
        let now = Utc::now();
        let Some(task) = self.state.tasks.iter_mut().find(|t| t.id == id) else {
            return;
        };
        if task.completed {
            return;
        }
        task.completed = true;
        task.status = TaskStatus::Done;
        task.updated_at = now;
        gamification::award_task_completion(&mut self.state.profile, now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::TASK_POINTS;
    use crate::model::NewProject;
    use proptest::prelude::*;

    fn store_with_task() -> (Store, String) {
        let mut store = Store::default();
        let task = store.add_task(NewTask {
            title: "One".to_string(),
            ..Default::default()
        });
        (store, task.id)
    }

    #[test]
    fn add_assigns_id_and_timestamps() {
        let (store, id) = store_with_task();
        let task = store.get_task(&id).unwrap();
        assert!(!task.id.is_empty());
        assert_eq!(task.created_at, task.updated_at);
        assert!(!task.completed);
    }

    #[test]
    fn add_with_project_appends_back_reference() {
        let mut store = Store::default();
        let project = store.add_project(NewProject {
            name: "P".to_string(),
            ..Default::default()
        });
        let task = store.add_task(NewTask {
            title: "T".to_string(),
            project_id: Some(project.id.clone()),
            ..Default::default()
        });
        let project = store.state().projects.first().unwrap();
        assert_eq!(project.tasks, vec![task.id]);
    }

    #[test]
    fn update_unknown_id_is_silent() {
        let (mut store, _) = store_with_task();
        let mut ghost = store.state().tasks[0].clone();
        ghost.id = "nope".to_string();
        ghost.title = "Ghost".to_string();
        store.update_task(ghost);
        assert_eq!(store.state().tasks.len(), 1);
        assert_eq!(store.state().tasks[0].title, "One");
    }

    #[test]
    fn update_moves_project_back_reference() {
        let mut store = Store::default();
        let first = store.add_project(NewProject {
            name: "First".to_string(),
            ..Default::default()
        });
        let second = store.add_project(NewProject {
            name: "Second".to_string(),
            ..Default::default()
        });
        let task = store.add_task(NewTask {
            title: "Mobile".to_string(),
            project_id: Some(first.id.clone()),
            ..Default::default()
        });

        let mut moved = store.get_task(&task.id).cloned().unwrap();
        moved.project_id = Some(second.id.clone());
        store.update_task(moved);

        assert!(store.get_project(&first.id).unwrap().tasks.is_empty());
        assert_eq!(store.get_project(&second.id).unwrap().tasks, vec![task.id.clone()]);

        // Clearing the association drops the back-reference entirely.
        let mut detached = store.get_task(&task.id).cloned().unwrap();
        detached.project_id = None;
        store.update_task(detached);
        assert!(store.get_project(&second.id).unwrap().tasks.is_empty());
    }

    #[test]
    fn delete_scrubs_priorities_and_projects() {
        let mut store = Store::default();
        let project = store.add_project(NewProject {
            name: "P".to_string(),
            ..Default::default()
        });
        let task = store.add_task(NewTask {
            title: "T".to_string(),
            project_id: Some(project.id.clone()),
            ..Default::default()
        });
        let date = chrono::NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
        store
            .set_daily_priorities(date, vec![task.id.clone()])
            .unwrap();

        store.delete_task(&task.id);
        assert!(store.state().tasks.is_empty());
        assert!(store.state().projects[0].tasks.is_empty());
        assert!(store.state().daily_priorities[0].task_ids.is_empty());
        // Idempotent.
        store.delete_task(&task.id);
    }

    #[test]
    fn toggle_twice_round_trips_profile() {
        let (mut store, id) = store_with_task();
        let before_points = store.profile().points;
        let before_total = store.profile().total_tasks_completed;

        assert_eq!(store.toggle_task_completion(&id), Some(true));
        assert_eq!(store.profile().points, before_points + TASK_POINTS);
        assert_eq!(store.profile().total_tasks_completed, before_total + 1);

        assert_eq!(store.toggle_task_completion(&id), Some(false));
        assert_eq!(store.profile().points, before_points);
        assert_eq!(store.profile().total_tasks_completed, before_total);
    }

    #[test]
    fn complete_task_is_one_way() {
        let (mut store, id) = store_with_task();
        store.complete_task(&id);
        store.complete_task(&id);
        assert_eq!(store.profile().points, TASK_POINTS);
        assert_eq!(store.profile().total_tasks_completed, 1);
        assert_eq!(store.get_task(&id).unwrap().status, TaskStatus::Done);
    }

    #[test]
    fn yesterday_activity_bumps_streak() {
        let (mut store, id) = store_with_task();
        store.state_mut().profile.streak = 3;
        store.state_mut().profile.last_activity =
            Some(Utc::now() - chrono::Duration::days(1));
        store.toggle_task_completion(&id);
        assert_eq!(store.profile().streak, 4);
    }

    #[test]
    fn three_day_gap_resets_streak() {
        let (mut store, id) = store_with_task();
        store.state_mut().profile.streak = 9;
        store.state_mut().profile.last_activity =
            Some(Utc::now() - chrono::Duration::days(3));
        store.toggle_task_completion(&id);
        assert_eq!(store.profile().streak, 1);
    }

    proptest! {
        /// Any even number of toggles leaves points and the completion
        /// counter exactly where they started.
        #[test]
        fn even_toggle_count_is_identity(pairs in 1usize..20) {
            let (mut store, id) = store_with_task();
            let points = store.profile().points;
            let total = store.profile().total_tasks_completed;
            for _ in 0..pairs * 2 {
                store.toggle_task_completion(&id).unwrap();
            }
            prop_assert_eq!(store.profile().points, points);
            prop_assert_eq!(store.profile().total_tasks_completed, total);
        }
    }
}
