//! Project and tag actions.

use chrono::Utc;

use super::{fresh_id, Store};
use crate::model::{NewProject, Project, Tag};

impl Store {
    pub fn add_project(&mut self, new: NewProject) -> Project {
        let now = Utc::now();
        let project = Project {
            id: fresh_id(),
            name: new.name,
            description: new.description,
            goal: new.goal,
            color: new.color,
            due_date: new.due_date,
            tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.state.projects.push(project.clone());
        project
    }

    pub fn get_project(&self, id: &str) -> Option<&Project> {
        self.state.projects.iter().find(|p| p.id == id)
    }

    /// Replace the project with the matching id, refreshing
    /// `updated_at`. Silently does nothing if the id is unknown.
    pub fn update_project(&mut self, mut project: Project) {
        if let Some(slot) = self.state.projects.iter_mut().find(|p| p.id == project.id) {
            project.updated_at = Utc::now();
            *slot = project;
        }
    }

    /// Delete a project, orphaning its tasks: member tasks survive with
    /// `project_id` cleared, never cascade-deleted. Idempotent.
    pub fn delete_project(&mut self, id: &str) {
        self.state.projects.retain(|p| p.id != id);
        for task in &mut self.state.tasks {
            if task.project_id.as_deref() == Some(id) {
                task.project_id = None;
                task.updated_at = Utc::now();
            }
        }
    }

    pub fn add_tag(&mut self, name: String, color: String) -> Tag {
        let tag = Tag {
            id: fresh_id(),
            name,
            color,
        };
        self.state.tags.push(tag.clone());
        tag
    }

    pub fn update_tag(&mut self, tag: Tag) {
        if let Some(slot) = self.state.tags.iter_mut().find(|t| t.id == tag.id) {
            *slot = tag;
        }
    }

    /// Delete a tag and strip its id from every task's tag set.
    /// Idempotent; task count is never affected.
    pub fn delete_tag(&mut self, id: &str) {
        self.state.tags.retain(|t| t.id != id);
        for task in &mut self.state.tasks {
            task.tags.retain(|tid| tid != id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewTask;

    #[test]
    fn delete_project_orphans_tasks() {
        let mut store = Store::default();
        let project = store.add_project(NewProject {
            name: "Launch".to_string(),
            ..Default::default()
        });
        for i in 0..3 {
            store.add_task(NewTask {
                title: format!("Task {i}"),
                project_id: Some(project.id.clone()),
                ..Default::default()
            });
        }

        store.delete_project(&project.id);

        assert!(store.state().projects.is_empty());
        assert_eq!(store.state().tasks.len(), 3);
        assert!(store.state().tasks.iter().all(|t| t.project_id.is_none()));
    }

    #[test]
    fn delete_tag_strips_usage() {
        let mut store = Store::default();
        let keep = store.add_tag("keep".to_string(), "#00ff00".to_string());
        let drop = store.add_tag("drop".to_string(), "#ff0000".to_string());
        for i in 0..2 {
            store.add_task(NewTask {
                title: format!("Task {i}"),
                tags: vec![keep.id.clone(), drop.id.clone()],
                ..Default::default()
            });
        }

        store.delete_tag(&drop.id);

        assert_eq!(store.state().tags.len(), 1);
        assert_eq!(store.state().tasks.len(), 2);
        for task in &store.state().tasks {
            assert_eq!(task.tags, vec![keep.id.clone()]);
        }
    }

    #[test]
    fn delete_missing_project_is_noop() {
        let mut store = Store::default();
        store.delete_project("ghost");
        store.delete_tag("ghost");
        assert!(store.state().projects.is_empty());
    }
}
