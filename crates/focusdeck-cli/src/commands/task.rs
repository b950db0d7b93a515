//! Task management commands.

use chrono::NaiveDate;
use clap::Subcommand;
use focusdeck_core::{BlobStore, NewTask, Store, TaskPriority, TaskStatus};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a new task
    Create {
        /// Task title
        title: String,
        /// Task description
        #[arg(long)]
        description: Option<String>,
        /// Priority: high, medium, or low
        #[arg(long)]
        priority: Option<String>,
        /// Project ID to associate with
        #[arg(long)]
        project_id: Option<String>,
        /// Comma-separated tag ids
        #[arg(long)]
        tags: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
        /// Mark as a sub-2-minute quick task
        #[arg(long)]
        quick: bool,
    },
    /// List tasks
    List {
        /// Filter by project ID
        #[arg(long)]
        project_id: Option<String>,
        /// Only incomplete tasks
        #[arg(long)]
        open: bool,
    },
    /// Get task details
    Get {
        /// Task ID
        id: String,
    },
    /// Update a task
    Update {
        /// Task ID
        id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New description
        #[arg(long)]
        description: Option<String>,
        /// New priority: high, medium, or low
        #[arg(long)]
        priority: Option<String>,
        /// New status: todo, doing, or done
        #[arg(long)]
        status: Option<String>,
        /// New project ID
        #[arg(long)]
        project_id: Option<String>,
        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// Flip completion (awards or revokes points)
    Toggle {
        /// Task ID
        id: String,
    },
    /// Complete a task (one-way)
    Complete {
        /// Task ID
        id: String,
    },
    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },
}

fn parse_priority(s: &str) -> Result<TaskPriority, String> {
    match s {
        "high" => Ok(TaskPriority::High),
        "medium" => Ok(TaskPriority::Medium),
        "low" => Ok(TaskPriority::Low),
        other => Err(format!("unknown priority: {other}")),
    }
}

fn parse_status(s: &str) -> Result<TaskStatus, String> {
    match s {
        "todo" => Ok(TaskStatus::Todo),
        "doing" => Ok(TaskStatus::Doing),
        "done" => Ok(TaskStatus::Done),
        other => Err(format!("unknown status: {other}")),
    }
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;
    let mut store = Store::load(&blob)?;

    match action {
        TaskAction::Create {
            title,
            description,
            priority,
            project_id,
            tags,
            due,
            quick,
        } => {
            let task = store.add_task(NewTask {
                title,
                description,
                priority: priority.as_deref().map(parse_priority).transpose()?,
                tags: tags
                    .map(|t| t.split(',').map(|s| s.trim().to_string()).collect())
                    .unwrap_or_default(),
                project_id,
                due_date: due,
                subtasks: Vec::new(),
                is_quick: quick,
            });
            store.save(&blob)?;
            println!("Task created: {}", task.id);
            println!("{}", serde_json::to_string_pretty(&task)?);
        }
        TaskAction::List { project_id, open } => {
            let tasks: Vec<_> = store
                .state()
                .tasks
                .iter()
                .filter(|task| {
                    if let Some(ref pid) = project_id {
                        if task.project_id.as_ref() != Some(pid) {
                            return false;
                        }
                    }
                    !(open && task.completed)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&tasks)?);
        }
        TaskAction::Get { id } => match store.get_task(&id) {
            Some(task) => println!("{}", serde_json::to_string_pretty(task)?),
            None => println!("Task not found: {id}"),
        },
        TaskAction::Update {
            id,
            title,
            description,
            priority,
            status,
            project_id,
            due,
        } => {
            let mut task = store
                .get_task(&id)
                .cloned()
                .ok_or(format!("Task not found: {id}"))?;
            if let Some(t) = title {
                task.title = t;
            }
            if let Some(d) = description {
                task.description = Some(d);
            }
            if let Some(p) = priority {
                task.priority = Some(parse_priority(&p)?);
            }
            if let Some(s) = status {
                task.status = parse_status(&s)?;
            }
            if let Some(p) = project_id {
                task.project_id = Some(p);
            }
            if let Some(d) = due {
                task.due_date = Some(d);
            }
            store.update_task(task);
            store.save(&blob)?;
            let updated = store
                .get_task(&id)
                .ok_or(format!("Task not found: {id}"))?;
            println!("{}", serde_json::to_string_pretty(updated)?);
        }
        TaskAction::Toggle { id } => match store.toggle_task_completion(&id) {
            Some(completed) => {
                store.save(&blob)?;
                println!(
                    "Task {id} is now {}",
                    if completed { "completed" } else { "open" }
                );
                println!("Points: {}", store.profile().points);
            }
            None => println!("Task not found: {id}"),
        },
        TaskAction::Complete { id } => {
            store.complete_task(&id);
            store.save(&blob)?;
            println!("Points: {}", store.profile().points);
        }
        TaskAction::Delete { id } => {
            store.delete_task(&id);
            store.save(&blob)?;
            println!("Task deleted: {id}");
        }
    }
    Ok(())
}
