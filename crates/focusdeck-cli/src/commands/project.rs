//! Project management commands.

use chrono::NaiveDate;
use clap::Subcommand;
use focusdeck_core::{BlobStore, NewProject, Store};

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project
    Create {
        /// Project name
        name: String,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// Goal statement
        #[arg(long)]
        goal: Option<String>,
        /// Display color (hex)
        #[arg(long)]
        color: Option<String>,
        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },
    /// List projects
    List,
    /// Get project details
    Get {
        /// Project ID
        id: String,
    },
    /// Delete a project (member tasks are orphaned, not deleted)
    Delete {
        /// Project ID
        id: String,
    },
}

pub fn run(action: ProjectAction) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;
    let mut store = Store::load(&blob)?;

    match action {
        ProjectAction::Create {
            name,
            description,
            goal,
            color,
            due,
        } => {
            let project = store.add_project(NewProject {
                name,
                description,
                goal,
                color,
                due_date: due,
            });
            store.save(&blob)?;
            println!("Project created: {}", project.id);
            println!("{}", serde_json::to_string_pretty(&project)?);
        }
        ProjectAction::List => {
            println!("{}", serde_json::to_string_pretty(&store.state().projects)?);
        }
        ProjectAction::Get { id } => match store.get_project(&id) {
            Some(project) => println!("{}", serde_json::to_string_pretty(project)?),
            None => println!("Project not found: {id}"),
        },
        ProjectAction::Delete { id } => {
            store.delete_project(&id);
            store.save(&blob)?;
            println!("Project deleted: {id}");
        }
    }
    Ok(())
}
