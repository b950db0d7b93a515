//! Tag management commands.

use clap::Subcommand;
use focusdeck_core::{BlobStore, Store};

#[derive(Subcommand)]
pub enum TagAction {
    /// Create a tag
    Add {
        /// Tag name
        name: String,
        /// Hex color
        #[arg(long, default_value = "#3b82f6")]
        color: String,
    },
    /// List tags
    List,
    /// Delete a tag (stripped from every task)
    Delete {
        /// Tag ID
        id: String,
    },
}

pub fn run(action: TagAction) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;
    let mut store = Store::load(&blob)?;

    match action {
        TagAction::Add { name, color } => {
            let tag = store.add_tag(name, color);
            store.save(&blob)?;
            println!("Tag created: {}", tag.id);
        }
        TagAction::List => {
            println!("{}", serde_json::to_string_pretty(&store.state().tags)?);
        }
        TagAction::Delete { id } => {
            store.delete_tag(&id);
            store.save(&blob)?;
            println!("Tag deleted: {id}");
        }
    }
    Ok(())
}
