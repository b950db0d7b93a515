//! Profile commands: points, streak, identity.

use clap::Subcommand;
use focusdeck_core::{BlobStore, Store};

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Show the profile
    Show,
    /// Update identity fields
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Avatar reference
        #[arg(long)]
        avatar: Option<String>,
    },
}

pub fn run(action: ProfileAction) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;
    let mut store = Store::load(&blob)?;

    match action {
        ProfileAction::Show => {
            println!("{}", serde_json::to_string_pretty(store.profile())?);
        }
        ProfileAction::Set { name, avatar } => {
            store.update_profile(name, avatar);
            store.save(&blob)?;
            println!("{}", serde_json::to_string_pretty(store.profile())?);
        }
    }
    Ok(())
}
