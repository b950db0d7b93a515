//! Session statistics commands.

use chrono::Utc;
use clap::Subcommand;
use focusdeck_core::{BlobStore, Store};

#[derive(Subcommand)]
pub enum StatsAction {
    /// Completed-session stats (abandoned sessions are excluded)
    Sessions,
    /// Open (abandoned or in-flight) session count
    Open,
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;
    let store = Store::load(&blob)?;

    match action {
        StatsAction::Sessions => {
            let stats = store.session_stats(Utc::now());
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        StatsAction::Open => {
            let open = store
                .state()
                .sessions
                .iter()
                .filter(|s| !s.completed)
                .count();
            println!("{open}");
        }
    }
    Ok(())
}
