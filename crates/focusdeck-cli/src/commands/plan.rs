//! Daily priority commands (the Ivy Lee list).

use chrono::{NaiveDate, Utc};
use clap::Subcommand;
use focusdeck_core::{BlobStore, Store};

#[derive(Subcommand)]
pub enum PlanAction {
    /// Set the day's ranked priorities (at most six task ids, in order)
    Set {
        /// Task ids, highest priority first
        task_ids: Vec<String>,
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Show the day's priorities
    Show {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;
    let mut store = Store::load(&blob)?;

    match action {
        PlanAction::Set { task_ids, date } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            let record = store.set_daily_priorities(date, task_ids)?;
            store.save(&blob)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        PlanAction::Show { date } => {
            let date = date.unwrap_or_else(|| Utc::now().date_naive());
            match store.daily_priorities_for(date) {
                Some(record) => println!("{}", serde_json::to_string_pretty(record)?),
                None => println!("No priorities set for {date}"),
            }
        }
    }
    Ok(())
}
