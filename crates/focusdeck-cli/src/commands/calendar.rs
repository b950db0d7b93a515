//! Local and remote calendar commands.
//!
//! Remote failures never corrupt or block local state: they are
//! reported as warnings and the command carries on with local data.

use chrono::{DateTime, Duration, Utc};
use clap::Subcommand;
use focusdeck_core::integrations::CalendarClient;
use focusdeck_core::storage::credentials;
use focusdeck_core::{BlobStore, Config, NewCalendarEvent, Repeat, Store};

#[derive(Subcommand)]
pub enum CalendarAction {
    /// Create a local event
    Add {
        /// Event title
        title: String,
        /// Start (RFC 3339)
        #[arg(long)]
        start: DateTime<Utc>,
        /// End (RFC 3339)
        #[arg(long)]
        end: DateTime<Utc>,
        /// Description
        #[arg(long)]
        description: Option<String>,
        /// All-day event
        #[arg(long)]
        all_day: bool,
        /// Reminder offset in minutes before start
        #[arg(long)]
        reminder: Option<u32>,
    },
    /// List local events
    List,
    /// Delete a local event
    Delete {
        /// Event ID
        id: String,
    },
    /// Push a local event to the remote calendar
    Push {
        /// Local event ID
        id: String,
    },
    /// List remote events for the next N hours
    Upcoming {
        /// Window size in hours
        #[arg(long, default_value = "24")]
        hours: i64,
    },
}

pub fn run(action: CalendarAction) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;
    let mut store = Store::load(&blob)?;

    match action {
        CalendarAction::Add {
            title,
            start,
            end,
            description,
            all_day,
            reminder,
        } => {
            let event = store.add_calendar_event(NewCalendarEvent {
                title,
                description,
                start_date: start,
                end_date: end,
                all_day,
                repeat: Repeat::None,
                repeat_until: None,
                reminder_min: reminder,
                color: None,
            })?;
            store.save(&blob)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        CalendarAction::List => {
            println!(
                "{}",
                serde_json::to_string_pretty(&store.state().calendar_events)?
            );
        }
        CalendarAction::Delete { id } => {
            store.delete_calendar_event(&id);
            store.save(&blob)?;
            println!("Event deleted: {id}");
        }
        CalendarAction::Push { id } => {
            let event = store
                .state()
                .calendar_events
                .iter()
                .find(|e| e.id == id)
                .cloned()
                .ok_or(format!("Event not found: {id}"))?;
            let config = Config::load_or_default();
            let client = CalendarClient::new(credentials::token()?);
            let runtime = tokio::runtime::Runtime::new()?;
            match runtime.block_on(client.create_event(
                &event.title,
                event.description.as_deref(),
                event.start_date,
                event.end_date,
                &config.ui.timezone,
            )) {
                Ok(remote_id) => println!("Pushed as remote event {remote_id}"),
                Err(e) => eprintln!("warning: remote calendar unavailable: {e}"),
            }
        }
        CalendarAction::Upcoming { hours } => {
            let client = CalendarClient::new(credentials::token()?);
            let runtime = tokio::runtime::Runtime::new()?;
            let now = Utc::now();
            match runtime.block_on(client.list_events(now, now + Duration::hours(hours))) {
                Ok(events) => {
                    for event in events {
                        println!(
                            "{}  {}  {}",
                            event.start.format("%Y-%m-%d %H:%M"),
                            if event.all_day { "[all-day]" } else { "         " },
                            event.summary
                        );
                    }
                }
                Err(e) => eprintln!("warning: remote calendar unavailable: {e}"),
            }
        }
    }
    Ok(())
}
