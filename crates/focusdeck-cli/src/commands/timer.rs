//! Timer control commands.
//!
//! The coordinator (engine + open-session bookkeeping) is serialized
//! into its own blob slot so the countdown survives across CLI
//! invocations; every command ticks it first so a long gap between
//! invocations is flushed as wall-clock time.

use clap::Subcommand;
use focusdeck_core::storage::SLOT_TIMER;
use focusdeck_core::{
    BlobStore, Config, SessionCoordinator, Store, TimerEngine, TimerMode,
};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the countdown
    Start {
        /// Task to associate with the session
        #[arg(long)]
        task_id: Option<String>,
        /// Project to associate with the session
        #[arg(long)]
        project_id: Option<String>,
    },
    /// Pause, freezing the remaining time
    Pause,
    /// Reset to idle (abandons any open session)
    Reset,
    /// Switch mode: pomodoro, short-break, or long-break
    Mode {
        /// Target mode
        mode: String,
        /// Confirm discarding an in-flight countdown
        #[arg(long)]
        yes: bool,
    },
    /// Print current timer state as JSON
    Status,
}

fn load_coordinator(blob: &BlobStore) -> SessionCoordinator {
    match blob.get(SLOT_TIMER) {
        Ok(Some(json)) => match serde_json::from_str::<SessionCoordinator>(&json) {
            Ok(coordinator) => return coordinator,
            Err(e) => eprintln!("warning: stored timer state could not be decoded, starting fresh: {e}"),
        },
        Ok(None) => {}
        Err(e) => eprintln!("warning: stored timer state unavailable, starting fresh: {e}"),
    }
    let config = Config::load_or_default();
    SessionCoordinator::new(TimerEngine::new(config.timer))
}

fn save_coordinator(
    blob: &BlobStore,
    coordinator: &SessionCoordinator,
) -> Result<(), Box<dyn std::error::Error>> {
    let json = serde_json::to_string(coordinator)?;
    blob.set(SLOT_TIMER, &json)?;
    Ok(())
}

fn parse_mode(s: &str) -> Result<TimerMode, String> {
    match s {
        "pomodoro" => Ok(TimerMode::Pomodoro),
        "short-break" => Ok(TimerMode::ShortBreak),
        "long-break" => Ok(TimerMode::LongBreak),
        other => Err(format!("unknown mode: {other}")),
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;
    let mut store = Store::load(&blob)?;
    let mut coordinator = load_coordinator(&blob);

    // Flush wall-clock time that passed since the last invocation.
    let caught_up = coordinator.tick(&mut store);
    for event in &caught_up {
        println!("{}", serde_json::to_string_pretty(event)?);
    }

    match action {
        TimerAction::Start {
            task_id,
            project_id,
        } => {
            if task_id.is_some() || project_id.is_some() {
                coordinator.select(task_id, project_id);
            }
            for event in coordinator.start(&mut store) {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Pause => match coordinator.pause() {
            Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
            None => println!("Timer is not running"),
        },
        TimerAction::Reset => {
            let event = coordinator.reset();
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        TimerAction::Mode { mode, yes } => {
            let to = parse_mode(&mode)?;
            match coordinator.change_mode(to, yes) {
                Some(event) => println!("{}", serde_json::to_string_pretty(&event)?),
                None => println!("A countdown is in flight; pass --yes to discard it"),
            }
        }
        TimerAction::Status => {
            println!("{}", serde_json::to_string_pretty(&coordinator.snapshot())?);
        }
    }

    save_coordinator(&blob, &coordinator)?;
    store.save(&blob)?;
    Ok(())
}
