//! Configuration management commands.

use clap::Subcommand;
use focusdeck_core::{BlobStore, Config, Store};

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a config value
    Get {
        /// Config key (e.g. "timer.pomodoro_min", "ui.dark_mode")
        key: String,
    },
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// New value
        value: String,
    },
    /// List all config values
    List,
    /// Reset config to defaults
    Reset,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            match config.get(&key) {
                Some(value) => println!("{value}"),
                None => {
                    eprintln!("unknown key: {key}");
                    std::process::exit(1);
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            mirror_into_snapshot(config)?;
            println!("ok");
        }
        ConfigAction::List => {
            let config = Config::load_or_default();
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Reset => {
            let config = Config::default();
            config.save()?;
            mirror_into_snapshot(config)?;
            println!("config reset to defaults");
        }
    }
    Ok(())
}

/// Keep the snapshot's settings copy in step with the TOML file, so a
/// blob read alone rehydrates the current preferences.
fn mirror_into_snapshot(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    let blob = BlobStore::open()?;
    let mut store = Store::load(&blob)?;
    store.set_settings(config);
    store.save(&blob)?;
    Ok(())
}
