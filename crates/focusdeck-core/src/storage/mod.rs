mod blob;
mod config;
pub mod credentials;

pub use blob::{BlobStore, SLOT_APP_STATE, SLOT_AUTH_SESSION, SLOT_SEEDED, SLOT_TIMER};
pub use config::{Config, NotificationsConfig, TimerConfig, UiConfig};
pub use credentials::AuthSession;

use std::path::PathBuf;

use crate::error::{CoreError, Result};

/// Returns `~/.config/focusdeck[-dev]/` based on FOCUSDECK_ENV.
///
/// Set FOCUSDECK_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSDECK_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusdeck-dev")
    } else {
        base_dir.join("focusdeck")
    };

    std::fs::create_dir_all(&dir).map_err(CoreError::Io)?;
    Ok(dir)
}
