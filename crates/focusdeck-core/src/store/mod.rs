//! The persistent state store.
//!
//! Single source of truth for every domain collection plus the user
//! profile and app preferences. All mutations go through named action
//! methods; persistence is an explicit [`Store::save`] call the caller
//! makes after a batch of mutations, so the state transitions stay pure
//! and unit-testable without a storage backend.

mod calendar;
mod projects;
mod seed;
mod sessions;
mod tasks;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::model::{
    CalendarEvent, DailyPriority, PomodoroSession, Project, Tag, Task, UserProfile,
};
use crate::storage::{BlobStore, Config, SLOT_APP_STATE, SLOT_SEEDED};

/// Everything the durable snapshot holds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub sessions: Vec<PomodoroSession>,
    #[serde(default)]
    pub daily_priorities: Vec<DailyPriority>,
    #[serde(default)]
    pub calendar_events: Vec<CalendarEvent>,
    #[serde(default)]
    pub profile: UserProfile,
    /// Preference snapshot mirrored from the TOML config so the whole
    /// UI state rehydrates from one blob read.
    #[serde(default)]
    pub settings: Config,
}

/// Completed-session statistics. Abandoned sessions (`completed ==
/// false`) are filtered out before counting.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionStats {
    pub completed_total: u64,
    pub completed_today: u64,
    pub focus_min_total: u64,
    pub focus_min_today: u64,
}

/// The state container. One instance, owned by the caller and passed by
/// reference to whatever layer needs it.
#[derive(Debug, Clone, Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    /// A store over an explicit state, mostly for tests.
    pub fn with_state(state: AppState) -> Self {
        Self { state }
    }

    /// Rehydrate from the blob store.
    ///
    /// First run (no snapshot and no seed marker) loads the demo
    /// dataset so the UI is never empty, and sets the marker so a later
    /// data wipe does not re-seed.
    ///
    /// # Errors
    /// Returns an error if the blob store fails or an existing snapshot
    /// cannot be decoded.
    pub fn load(blob: &BlobStore) -> Result<Self> {
        if let Some(json) = blob.get(SLOT_APP_STATE)? {
            let state: AppState =
                serde_json::from_str(&json).map_err(|e| StorageError::CorruptSnapshot {
                    slot: SLOT_APP_STATE.to_string(),
                    message: e.to_string(),
                })?;
            return Ok(Self { state });
        }

        let mut store = Self::default();
        if blob.get(SLOT_SEEDED)?.is_none() {
            store.state = seed::demo_state();
            blob.set(SLOT_SEEDED, "1")?;
            store.save(blob)?;
        }
        Ok(store)
    }

    /// Serialize the whole state into its blob slot.
    pub fn save(&self, blob: &BlobStore) -> Result<()> {
        let json = serde_json::to_string(&self.state)?;
        blob.set(SLOT_APP_STATE, &json)
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Direct state access for callers that own the single-writer
    /// discipline (tests, migrations). Everything else goes through the
    /// action methods.
    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn profile(&self) -> &UserProfile {
        &self.state.profile
    }

    /// Update the profile's identity fields.
    pub fn update_profile(&mut self, name: Option<String>, avatar: Option<String>) {
        if let Some(name) = name {
            self.state.profile.name = name;
        }
        if let Some(avatar) = avatar {
            self.state.profile.avatar = Some(avatar);
        }
    }

    /// Replace the preference snapshot carried in the blob.
    pub fn set_settings(&mut self, settings: Config) {
        self.state.settings = settings;
    }

    /// Completed-session counts and focus minutes, today and all-time.
    pub fn session_stats(&self, now: DateTime<Utc>) -> SessionStats {
        let today = now.date_naive();
        let mut stats = SessionStats::default();
        for session in self.state.sessions.iter().filter(|s| s.completed) {
            let minutes = session.duration_min.unwrap_or(0);
            stats.completed_total += 1;
            stats.focus_min_total += minutes;
            if session.start_time.date_naive() == today {
                stats.completed_today += 1;
                stats.focus_min_today += minutes;
            }
        }
        stats
    }
}

pub(crate) fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}
