//! Session coordinator.
//!
//! Bridges the timer engine and the store: a fresh pomodoro start opens
//! a session record, natural completion credits it, reset or a
//! confirmed mode change abandons it. An abandoned record stays in
//! storage permanently marked incomplete; statistics filter on
//! `completed`.

use serde::{Deserialize, Serialize};

use super::engine::{TimerEngine, TimerMode, TimerState};
use crate::events::Event;
use crate::store::Store;

/// Owns the engine plus the retained open-session id and the currently
/// selected task/project association.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionCoordinator {
    engine: TimerEngine,
    open_session_id: Option<String>,
    selected_task_id: Option<String>,
    selected_project_id: Option<String>,
}

impl SessionCoordinator {
    pub fn new(engine: TimerEngine) -> Self {
        Self {
            engine,
            open_session_id: None,
            selected_task_id: None,
            selected_project_id: None,
        }
    }

    pub fn engine(&self) -> &TimerEngine {
        &self.engine
    }

    /// Association used when the next session opens.
    pub fn select(&mut self, task_id: Option<String>, project_id: Option<String>) {
        self.selected_task_id = task_id;
        self.selected_project_id = project_id;
    }

    pub fn open_session_id(&self) -> Option<&str> {
        self.open_session_id.as_deref()
    }

    /// Start or resume. A fresh start in pomodoro mode opens a session;
    /// resuming from pause and break-mode starts never do.
    pub fn start(&mut self, store: &mut Store) -> Vec<Event> {
        self.start_at(store, now_ms())
    }

    pub fn start_at(&mut self, store: &mut Store, epoch_ms: u64) -> Vec<Event> {
        let mut events = Vec::new();
        let Some(started) = self.engine.start_at(epoch_ms) else {
            return events;
        };
        let fresh = matches!(started, Event::TimerStarted { fresh: true, .. });
        events.push(started);

        if fresh && self.engine.mode() == TimerMode::Pomodoro {
            let session = store.start_session(
                self.selected_task_id.clone(),
                self.selected_project_id.clone(),
            );
            events.push(Event::SessionOpened {
                session_id: session.id.clone(),
                at: session.start_time,
            });
            self.open_session_id = Some(session.id);
        }
        events
    }

    pub fn pause(&mut self) -> Option<Event> {
        self.engine.pause()
    }

    pub fn pause_at(&mut self, epoch_ms: u64) -> Option<Event> {
        self.engine.pause_at(epoch_ms)
    }

    /// Reset the countdown, abandoning any open session uncredited.
    pub fn reset(&mut self) -> Event {
        self.open_session_id = None;
        self.engine.reset()
    }

    /// Explicit mode change; discarding progress requires confirmation.
    /// On success any open session is abandoned.
    pub fn change_mode(&mut self, to: TimerMode, confirmed: bool) -> Option<Event> {
        let event = self.engine.change_mode(to, confirmed)?;
        self.open_session_id = None;
        Some(event)
    }

    /// Drive the countdown. On natural pomodoro expiry the retained
    /// session is credited through the store, which awards points.
    pub fn tick(&mut self, store: &mut Store) -> Vec<Event> {
        self.tick_at(store, now_ms())
    }

    pub fn tick_at(&mut self, store: &mut Store, epoch_ms: u64) -> Vec<Event> {
        let mut events = Vec::new();
        let Some(completed) = self.engine.tick_at(epoch_ms) else {
            return events;
        };
        let finished_pomodoro =
            matches!(completed, Event::TimerCompleted { mode: TimerMode::Pomodoro, .. });
        events.push(completed);

        if finished_pomodoro {
            if let Some(session_id) = self.open_session_id.take() {
                store.complete_session(&session_id);
                events.push(Event::SessionCompleted {
                    session_id,
                    at: chrono::Utc::now(),
                });
            }
        }
        events
    }

    /// Snapshot of the underlying engine state.
    pub fn snapshot(&self) -> Event {
        self.engine.snapshot()
    }

    pub fn state(&self) -> TimerState {
        self.engine.state()
    }
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::POMODORO_POINTS;
    use crate::storage::TimerConfig;

    const POMO_MS: u64 = 25 * 60 * 1000;

    fn coordinator() -> SessionCoordinator {
        SessionCoordinator::new(TimerEngine::new(TimerConfig::default()))
    }

    #[test]
    fn fresh_pomodoro_start_opens_session() {
        let mut store = Store::default();
        let mut c = coordinator();
        c.select(Some("t-1".to_string()), None);

        let events = c.start_at(&mut store, 0);
        assert_eq!(events.len(), 2);
        assert!(c.open_session_id().is_some());

        let session = &store.state().sessions[0];
        assert_eq!(session.task_id.as_deref(), Some("t-1"));
        assert!(!session.completed);
    }

    #[test]
    fn resume_does_not_open_second_session() {
        let mut store = Store::default();
        let mut c = coordinator();
        c.start_at(&mut store, 0);
        c.pause_at(5_000);
        let events = c.start_at(&mut store, 10_000);
        assert_eq!(events.len(), 1);
        assert_eq!(store.state().sessions.len(), 1);
    }

    #[test]
    fn break_start_opens_nothing() {
        let mut store = Store::default();
        let mut c = coordinator();
        c.change_mode(TimerMode::ShortBreak, false);
        c.start_at(&mut store, 0);
        assert!(store.state().sessions.is_empty());
        assert!(c.open_session_id().is_none());
    }

    #[test]
    fn natural_completion_credits_session() {
        let mut store = Store::default();
        let mut c = coordinator();
        c.start_at(&mut store, 0);
        let events = c.tick_at(&mut store, POMO_MS);
        assert_eq!(events.len(), 2);
        assert!(c.open_session_id().is_none());

        let session = &store.state().sessions[0];
        assert!(session.completed);
        assert!(session.end_time.is_some());
        assert_eq!(store.profile().points, POMODORO_POINTS);
    }

    #[test]
    fn reset_abandons_session_record() {
        let mut store = Store::default();
        let mut c = coordinator();
        c.start_at(&mut store, 0);
        let session_id = c.open_session_id().unwrap().to_string();

        c.reset();

        assert!(c.open_session_id().is_none());
        let session = store.get_session(&session_id).unwrap();
        assert!(!session.completed);
        assert!(session.end_time.is_none());
        assert_eq!(store.profile().points, 0);

        // A later break completion cannot retroactively credit it.
        c.change_mode(TimerMode::ShortBreak, false);
        c.start_at(&mut store, 0);
        c.tick_at(&mut store, 5 * 60 * 1000);
        assert!(!store.get_session(&session_id).unwrap().completed);
    }

    #[test]
    fn declined_mode_change_keeps_session_open() {
        let mut store = Store::default();
        let mut c = coordinator();
        c.start_at(&mut store, 0);
        assert!(c.change_mode(TimerMode::LongBreak, false).is_none());
        assert!(c.open_session_id().is_some());
    }

    #[test]
    fn four_pomodoros_with_resets_between() {
        let mut store = Store::default();
        let mut c = coordinator();
        let mut clock = 0u64;
        for _ in 0..4 {
            c.start_at(&mut store, clock);
            clock += POMO_MS;
            c.tick_at(&mut store, clock);
            // Back to pomodoro for the next round.
            c.change_mode(TimerMode::Pomodoro, false);
        }
        assert_eq!(c.engine().completed_pomodoros(), 4);
        assert_eq!(store.profile().total_pomodoros_completed, 4);
        assert_eq!(store.state().sessions.len(), 4);
        assert!(store.state().sessions.iter().all(|s| s.completed));
    }
}
