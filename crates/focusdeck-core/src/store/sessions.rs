//! Pomodoro session and daily priority actions.

use chrono::{NaiveDate, Utc};

use super::{fresh_id, Store};
use crate::error::{Result, ValidationError};
use crate::gamification;
use crate::model::{DailyPriority, PomodoroSession, MAX_DAILY_PRIORITIES};

impl Store {
    /// Open a pomodoro session. Called when a pomodoro (never a break)
    /// timer starts; the task/project association is a weak reference.
    pub fn start_session(
        &mut self,
        task_id: Option<String>,
        project_id: Option<String>,
    ) -> PomodoroSession {
        let session = PomodoroSession {
            id: fresh_id(),
            start_time: Utc::now(),
            end_time: None,
            duration_min: None,
            completed: false,
            task_id,
            project_id,
        };
        self.state.sessions.push(session.clone());
        session
    }

    /// Finalize a session on natural timer expiry: stamps the end time,
    /// computes the duration, and credits pomodoro points. No-op for
    /// unknown or already-completed ids.
    pub fn complete_session(&mut self, id: &str) {
        let now = Utc::now();
        let Some(session) = self.state.sessions.iter_mut().find(|s| s.id == id) else {
            return;
        };
        if session.completed {
            return;
        }
        session.completed = true;
        session.end_time = Some(now);
        session.duration_min = Some((now - session.start_time).num_minutes().max(0) as u64);
        gamification::award_pomodoro_completion(&mut self.state.profile, now);
    }

    pub fn get_session(&self, id: &str) -> Option<&PomodoroSession> {
        self.state.sessions.iter().find(|s| s.id == id)
    }

    /// Upsert the day's priority list, keyed by calendar date.
    ///
    /// Dates are canonical by construction (`NaiveDate` carries no time
    /// component); callers holding a timestamp convert with
    /// `date_naive()` first. Rejects lists over the Ivy Lee cap of six
    /// before any mutation.
    pub fn set_daily_priorities(
        &mut self,
        date: NaiveDate,
        task_ids: Vec<String>,
    ) -> Result<DailyPriority> {
        if task_ids.len() > MAX_DAILY_PRIORITIES {
            return Err(ValidationError::TooManyPriorities {
                max: MAX_DAILY_PRIORITIES,
                got: task_ids.len(),
            }
            .into());
        }
        if let Some(record) = self
            .state
            .daily_priorities
            .iter_mut()
            .find(|r| r.date == date)
        {
            record.task_ids = task_ids;
            return Ok(record.clone());
        }
        let record = DailyPriority {
            id: fresh_id(),
            date,
            task_ids,
        };
        self.state.daily_priorities.push(record.clone());
        Ok(record)
    }

    pub fn daily_priorities_for(&self, date: NaiveDate) -> Option<&DailyPriority> {
        self.state.daily_priorities.iter().find(|r| r.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gamification::POMODORO_POINTS;

    #[test]
    fn start_session_is_open_until_completed() {
        let mut store = Store::default();
        let session = store.start_session(Some("t-1".to_string()), None);
        let stored = store.get_session(&session.id).unwrap();
        assert!(!stored.completed);
        assert!(stored.end_time.is_none());
        assert!(stored.duration_min.is_none());
    }

    #[test]
    fn complete_session_awards_points_once() {
        let mut store = Store::default();
        let session = store.start_session(None, None);
        store.complete_session(&session.id);
        store.complete_session(&session.id);

        let stored = store.get_session(&session.id).unwrap();
        assert!(stored.completed);
        assert!(stored.end_time.is_some());
        assert_eq!(store.profile().points, POMODORO_POINTS);
        assert_eq!(store.profile().total_pomodoros_completed, 1);
    }

    #[test]
    fn abandoned_session_stays_incomplete() {
        let mut store = Store::default();
        let session = store.start_session(None, None);
        // Nothing ever finalizes it: the record persists as-is.
        let stored = store.get_session(&session.id).unwrap();
        assert!(!stored.completed);
        assert!(stored.end_time.is_none());
    }

    #[test]
    fn daily_priorities_upsert_by_date() {
        let mut store = Store::default();
        let date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();

        store
            .set_daily_priorities(date, vec!["a".to_string(), "b".to_string()])
            .unwrap();
        store
            .set_daily_priorities(date, vec!["c".to_string()])
            .unwrap();

        assert_eq!(store.state().daily_priorities.len(), 1);
        let record = store.daily_priorities_for(date).unwrap();
        assert_eq!(record.task_ids, vec!["c".to_string()]);
    }

    #[test]
    fn priority_cap_rejected_without_mutation() {
        let mut store = Store::default();
        let date = NaiveDate::from_ymd_opt(2026, 4, 1).unwrap();
        let seven: Vec<String> = (0..7).map(|i| format!("t-{i}")).collect();
        assert!(store.set_daily_priorities(date, seven).is_err());
        assert!(store.state().daily_priorities.is_empty());
    }
}
