//! Points and streak rules.
//!
//! Pure functions over the profile; the store calls these from its
//! completion actions. Streak policy: calendar-date comparison in UTC.
//! Same day keeps the streak, exactly yesterday increments it, any
//! larger gap resets to 1. Elapsed hours are irrelevant; only the date
//! boundary matters.

use chrono::{DateTime, Utc};

use crate::model::UserProfile;

/// Points for completing a task.
pub const TASK_POINTS: u64 = 5;
/// Points for a naturally completed pomodoro.
pub const POMODORO_POINTS: u64 = 10;

/// Apply the streak rule for a point-awarding event at `now`, then
/// stamp `last_activity`.
pub fn touch_streak(profile: &mut UserProfile, now: DateTime<Utc>) {
    let today = now.date_naive();
    match profile.last_activity {
        Some(last) => {
            let last_day = last.date_naive();
            if last_day == today {
                // Same calendar day: streak unchanged.
            } else if last_day.succ_opt() == Some(today) {
                profile.streak += 1;
            } else {
                profile.streak = 1;
            }
        }
        None => profile.streak = 1,
    }
    profile.last_activity = Some(now);
}

/// Credit a task completion (false -> true transition).
pub fn award_task_completion(profile: &mut UserProfile, now: DateTime<Utc>) {
    profile.points += TASK_POINTS;
    profile.total_tasks_completed += 1;
    touch_streak(profile, now);
}

/// Reverse a task completion (true -> false via toggle). Not a
/// point-awarding event, so the streak is left alone.
pub fn revoke_task_completion(profile: &mut UserProfile) {
    profile.points = profile.points.saturating_sub(TASK_POINTS);
    profile.total_tasks_completed = profile.total_tasks_completed.saturating_sub(1);
}

/// Credit a naturally completed pomodoro session.
pub fn award_pomodoro_completion(profile: &mut UserProfile, now: DateTime<Utc>) {
    profile.points += POMODORO_POINTS;
    profile.total_pomodoros_completed += 1;
    touch_streak(profile, now);
}
