//! Domain types shared across the store, timer, and CLI.
//!
//! Pure data: no behavior beyond serde derives and defaults.

mod calendar;
mod daily;
mod profile;
mod project;
mod session;
mod task;

pub use calendar::{CalendarEvent, NewCalendarEvent, Repeat};
pub use daily::{DailyPriority, MAX_DAILY_PRIORITIES};
pub use profile::UserProfile;
pub use project::{NewProject, Project, Tag};
pub use session::PomodoroSession;
pub use task::{NewTask, Subtask, Task, TaskPriority, TaskStatus};
