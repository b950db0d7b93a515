//! # FocusDeck Core Library
//!
//! Core business logic for FocusDeck, a personal productivity app:
//! task/project management, a drift-corrected pomodoro timer, Ivy Lee
//! daily priorities, and gamified points/streaks. All operations are
//! available through the standalone CLI binary; any GUI is a thin
//! layer over this same library.
//!
//! ## Architecture
//!
//! - **Store**: single owned state container; every mutation is a
//!   named action, persistence is an explicit save into a durable
//!   key-value blob slot
//! - **Timer Engine**: a wall-clock-based state machine that requires
//!   the caller to periodically invoke `tick()` for progress updates
//! - **Session Coordinator**: bridges engine lifecycle events into
//!   pomodoro-session store actions, which feed the gamification rules
//! - **Integrations**: best-effort remote calendar and music clients
//!
//! ## Key Components
//!
//! - [`Store`]: state container and action surface
//! - [`TimerEngine`]: core timer state machine
//! - [`SessionCoordinator`]: timer-to-store bridge
//! - [`BlobStore`]: durable snapshot storage
//! - [`Config`]: application configuration management

pub mod error;
pub mod events;
pub mod gamification;
pub mod integrations;
pub mod model;
pub mod notify;
pub mod storage;
pub mod store;
pub mod timer;

pub use error::{ApiError, AuthError, ConfigError, CoreError, StorageError, ValidationError};
pub use events::Event;
pub use model::{
    CalendarEvent, DailyPriority, NewCalendarEvent, NewProject, NewTask, PomodoroSession, Project,
    Repeat, Subtask, Tag, Task, TaskPriority, TaskStatus, UserProfile,
};
pub use notify::{Reminder, ReminderScheduler};
pub use storage::{AuthSession, BlobStore, Config, TimerConfig};
pub use store::{AppState, SessionStats, Store};
pub use timer::{SessionCoordinator, TimerEngine, TimerMode, TimerState};
