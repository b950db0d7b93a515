//! Drift-corrected countdown engine.
//!
//! A wall-clock-based state machine with no internal thread: the caller
//! invokes `tick()` periodically and the engine measures real elapsed
//! time between calls. A throttled or delayed tick source (backgrounded
//! tab, coarse interval) therefore still produces an accurate remaining
//! time -- a single late tick spanning the whole countdown completes it
//! cleanly instead of undershooting by the missed callbacks.
//!
//! ## State transitions
//!
//! ```text
//! Idle -> Running -> Paused -> Running
//!                 \-> (zero) -> Completed -> Idle (next mode loaded)
//! any  -> reset  -> Idle
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;
use crate::storage::TimerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
    Paused,
    /// Transient: reported in the completion event; the engine itself
    /// lands back in `Idle` with the next mode loaded.
    Completed,
}

/// Which countdown the engine is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerMode {
    Pomodoro,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    pub fn is_break(self) -> bool {
        !matches!(self, TimerMode::Pomodoro)
    }
}

/// Core timer engine.
///
/// Serializable so the CLI can persist it in a blob slot between
/// invocations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerEngine {
    config: TimerConfig,
    mode: TimerMode,
    state: TimerState,
    /// Remaining time in milliseconds for the current countdown.
    remaining_ms: u64,
    /// Completed pomodoros in the current cycle; every
    /// `config.long_break_interval`-th selects the long break.
    completed_pomodoros: u32,
    /// Epoch ms of the last flush while running. `None` when idle or
    /// paused.
    #[serde(default)]
    last_tick_epoch_ms: Option<u64>,
}

impl TimerEngine {
    /// Create an idle engine in pomodoro mode with the configured
    /// durations loaded.
    pub fn new(config: TimerConfig) -> Self {
        let remaining_ms = mode_duration_ms(&config, TimerMode::Pomodoro);
        Self {
            config,
            mode: TimerMode::Pomodoro,
            state: TimerState::Idle,
            remaining_ms,
            completed_pomodoros: 0,
            last_tick_epoch_ms: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn completed_pomodoros(&self) -> u32 {
        self.completed_pomodoros
    }

    pub fn total_ms(&self) -> u64 {
        mode_duration_ms(&self.config, self.mode)
    }

    /// 0.0 .. 1.0 progress through the current countdown.
    pub fn progress(&self) -> f64 {
        let total = self.total_ms();
        if total == 0 {
            return 0.0;
        }
        1.0 - (self.remaining_ms as f64 / total as f64)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            mode: self.mode,
            remaining_ms: self.remaining_ms,
            total_ms: self.total_ms(),
            progress: self.progress(),
            completed_pomodoros: self.completed_pomodoros,
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Start from idle, or resume from pause continuing at the frozen
    /// remaining time. `None` if already running.
    pub fn start(&mut self) -> Option<Event> {
        self.start_at(now_ms())
    }

    /// Deterministic-clock variant of [`TimerEngine::start`].
    pub fn start_at(&mut self, epoch_ms: u64) -> Option<Event> {
        match self.state {
            TimerState::Idle | TimerState::Paused | TimerState::Completed => {
                let fresh = self.state != TimerState::Paused;
                self.state = TimerState::Running;
                self.last_tick_epoch_ms = Some(epoch_ms);
                Some(Event::TimerStarted {
                    mode: self.mode,
                    duration_secs: self.remaining_ms / 1000,
                    fresh,
                    at: Utc::now(),
                })
            }
            TimerState::Running => None,
        }
    }

    /// Freeze the remaining time. `None` unless running.
    pub fn pause(&mut self) -> Option<Event> {
        self.pause_at(now_ms())
    }

    pub fn pause_at(&mut self, epoch_ms: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush_elapsed(epoch_ms);
        self.state = TimerState::Paused;
        self.last_tick_epoch_ms = None;
        Some(Event::TimerPaused {
            remaining_ms: self.remaining_ms,
            at: Utc::now(),
        })
    }

    /// Back to idle with the current mode's full duration reloaded.
    /// Any open session is the coordinator's problem, not the engine's.
    pub fn reset(&mut self) -> Event {
        self.state = TimerState::Idle;
        self.last_tick_epoch_ms = None;
        self.remaining_ms = self.total_ms();
        Event::TimerReset {
            mode: self.mode,
            at: Utc::now(),
        }
    }

    /// Switch mode explicitly.
    ///
    /// While running or paused this discards progress, so it requires
    /// `confirmed = true`; declining returns `None` and leaves all
    /// state untouched. Always lands in idle with the new mode's full
    /// duration loaded.
    pub fn change_mode(&mut self, to: TimerMode, confirmed: bool) -> Option<Event> {
        let in_progress = matches!(self.state, TimerState::Running | TimerState::Paused);
        if in_progress && !confirmed {
            return None;
        }
        let from = self.mode;
        self.mode = to;
        self.state = TimerState::Idle;
        self.last_tick_epoch_ms = None;
        self.remaining_ms = self.total_ms();
        Some(Event::ModeChanged {
            from,
            to,
            at: Utc::now(),
        })
    }

    /// Replace the configured durations. Takes effect on the next
    /// reset/mode change; a countdown in flight keeps its remaining
    /// time.
    pub fn set_config(&mut self, config: TimerConfig) {
        self.config = config;
        if self.state == TimerState::Idle {
            self.remaining_ms = self.total_ms();
        }
    }

    /// Call periodically while running. Flushes wall-clock elapsed time
    /// and returns `Some(Event::TimerCompleted)` on natural expiry,
    /// after which the engine is idle in the auto-selected next mode.
    pub fn tick(&mut self) -> Option<Event> {
        self.tick_at(now_ms())
    }

    /// Deterministic-clock variant of [`TimerEngine::tick`].
    pub fn tick_at(&mut self, epoch_ms: u64) -> Option<Event> {
        if self.state != TimerState::Running {
            return None;
        }
        self.flush_elapsed(epoch_ms);
        if self.remaining_ms > 0 {
            return None;
        }

        let finished = self.mode;
        let next = if finished == TimerMode::Pomodoro {
            self.completed_pomodoros += 1;
            let interval = self.config.long_break_interval.max(1);
            if self.completed_pomodoros % interval == 0 {
                TimerMode::LongBreak
            } else {
                TimerMode::ShortBreak
            }
        } else {
            TimerMode::Pomodoro
        };

        self.mode = next;
        self.state = TimerState::Idle;
        self.last_tick_epoch_ms = None;
        self.remaining_ms = self.total_ms();

        Some(Event::TimerCompleted {
            mode: finished,
            next_mode: next,
            completed_pomodoros: self.completed_pomodoros,
            at: Utc::now(),
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    /// Subtract whole elapsed seconds since the last flush, clamped at
    /// zero. Sub-second remainders stay accounted for in the stored
    /// tick timestamp.
    fn flush_elapsed(&mut self, epoch_ms: u64) {
        if let Some(last) = self.last_tick_epoch_ms {
            let elapsed = epoch_ms.saturating_sub(last);
            let whole_secs_ms = (elapsed / 1000) * 1000;
            if whole_secs_ms == 0 {
                return;
            }
            self.remaining_ms = self.remaining_ms.saturating_sub(whole_secs_ms);
            self.last_tick_epoch_ms = Some(last + whole_secs_ms);
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(TimerConfig::default())
    }
}

fn mode_duration_ms(config: &TimerConfig, mode: TimerMode) -> u64 {
    let minutes = match mode {
        TimerMode::Pomodoro => config.pomodoro_min,
        TimerMode::ShortBreak => config.short_break_min,
        TimerMode::LongBreak => config.long_break_min,
    };
    minutes.saturating_mul(60).saturating_mul(1000)
}

fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
