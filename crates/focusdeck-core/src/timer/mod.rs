mod coordinator;
mod engine;

pub use coordinator::SessionCoordinator;
pub use engine::{TimerEngine, TimerMode, TimerState};
