//! End-to-end flow: coordinator drives the engine, the store records
//! sessions and points, and the whole state survives a blob round trip.

use focusdeck_core::gamification::{POMODORO_POINTS, TASK_POINTS};
use focusdeck_core::storage::TimerConfig;
use focusdeck_core::{
    BlobStore, NewTask, SessionCoordinator, Store, TimerEngine, TimerMode, TimerState,
};

const POMO_MS: u64 = 25 * 60 * 1000;

#[test]
fn pomodoro_cycle_persists_across_reload() {
    let blob = BlobStore::open_memory().unwrap();
    let mut store = Store::default();
    let mut coordinator = SessionCoordinator::new(TimerEngine::new(TimerConfig::default()));

    let task = store.add_task(NewTask {
        title: "Deep work".to_string(),
        ..Default::default()
    });
    coordinator.select(Some(task.id.clone()), None);

    // Run one full pomodoro to natural expiry.
    coordinator.start_at(&mut store, 0);
    let events = coordinator.tick_at(&mut store, POMO_MS);
    assert_eq!(events.len(), 2, "completion + session credit");
    assert_eq!(coordinator.state(), TimerState::Idle);
    assert_eq!(coordinator.engine().mode(), TimerMode::ShortBreak);

    // Complete the task too, then save.
    store.complete_task(&task.id);
    store.save(&blob).unwrap();

    let reloaded = Store::load(&blob).unwrap();
    assert_eq!(
        reloaded.profile().points,
        POMODORO_POINTS + TASK_POINTS
    );
    assert_eq!(reloaded.profile().total_pomodoros_completed, 1);
    assert_eq!(reloaded.profile().total_tasks_completed, 1);
    assert_eq!(reloaded.profile().streak, 1);

    let session = &reloaded.state().sessions[0];
    assert!(session.completed);
    assert_eq!(session.task_id.as_deref(), Some(task.id.as_str()));
}

#[test]
fn abandoned_session_survives_reload_incomplete() {
    let blob = BlobStore::open_memory().unwrap();
    let mut store = Store::default();
    let mut coordinator = SessionCoordinator::new(TimerEngine::new(TimerConfig::default()));

    coordinator.start_at(&mut store, 0);
    let session_id = coordinator.open_session_id().unwrap().to_string();
    coordinator.reset();
    store.save(&blob).unwrap();

    let reloaded = Store::load(&blob).unwrap();
    let session = reloaded.get_session(&session_id).unwrap();
    assert!(!session.completed);
    assert!(session.end_time.is_none());
    assert_eq!(reloaded.profile().points, 0);

    let stats = reloaded.session_stats(chrono::Utc::now());
    assert_eq!(stats.completed_total, 0);
}

#[test]
fn long_break_lands_on_every_fourth_pomodoro() {
    let mut store = Store::default();
    let mut coordinator = SessionCoordinator::new(TimerEngine::new(TimerConfig::default()));

    let mut clock = 0u64;
    let mut break_modes = Vec::new();
    for _ in 0..4 {
        coordinator.start_at(&mut store, clock);
        clock += POMO_MS;
        coordinator.tick_at(&mut store, clock);
        break_modes.push(coordinator.engine().mode());
        coordinator.change_mode(TimerMode::Pomodoro, false);
    }

    assert_eq!(
        break_modes,
        vec![
            TimerMode::ShortBreak,
            TimerMode::ShortBreak,
            TimerMode::ShortBreak,
            TimerMode::LongBreak,
        ]
    );
}
