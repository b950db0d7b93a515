//! Local calendar event actions.

use super::{fresh_id, Store};
use crate::error::{Result, ValidationError};
use crate::model::{CalendarEvent, NewCalendarEvent};

impl Store {
    /// Create a local calendar event. Rejects an end before the start
    /// before any mutation happens.
    pub fn add_calendar_event(&mut self, new: NewCalendarEvent) -> Result<CalendarEvent> {
        if new.end_date < new.start_date {
            return Err(ValidationError::InvalidTimeRange {
                start: new.start_date,
                end: new.end_date,
            }
            .into());
        }
        let event = CalendarEvent {
            id: fresh_id(),
            title: new.title,
            description: new.description,
            start_date: new.start_date,
            end_date: new.end_date,
            all_day: new.all_day,
            repeat: new.repeat,
            repeat_until: new.repeat_until,
            reminder_min: new.reminder_min,
            color: new.color,
        };
        self.state.calendar_events.push(event.clone());
        Ok(event)
    }

    pub fn update_calendar_event(&mut self, event: CalendarEvent) {
        if let Some(slot) = self
            .state
            .calendar_events
            .iter_mut()
            .find(|e| e.id == event.id)
        {
            *slot = event;
        }
    }

    pub fn delete_calendar_event(&mut self, id: &str) {
        self.state.calendar_events.retain(|e| e.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Repeat;
    use chrono::{Duration, Utc};

    #[test]
    fn rejects_inverted_range() {
        let mut store = Store::default();
        let now = Utc::now();
        let result = store.add_calendar_event(NewCalendarEvent {
            title: "Backwards".to_string(),
            description: None,
            start_date: now,
            end_date: now - Duration::hours(1),
            all_day: false,
            repeat: Repeat::None,
            repeat_until: None,
            reminder_min: None,
            color: None,
        });
        assert!(result.is_err());
        assert!(store.state().calendar_events.is_empty());
    }

    #[test]
    fn create_update_delete() {
        let mut store = Store::default();
        let now = Utc::now();
        let mut event = store
            .add_calendar_event(NewCalendarEvent {
                title: "Standup".to_string(),
                description: None,
                start_date: now,
                end_date: now + Duration::minutes(30),
                all_day: false,
                repeat: Repeat::Daily,
                repeat_until: None,
                reminder_min: Some(10),
                color: None,
            })
            .unwrap();

        event.title = "Daily standup".to_string();
        store.update_calendar_event(event.clone());
        assert_eq!(store.state().calendar_events[0].title, "Daily standup");

        store.delete_calendar_event(&event.id);
        assert!(store.state().calendar_events.is_empty());
        store.delete_calendar_event(&event.id); // idempotent
    }
}
