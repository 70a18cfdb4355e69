use serde::{Deserialize, Serialize};

pub type EventId = i64;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
}

impl Event {
    pub fn new(id: EventId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
        }
    }
}

/// Records every fresh store starts with.
pub fn seed_events() -> Vec<Event> {
    vec![
        Event::new(1, "Tech Meetup"),
        Event::new(2, "Python Workshop"),
    ]
}

/// One more than the highest id in `events`, so `1` for an empty slice.
/// Ids freed by a delete are reused only when they were the maximum.
pub fn next_event_id(events: &[Event]) -> EventId {
    events.iter().map(|e| e.id).max().unwrap_or(0) + 1
}
