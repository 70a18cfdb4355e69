use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shell::state::AppState;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    AppState::new(Arc::new(InMemoryEventStore::seeded()))
}

pub fn make_offline_state() -> AppState {
    let mut store = InMemoryEventStore::seeded();
    store.toggle_offline();
    AppState::new(Arc::new(store))
}

pub struct CreateEventBuilder {
    inner: CreateEvent,
}

impl Default for CreateEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CreateEventBuilder {
    pub fn new() -> Self {
        Self {
            inner: CreateEvent {
                title: Some("Rust Night".to_string()),
            },
        }
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = Some(v.into());
        self
    }

    pub fn without_title(mut self) -> Self {
        self.inner.title = None;
        self
    }

    pub fn build(self) -> CreateEvent {
        self.inner
    }
}
