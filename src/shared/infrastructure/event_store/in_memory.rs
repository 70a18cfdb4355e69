use crate::modules::events::core::event::{Event, EventId, next_event_id, seed_events};
use crate::shared::infrastructure::event_store::{EventStore, StoreError};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryEventStore {
    events: Mutex<Vec<Event>>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        Self::with_events(seed_events())
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(events),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn list(&self) -> Result<Vec<Event>, StoreError> {
        self.ensure_online()?;
        Ok(self.events.lock().await.clone())
    }

    async fn find(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        self.ensure_online()?;
        let events = self.events.lock().await;
        Ok(events.iter().find(|e| e.id == id).cloned())
    }

    async fn insert(&self, title: String) -> Result<Event, StoreError> {
        self.ensure_online()?;
        let mut events = self.events.lock().await;
        let event = Event::new(next_event_id(&events), title);
        events.push(event.clone());
        Ok(event)
    }

    async fn update_title(
        &self,
        id: EventId,
        title: Option<String>,
    ) -> Result<Option<Event>, StoreError> {
        self.ensure_online()?;
        let mut events = self.events.lock().await;
        let Some(event) = events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };
        if let Some(title) = title {
            event.title = title;
        }
        Ok(Some(event.clone()))
    }

    async fn remove(&self, id: EventId) -> Result<Option<Event>, StoreError> {
        self.ensure_online()?;
        let mut events = self.events.lock().await;
        let position = events.iter().position(|e| e.id == id);
        Ok(position.map(|i| events.remove(i)))
    }
}
