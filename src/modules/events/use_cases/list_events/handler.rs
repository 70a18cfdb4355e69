use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::{Event, EventId};
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct ListEventsHandler<TStore>
where
    TStore: EventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListEventsHandler<TStore>
where
    TStore: EventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> Result<Vec<Event>, ApplicationError> {
        let events = self.store.list().await?;
        tracing::debug!(count = events.len(), "events listed");
        Ok(events)
    }

    pub async fn get(&self, id: EventId) -> Result<Event, ApplicationError> {
        self.store
            .find(id)
            .await?
            .ok_or(ApplicationError::NotFound { id })
    }
}
