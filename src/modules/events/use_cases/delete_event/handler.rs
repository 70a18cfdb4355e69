use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::EventId;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct DeleteEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: EventId) -> Result<(), ApplicationError> {
        match self.store.remove(id).await? {
            Some(_) => {
                tracing::info!(event_id = id, "event deleted");
                Ok(())
            }
            None => {
                tracing::warn!(event_id = id, "delete of unknown event");
                Err(ApplicationError::NotFound { id })
            }
        }
    }
}
