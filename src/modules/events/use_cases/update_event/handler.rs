use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct UpdateEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// Any present title is written as given, including the empty string.
    pub async fn handle(&self, command: UpdateEvent) -> Result<Event, ApplicationError> {
        let UpdateEvent { id, title } = command;
        match self.store.update_title(id, title).await? {
            Some(event) => {
                tracing::info!(event_id = id, "event updated");
                Ok(event)
            }
            None => {
                tracing::warn!(event_id = id, "update of unknown event");
                Err(ApplicationError::NotFound { id })
            }
        }
    }
}
