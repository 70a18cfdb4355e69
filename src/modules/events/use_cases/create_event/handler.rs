use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::infrastructure::event_store::EventStore;
use std::sync::Arc;

pub struct CreateEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> CreateEventHandler<TStore>
where
    TStore: EventStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, command: CreateEvent) -> Result<Event, ApplicationError> {
        let title = match command.title {
            Some(title) if !title.is_empty() => title,
            _ => {
                tracing::warn!("rejected event without a title");
                return Err(ApplicationError::title_required());
            }
        };

        let event = self.store.insert(title).await?;
        tracing::info!(event_id = event.id, "event created");
        Ok(event)
    }
}
