use crate::modules::events::use_cases::create_event::handler::CreateEventHandler;
use crate::modules::events::use_cases::delete_event::handler::DeleteEventHandler;
use crate::modules::events::use_cases::list_events::handler::ListEventsHandler;
use crate::modules::events::use_cases::update_event::handler::UpdateEventHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryEventStore>,
    pub create_handler: Arc<CreateEventHandler<InMemoryEventStore>>,
    pub update_handler: Arc<UpdateEventHandler<InMemoryEventStore>>,
    pub delete_handler: Arc<DeleteEventHandler<InMemoryEventStore>>,
    pub list_handler: Arc<ListEventsHandler<InMemoryEventStore>>,
}

impl AppState {
    /// All handlers share `store`.
    pub fn new(store: Arc<InMemoryEventStore>) -> Self {
        Self {
            create_handler: Arc::new(CreateEventHandler::new(store.clone())),
            update_handler: Arc::new(UpdateEventHandler::new(store.clone())),
            delete_handler: Arc::new(DeleteEventHandler::new(store.clone())),
            list_handler: Arc::new(ListEventsHandler::new(store.clone())),
            store,
        }
    }
}
