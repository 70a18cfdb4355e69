use crate::modules::events::core::event::EventId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateEvent {
    pub id: EventId,
    pub title: Option<String>,
}
