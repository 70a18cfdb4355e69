use crate::modules::events::core::event::EventId;
use crate::shared::infrastructure::event_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(String),

    #[error("Event not found")]
    NotFound { id: EventId },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApplicationError {
    pub fn title_required() -> Self {
        Self::Validation("title is required".into())
    }
}
