// Port for the event list. Use cases code against this trait; the shell
// decides which adapter backs it.

pub mod in_memory;

use crate::modules::events::core::event::{Event, EventId};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

/// Every method is one atomic step: an implementation must not let another
/// caller observe or interleave with the lookup-then-mutate it performs.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events in insertion order.
    async fn list(&self) -> Result<Vec<Event>, StoreError>;

    async fn find(&self, id: EventId) -> Result<Option<Event>, StoreError>;

    /// Appends a record under the next free id and returns it.
    async fn insert(&self, title: String) -> Result<Event, StoreError>;

    /// `None` when no record has `id`. A `None` title leaves the record as is.
    async fn update_title(
        &self,
        id: EventId,
        title: Option<String>,
    ) -> Result<Option<Event>, StoreError>;

    /// Returns the removed record, `None` when no record has `id`.
    async fn remove(&self, id: EventId) -> Result<Option<Event>, StoreError>;
}
