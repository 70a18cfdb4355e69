use axum::{
    extract::{FromRequestParts, Path},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};

use crate::modules::events::adapters::inbound::http_error::error_response;
use crate::modules::events::core::event::EventId;

/// `{id}` path segment. Anything other than plain digits addresses no event,
/// so it is answered with 404 rather than a 400 extraction error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventIdPath(pub EventId);

fn parse_event_id(raw: &str) -> Option<EventId> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl<S> FromRequestParts<S> for EventIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;
        parse_event_id(&raw)
            .map(Self)
            .ok_or_else(|| error_response(StatusCode::NOT_FOUND, "Event not found"))
    }
}
