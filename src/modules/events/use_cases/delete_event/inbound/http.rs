use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::modules::events::adapters::inbound::event_id::EventIdPath;
use crate::shell::state::AppState;

pub async fn handle(
    EventIdPath(id): EventIdPath,
    State(state): State<AppState>,
) -> impl IntoResponse {
    match state.delete_handler.handle(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}
